//! Newsletter Queries

/// 列出全部订阅查询（管理端）
#[derive(Debug, Clone)]
pub struct ListSubscriptions;
