//! Theme Queries

/// 列出启用主题查询
#[derive(Debug, Clone)]
pub struct ListThemes;
