//! Site Config Queries

/// 读取站点配置查询
#[derive(Debug, Clone)]
pub struct GetSiteConfig;
