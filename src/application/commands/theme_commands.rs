//! Theme Commands

/// 创建主题命令
#[derive(Debug, Clone)]
pub struct CreateTheme {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}
