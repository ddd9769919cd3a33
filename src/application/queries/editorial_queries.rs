//! Editorial Queries

use uuid::Uuid;

/// 获取社论详情查询（管理端，不限状态）
#[derive(Debug, Clone)]
pub struct GetEditorial {
    pub editorial_id: Uuid,
}

/// 列出所有社论查询（管理端）
#[derive(Debug, Clone)]
pub struct ListEditorials;

/// 最新公开社论查询
#[derive(Debug, Clone)]
pub struct LatestEditorials {
    pub limit: Option<usize>,
}

/// 某主题下公开社论查询
#[derive(Debug, Clone)]
pub struct EditorialsByTheme {
    pub theme_slug: String,
}

/// 某作者署名的公开社论查询（按笔名）
#[derive(Debug, Clone)]
pub struct EditorialsByAuthor {
    pub nickname: String,
}

/// 公开社论全文检索查询
#[derive(Debug, Clone)]
pub struct SearchEditorials {
    pub query: String,
}

/// 阅读公开社论查询
///
/// 读取的同时浏览数 +1，并附带相关社论
#[derive(Debug, Clone)]
pub struct ViewEditorial {
    pub editorial_id: Uuid,
}
