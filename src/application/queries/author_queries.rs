//! Author Queries

/// 作者专栏详情查询（按笔名）
#[derive(Debug, Clone)]
pub struct GetAuthor {
    pub nickname: String,
}

/// 列出在职作者查询
#[derive(Debug, Clone)]
pub struct ListAuthors;
