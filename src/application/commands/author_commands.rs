//! Author Commands

/// 创建作者命令
#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub full_name: String,
    pub nickname: String,
    pub bio: String,
    pub photo: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub website: Option<String>,
}
