//! Editorial Commands

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 创建社论命令（草稿状态）
#[derive(Debug, Clone)]
pub struct CreateEditorial {
    pub title: String,
    pub body: String,
    pub author_id: Option<Uuid>,
    pub theme_ids: Vec<Uuid>,
    /// 版式标识（layout1/layout2/layout3）
    pub layout: String,
    /// 样式编号（1~3）
    pub style: u8,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
}

/// 修订社论命令（标题/正文/版式/署名/主题/配图整体替换）
#[derive(Debug, Clone)]
pub struct UpdateEditorial {
    pub editorial_id: Uuid,
    pub title: String,
    pub body: String,
    pub author_id: Option<Uuid>,
    pub theme_ids: Vec<Uuid>,
    pub layout: String,
    pub style: u8,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
}

/// 删除社论命令
#[derive(Debug, Clone)]
pub struct DeleteEditorial {
    pub editorial_id: Uuid,
}

/// 立即发布命令
#[derive(Debug, Clone)]
pub struct PublishEditorial {
    pub editorial_id: Uuid,
}

/// 排期发布命令
#[derive(Debug, Clone)]
pub struct ScheduleEditorial {
    pub editorial_id: Uuid,
    pub publish_at: DateTime<Utc>,
}

/// 下线命令
#[derive(Debug, Clone)]
pub struct DeactivateEditorial {
    pub editorial_id: Uuid,
}

/// 恢复上线命令
#[derive(Debug, Clone)]
pub struct ReactivateEditorial {
    pub editorial_id: Uuid,
}
