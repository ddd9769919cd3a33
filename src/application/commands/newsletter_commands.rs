//! Newsletter Commands

use uuid::Uuid;

/// 订阅 newsletter 命令
///
/// 已退订的邮箱重新订阅时复用原记录
#[derive(Debug, Clone)]
pub struct SubscribeNewsletter {
    pub email: String,
    pub theme_ids: Vec<Uuid>,
}

/// 取消订阅命令
#[derive(Debug, Clone)]
pub struct CancelSubscription {
    pub email: String,
}
