//! Newsletter Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EmailAddress, SubscriptionId};
use crate::domain::theme::ThemeId;

/// Subscription 聚合根
///
/// 不变量:
/// - email 全站唯一（由存储层约束兜底）
/// - 取消订阅只置 active，记录保留以便回归
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    id: SubscriptionId,
    email: EmailAddress,
    theme_ids: Vec<ThemeId>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Subscription {
    /// 新建订阅
    pub fn new(email: EmailAddress, theme_ids: Vec<ThemeId>) -> Self {
        let now = Utc::now();
        Self {
            id: SubscriptionId::new(),
            email,
            theme_ids,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// 老订阅者回归
    ///
    /// 传入空主题列表时保留原有主题不变
    pub fn resubscribe(&mut self, theme_ids: Vec<ThemeId>) {
        self.active = true;
        if !theme_ids.is_empty() {
            self.theme_ids = theme_ids;
        }
        self.updated_at = Utc::now();
    }

    /// 取消订阅
    pub fn cancel(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn theme_ids(&self) -> &[ThemeId] {
        &self.theme_ids
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 从持久化字段重建聚合
    pub fn restore(
        id: SubscriptionId,
        email: EmailAddress,
        theme_ids: Vec<ThemeId>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            theme_ids,
            active,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription() -> Subscription {
        let email = EmailAddress::new("leitor@example.com").unwrap();
        Subscription::new(email, vec![ThemeId::new()])
    }

    #[test]
    fn test_new_subscription_is_active() {
        let sub = subscription();
        assert!(sub.is_active());
        assert_eq!(sub.theme_ids().len(), 1);
    }

    #[test]
    fn test_cancel_keeps_record() {
        let mut sub = subscription();
        sub.cancel();

        assert!(!sub.is_active());
        assert_eq!(sub.theme_ids().len(), 1);
    }

    #[test]
    fn test_resubscribe_with_empty_list_keeps_themes() {
        let mut sub = subscription();
        let original = sub.theme_ids().to_vec();
        sub.cancel();

        sub.resubscribe(Vec::new());

        assert!(sub.is_active());
        assert_eq!(sub.theme_ids(), original.as_slice());
    }

    #[test]
    fn test_resubscribe_replaces_themes_when_given() {
        let mut sub = subscription();
        sub.cancel();

        let replacement = vec![ThemeId::new(), ThemeId::new()];
        sub.resubscribe(replacement.clone());

        assert!(sub.is_active());
        assert_eq!(sub.theme_ids(), replacement.as_slice());
    }
}
