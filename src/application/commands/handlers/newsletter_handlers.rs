//! Newsletter Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{CancelSubscription, SubscribeNewsletter};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    RepositoryError, SubscriptionRecord, SubscriptionRepositoryPort, ThemeRepositoryPort,
};
use crate::domain::newsletter::{EmailAddress, Subscription};
use crate::domain::theme::ThemeId;

// ============================================================================
// SubscribeNewsletter
// ============================================================================

/// 订阅响应
///
/// created 区分新订阅与老订阅者回归
#[derive(Debug, Clone)]
pub struct SubscribeResponse {
    pub id: Uuid,
    pub email: String,
    pub created: bool,
}

/// SubscribeNewsletter Handler
///
/// 三种路径: 已激活 → 冲突; 已取消 → 回归; 未注册 → 新建
pub struct SubscribeNewsletterHandler {
    subscription_repo: Arc<dyn SubscriptionRepositoryPort>,
    theme_repo: Arc<dyn ThemeRepositoryPort>,
}

impl SubscribeNewsletterHandler {
    pub fn new(
        subscription_repo: Arc<dyn SubscriptionRepositoryPort>,
        theme_repo: Arc<dyn ThemeRepositoryPort>,
    ) -> Self {
        Self {
            subscription_repo,
            theme_repo,
        }
    }

    pub async fn handle(
        &self,
        command: SubscribeNewsletter,
    ) -> Result<SubscribeResponse, ApplicationError> {
        let email = EmailAddress::new(command.email).map_err(ApplicationError::validation)?;
        let theme_ids = self.resolve_theme_ids(&command.theme_ids).await?;

        if let Some(record) = self.subscription_repo.find_by_email(email.as_str()).await? {
            if record.active {
                return Err(ApplicationError::conflict(format!(
                    "email already subscribed: {}",
                    email
                )));
            }

            // 回归: 重新激活，有传主题则整体替换
            let mut subscription =
                Subscription::try_from(record).map_err(ApplicationError::internal)?;
            subscription.resubscribe(theme_ids);

            let record = SubscriptionRecord::from(&subscription);
            self.subscription_repo.update(&record).await?;

            tracing::info!(email = %record.email, "Newsletter subscription reactivated");

            return Ok(SubscribeResponse {
                id: record.id,
                email: record.email,
                created: false,
            });
        }

        let subscription = Subscription::new(email, theme_ids);
        let record = SubscriptionRecord::from(&subscription);

        // email 唯一约束由存储层兜底
        match self.subscription_repo.save(&record).await {
            Ok(()) => {}
            Err(RepositoryError::Duplicate(message)) => {
                return Err(ApplicationError::conflict(message));
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(email = %record.email, "Newsletter subscription created");

        Ok(SubscribeResponse {
            id: record.id,
            email: record.email,
            created: true,
        })
    }

    /// 校验主题列表，所有 ID 必须存在
    async fn resolve_theme_ids(
        &self,
        theme_ids: &[Uuid],
    ) -> Result<Vec<ThemeId>, ApplicationError> {
        if theme_ids.is_empty() {
            return Ok(Vec::new());
        }

        let found = self.theme_repo.find_by_ids(theme_ids).await?;
        for id in theme_ids {
            if !found.iter().any(|theme| theme.id == *id) {
                return Err(ApplicationError::validation(format!(
                    "theme not found: {}",
                    id
                )));
            }
        }

        Ok(theme_ids.iter().copied().map(ThemeId::from_uuid).collect())
    }
}

// ============================================================================
// CancelSubscription
// ============================================================================

/// CancelSubscription Handler - 只置状态，记录保留
pub struct CancelSubscriptionHandler {
    subscription_repo: Arc<dyn SubscriptionRepositoryPort>,
}

impl CancelSubscriptionHandler {
    pub fn new(subscription_repo: Arc<dyn SubscriptionRepositoryPort>) -> Self {
        Self { subscription_repo }
    }

    pub async fn handle(&self, command: CancelSubscription) -> Result<(), ApplicationError> {
        let email = command.email.trim();

        let record = self
            .subscription_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::not_found_str("Subscription", email))?;

        let mut subscription =
            Subscription::try_from(record).map_err(ApplicationError::internal)?;
        subscription.cancel();

        let record = SubscriptionRecord::from(&subscription);
        self.subscription_repo.update(&record).await?;

        tracing::info!(email = %record.email, "Newsletter subscription cancelled");

        Ok(())
    }
}
