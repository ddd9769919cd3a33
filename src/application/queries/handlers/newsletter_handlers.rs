//! Newsletter Query Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{SubscriptionRecord, SubscriptionRepositoryPort};
use crate::application::queries::ListSubscriptions;

// ============================================================================
// Response DTOs
// ============================================================================

/// 订阅响应
#[derive(Debug, Clone)]
pub struct SubscriptionResponse {
    pub id: Uuid,
    pub email: String,
    pub theme_ids: Vec<Uuid>,
    pub active: bool,
    pub created_at: String,
}

impl From<SubscriptionRecord> for SubscriptionResponse {
    fn from(record: SubscriptionRecord) -> Self {
        Self {
            id: record.id,
            email: record.email,
            theme_ids: record.theme_ids,
            active: record.active,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListSubscriptions Handler - 管理端，含已取消
pub struct ListSubscriptionsHandler {
    subscription_repo: Arc<dyn SubscriptionRepositoryPort>,
}

impl ListSubscriptionsHandler {
    pub fn new(subscription_repo: Arc<dyn SubscriptionRepositoryPort>) -> Self {
        Self { subscription_repo }
    }

    pub async fn handle(
        &self,
        _query: ListSubscriptions,
    ) -> Result<Vec<SubscriptionResponse>, ApplicationError> {
        let subscriptions = self.subscription_repo.find_all().await?;
        Ok(subscriptions.into_iter().map(SubscriptionResponse::from).collect())
    }
}
