//! Newsletter HTTP Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{CancelSubscription, ListSubscriptions, SubscribeNewsletter};
use crate::infrastructure::http::dto::{ApiResponse, Empty};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
    #[serde(default)]
    pub theme_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct CancelRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub id: Uuid,
    pub email: String,
    pub created: bool,
}

#[derive(Debug, Serialize)]
pub struct SubscriptionResponse {
    pub id: Uuid,
    pub email: String,
    pub theme_ids: Vec<Uuid>,
    pub active: bool,
    pub created_at: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// 订阅 newsletter
pub async fn subscribe_newsletter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubscribeRequest>,
) -> Result<Json<ApiResponse<SubscribeResponse>>, ApiError> {
    let command = SubscribeNewsletter {
        email: req.email,
        theme_ids: req.theme_ids,
    };

    let result = state.subscribe_newsletter_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(SubscribeResponse {
        id: result.id,
        email: result.email,
        created: result.created,
    })))
}

/// 取消订阅
pub async fn cancel_subscription(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CancelRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = CancelSubscription { email: req.email };

    state.cancel_subscription_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}

/// 列出全部订阅（管理端）
pub async fn list_subscriptions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<SubscriptionResponse>>>, ApiError> {
    let result = state
        .list_subscriptions_handler
        .handle(ListSubscriptions)
        .await?;

    let responses: Vec<SubscriptionResponse> = result
        .into_iter()
        .map(|s| SubscriptionResponse {
            id: s.id,
            email: s.email,
            theme_ids: s.theme_ids,
            active: s.active,
            created_at: s.created_at,
        })
        .collect();

    Ok(Json(ApiResponse::success(responses)))
}
