//! Theme HTTP Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{CreateTheme, ListThemes};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateThemeRequest {
    pub name: String,
    /// 缺省时从名称派生
    #[serde(default)]
    pub slug: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateThemeResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// 创建主题
pub async fn create_theme(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateThemeRequest>,
) -> Result<Json<ApiResponse<CreateThemeResponse>>, ApiError> {
    let command = CreateTheme {
        name: req.name,
        slug: req.slug,
        description: req.description,
    };

    let result = state.create_theme_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(CreateThemeResponse {
        id: result.id,
        name: result.name,
        slug: result.slug,
    })))
}

/// 列出启用主题
pub async fn list_themes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ThemeResponse>>>, ApiError> {
    let result = state.list_themes_handler.handle(ListThemes).await?;

    let responses: Vec<ThemeResponse> = result
        .into_iter()
        .map(|t| ThemeResponse {
            id: t.id,
            name: t.name,
            slug: t.slug,
            description: t.description,
        })
        .collect();

    Ok(Json(ApiResponse::success(responses)))
}
