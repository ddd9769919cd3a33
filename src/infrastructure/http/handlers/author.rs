//! Author HTTP Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{CreateAuthor, GetAuthor, ListAuthors};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

use super::editorial::EditorialSummaryResponse;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub full_name: String,
    pub nickname: String,
    #[serde(default)]
    pub bio: String,
    pub photo: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetAuthorRequest {
    pub nickname: String,
}

#[derive(Debug, Serialize)]
pub struct CreateAuthorResponse {
    pub id: Uuid,
    pub full_name: String,
    pub nickname: String,
}

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    pub id: Uuid,
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

impl From<crate::application::AuthorResponse> for AuthorResponse {
    fn from(result: crate::application::AuthorResponse) -> Self {
        Self {
            id: result.id,
            full_name: result.full_name,
            nickname: result.nickname,
            bio: result.bio,
            photo: result.photo,
            twitter: result.twitter,
            linkedin: result.linkedin,
            instagram: result.instagram,
            facebook: result.facebook,
            website: result.website,
        }
    }
}

/// 作者专栏响应：作者信息 + 署名的公开社论 + 其他在职作者
#[derive(Debug, Serialize)]
pub struct AuthorDetailResponse {
    pub author: AuthorResponse,
    pub editorials: Vec<EditorialSummaryResponse>,
    pub other_authors: Vec<AuthorResponse>,
}

// ============================================================================
// Handlers
// ============================================================================

/// 创建作者
pub async fn create_author(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAuthorRequest>,
) -> Result<Json<ApiResponse<CreateAuthorResponse>>, ApiError> {
    let command = CreateAuthor {
        full_name: req.full_name,
        nickname: req.nickname,
        bio: req.bio,
        photo: req.photo,
        twitter: req.twitter,
        linkedin: req.linkedin,
        instagram: req.instagram,
        facebook: req.facebook,
        website: req.website,
    };

    let result = state.create_author_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(CreateAuthorResponse {
        id: result.id,
        full_name: result.full_name,
        nickname: result.nickname,
    })))
}

/// 作者专栏（按笔名，附公开社论和其他在职作者）
pub async fn get_author(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetAuthorRequest>,
) -> Result<Json<ApiResponse<AuthorDetailResponse>>, ApiError> {
    let query = GetAuthor {
        nickname: req.nickname,
    };

    let result = state.get_author_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(AuthorDetailResponse {
        author: result.author.into(),
        editorials: result
            .editorials
            .into_iter()
            .map(EditorialSummaryResponse::from)
            .collect(),
        other_authors: result
            .other_authors
            .into_iter()
            .map(AuthorResponse::from)
            .collect(),
    })))
}

/// 列出在职作者
pub async fn list_authors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<AuthorResponse>>>, ApiError> {
    let result = state.list_authors_handler.handle(ListAuthors).await?;

    let responses: Vec<AuthorResponse> = result.into_iter().map(AuthorResponse::from).collect();

    Ok(Json(ApiResponse::success(responses)))
}
