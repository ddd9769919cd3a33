//! Editorial HTTP Handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreateEditorial, DeactivateEditorial, DeleteEditorial, EditorialsByAuthor, EditorialsByTheme,
    GetEditorial, LatestEditorials, ListEditorials, PublishEditorial, ReactivateEditorial,
    ScheduleEditorial, SearchEditorials, UpdateEditorial, ViewEditorial,
};
use crate::infrastructure::http::dto::{ApiResponse, Empty};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

fn default_layout() -> String {
    "layout1".to_string()
}

fn default_style() -> u8 {
    1
}

fn default_latest_limit() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct CreateEditorialRequest {
    pub title: String,
    pub body: String,
    pub author_id: Option<Uuid>,
    #[serde(default)]
    pub theme_ids: Vec<Uuid>,
    #[serde(default = "default_layout")]
    pub layout: String,
    #[serde(default = "default_style")]
    pub style: u8,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
}

/// 修订是整体替换，版式与样式必须显式给出
#[derive(Debug, Deserialize)]
pub struct UpdateEditorialRequest {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub author_id: Option<Uuid>,
    #[serde(default)]
    pub theme_ids: Vec<Uuid>,
    pub layout: String,
    pub style: u8,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteEditorialRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct GetEditorialRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct PublishEditorialRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleEditorialRequest {
    pub id: Uuid,
    pub publish_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct DeactivateEditorialRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ReactivateEditorialRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ViewEditorialRequest {
    pub id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct LatestEditorialsRequest {
    #[serde(default = "default_latest_limit")]
    pub limit: usize,
}

#[derive(Debug, Deserialize)]
pub struct EditorialsByThemeRequest {
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct EditorialsByAuthorRequest {
    pub nickname: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchEditorialsRequest {
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct CreateEditorialResponse {
    pub id: Uuid,
    pub title: String,
    pub status: String,
}

/// 工作流命令（发布/排期/下线/恢复）的统一响应
#[derive(Debug, Serialize)]
pub struct EditorialWorkflowResponse {
    pub id: Uuid,
    pub status: String,
    pub published_at: Option<String>,
    pub scheduled_at: Option<String>,
}

impl From<crate::application::WorkflowResponse> for EditorialWorkflowResponse {
    fn from(result: crate::application::WorkflowResponse) -> Self {
        Self {
            id: result.id,
            status: result.status.as_str().to_string(),
            published_at: result.published_at.map(|t| t.to_rfc3339()),
            scheduled_at: result.scheduled_at.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EditorialSummaryResponse {
    pub id: Uuid,
    pub title: String,
    pub author_id: Option<Uuid>,
    pub theme_ids: Vec<Uuid>,
    pub layout: String,
    pub style: u8,
    pub image1: Option<String>,
    pub status: String,
    pub published_at: Option<String>,
    pub active: bool,
    pub views: u64,
    pub created_at: String,
}

impl From<crate::application::EditorialSummaryResponse> for EditorialSummaryResponse {
    fn from(result: crate::application::EditorialSummaryResponse) -> Self {
        Self {
            id: result.id,
            title: result.title,
            author_id: result.author_id,
            theme_ids: result.theme_ids,
            layout: result.layout,
            style: result.style,
            image1: result.image1,
            status: result.status,
            published_at: result.published_at,
            active: result.active,
            views: result.views,
            created_at: result.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EditorialDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub sections: Vec<String>,
    pub author_id: Option<Uuid>,
    pub theme_ids: Vec<Uuid>,
    pub layout: String,
    pub style: u8,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub status: String,
    pub published_at: Option<String>,
    pub scheduled: bool,
    pub scheduled_at: Option<String>,
    pub active: bool,
    pub views: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<crate::application::EditorialDetailResponse> for EditorialDetailResponse {
    fn from(result: crate::application::EditorialDetailResponse) -> Self {
        Self {
            id: result.id,
            title: result.title,
            body: result.body,
            sections: result.sections,
            author_id: result.author_id,
            theme_ids: result.theme_ids,
            layout: result.layout,
            style: result.style,
            image1: result.image1,
            image2: result.image2,
            image3: result.image3,
            status: result.status,
            published_at: result.published_at,
            scheduled: result.scheduled,
            scheduled_at: result.scheduled_at,
            active: result.active,
            views: result.views,
            created_at: result.created_at,
            updated_at: result.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EditorialViewResponse {
    pub editorial: EditorialDetailResponse,
    pub related: Vec<EditorialSummaryResponse>,
}

#[derive(Debug, Serialize)]
pub struct EditorialsByThemeResponse {
    pub theme_id: Uuid,
    pub theme_name: String,
    pub theme_slug: String,
    pub editorials: Vec<EditorialSummaryResponse>,
}

#[derive(Debug, Serialize)]
pub struct EditorialsByAuthorResponse {
    pub author_id: Uuid,
    pub author_name: String,
    pub author_nickname: String,
    pub editorials: Vec<EditorialSummaryResponse>,
}

// ============================================================================
// Handlers
// ============================================================================

/// 创建社论（草稿）
pub async fn create_editorial(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateEditorialRequest>,
) -> Result<Json<ApiResponse<CreateEditorialResponse>>, ApiError> {
    let command = CreateEditorial {
        title: req.title,
        body: req.body,
        author_id: req.author_id,
        theme_ids: req.theme_ids,
        layout: req.layout,
        style: req.style,
        image1: req.image1,
        image2: req.image2,
        image3: req.image3,
    };

    let result = state.create_editorial_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(CreateEditorialResponse {
        id: result.id,
        title: result.title,
        status: result.status.as_str().to_string(),
    })))
}

/// 修订社论
pub async fn update_editorial(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateEditorialRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = UpdateEditorial {
        editorial_id: req.id,
        title: req.title,
        body: req.body,
        author_id: req.author_id,
        theme_ids: req.theme_ids,
        layout: req.layout,
        style: req.style,
        image1: req.image1,
        image2: req.image2,
        image3: req.image3,
    };

    state.update_editorial_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}

/// 删除社论
pub async fn delete_editorial(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteEditorialRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = DeleteEditorial { editorial_id: req.id };

    state.delete_editorial_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}

/// 获取社论详情（管理端，不限状态）
pub async fn get_editorial(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetEditorialRequest>,
) -> Result<Json<ApiResponse<EditorialDetailResponse>>, ApiError> {
    let query = GetEditorial { editorial_id: req.id };

    let result = state.get_editorial_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(result.into())))
}

/// 列出所有社论（管理端）
pub async fn list_editorials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<EditorialSummaryResponse>>>, ApiError> {
    let result = state.list_editorials_handler.handle(ListEditorials).await?;

    let responses: Vec<EditorialSummaryResponse> =
        result.into_iter().map(EditorialSummaryResponse::from).collect();

    Ok(Json(ApiResponse::success(responses)))
}

/// 立即发布
pub async fn publish_editorial(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PublishEditorialRequest>,
) -> Result<Json<ApiResponse<EditorialWorkflowResponse>>, ApiError> {
    let command = PublishEditorial { editorial_id: req.id };

    let result = state.publish_editorial_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(result.into())))
}

/// 排期发布
pub async fn schedule_editorial(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScheduleEditorialRequest>,
) -> Result<Json<ApiResponse<EditorialWorkflowResponse>>, ApiError> {
    let command = ScheduleEditorial {
        editorial_id: req.id,
        publish_at: req.publish_at,
    };

    let result = state.schedule_editorial_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(result.into())))
}

/// 下线社论
pub async fn deactivate_editorial(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeactivateEditorialRequest>,
) -> Result<Json<ApiResponse<EditorialWorkflowResponse>>, ApiError> {
    let command = DeactivateEditorial { editorial_id: req.id };

    let result = state.deactivate_editorial_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(result.into())))
}

/// 恢复上线
pub async fn reactivate_editorial(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReactivateEditorialRequest>,
) -> Result<Json<ApiResponse<EditorialWorkflowResponse>>, ApiError> {
    let command = ReactivateEditorial { editorial_id: req.id };

    let result = state.reactivate_editorial_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(result.into())))
}

/// 最新公开社论
pub async fn latest_editorials(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LatestEditorialsRequest>,
) -> Result<Json<ApiResponse<Vec<EditorialSummaryResponse>>>, ApiError> {
    let query = LatestEditorials {
        limit: Some(req.limit),
    };

    let result = state.latest_editorials_handler.handle(query).await?;

    let responses: Vec<EditorialSummaryResponse> =
        result.into_iter().map(EditorialSummaryResponse::from).collect();

    Ok(Json(ApiResponse::success(responses)))
}

/// 阅读公开社论（浏览数 +1，附相关社论）
pub async fn view_editorial(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ViewEditorialRequest>,
) -> Result<Json<ApiResponse<EditorialViewResponse>>, ApiError> {
    let query = ViewEditorial { editorial_id: req.id };

    let result = state.view_editorial_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(EditorialViewResponse {
        editorial: result.editorial.into(),
        related: result.related.into_iter().map(EditorialSummaryResponse::from).collect(),
    })))
}

/// 某主题下的公开社论
pub async fn editorials_by_theme(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EditorialsByThemeRequest>,
) -> Result<Json<ApiResponse<EditorialsByThemeResponse>>, ApiError> {
    let query = EditorialsByTheme {
        theme_slug: req.slug,
    };

    let result = state.editorials_by_theme_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(EditorialsByThemeResponse {
        theme_id: result.theme_id,
        theme_name: result.theme_name,
        theme_slug: result.theme_slug,
        editorials: result
            .editorials
            .into_iter()
            .map(EditorialSummaryResponse::from)
            .collect(),
    })))
}

/// 某作者署名的公开社论
pub async fn editorials_by_author(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EditorialsByAuthorRequest>,
) -> Result<Json<ApiResponse<EditorialsByAuthorResponse>>, ApiError> {
    let query = EditorialsByAuthor {
        nickname: req.nickname,
    };

    let result = state.editorials_by_author_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(EditorialsByAuthorResponse {
        author_id: result.author_id,
        author_name: result.author_name,
        author_nickname: result.author_nickname,
        editorials: result
            .editorials
            .into_iter()
            .map(EditorialSummaryResponse::from)
            .collect(),
    })))
}

/// 公开社论检索
pub async fn search_editorials(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchEditorialsRequest>,
) -> Result<Json<ApiResponse<Vec<EditorialSummaryResponse>>>, ApiError> {
    let query = SearchEditorials { query: req.q };

    let result = state.search_editorials_handler.handle(query).await?;

    let responses: Vec<EditorialSummaryResponse> =
        result.into_iter().map(EditorialSummaryResponse::from).collect();

    Ok(Json(ApiResponse::success(responses)))
}
