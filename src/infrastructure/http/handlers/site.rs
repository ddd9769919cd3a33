//! Site Config HTTP Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{GetSiteConfig, UpdateSiteConfig};
use crate::domain::SiteConfig;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UpdateSiteConfigRequest {
    pub site_name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub youtube: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SiteConfigResponse {
    pub site_name: String,
    pub tagline: String,
    pub about: String,
    pub contact_email: String,
    pub phone: String,
    pub address: String,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub youtube: Option<String>,
    pub logo: Option<String>,
    pub updated_at: String,
}

impl From<SiteConfig> for SiteConfigResponse {
    fn from(config: SiteConfig) -> Self {
        Self {
            site_name: config.site_name,
            tagline: config.tagline,
            about: config.about,
            contact_email: config.contact_email,
            phone: config.phone,
            address: config.address,
            twitter: config.twitter,
            linkedin: config.linkedin,
            instagram: config.instagram,
            facebook: config.facebook,
            youtube: config.youtube,
            logo: config.logo,
            updated_at: config.updated_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 读取站点配置
pub async fn get_site_config(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SiteConfigResponse>>, ApiError> {
    let result = state.get_site_config_handler.handle(GetSiteConfig).await?;

    Ok(Json(ApiResponse::success(result.into())))
}

/// 更新站点配置（整体替换）
pub async fn update_site_config(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateSiteConfigRequest>,
) -> Result<Json<ApiResponse<SiteConfigResponse>>, ApiError> {
    let command = UpdateSiteConfig {
        site_name: req.site_name,
        tagline: req.tagline,
        about: req.about,
        contact_email: req.contact_email,
        phone: req.phone,
        address: req.address,
        twitter: req.twitter,
        linkedin: req.linkedin,
        instagram: req.instagram,
        facebook: req.facebook,
        youtube: req.youtube,
        logo: req.logo,
    };

    let result = state.update_site_config_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(result.into())))
}
