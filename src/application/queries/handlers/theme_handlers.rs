//! Theme Query Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{ThemeRecord, ThemeRepositoryPort};
use crate::application::queries::ListThemes;

// ============================================================================
// Response DTOs
// ============================================================================

/// 主题响应
#[derive(Debug, Clone)]
pub struct ThemeResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl From<ThemeRecord> for ThemeResponse {
    fn from(record: ThemeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            slug: record.slug,
            description: record.description,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListThemes Handler - 仅启用的主题
pub struct ListThemesHandler {
    theme_repo: Arc<dyn ThemeRepositoryPort>,
}

impl ListThemesHandler {
    pub fn new(theme_repo: Arc<dyn ThemeRepositoryPort>) -> Self {
        Self { theme_repo }
    }

    pub async fn handle(&self, _query: ListThemes) -> Result<Vec<ThemeResponse>, ApplicationError> {
        let themes = self.theme_repo.find_all_active().await?;
        Ok(themes.into_iter().map(ThemeResponse::from).collect())
    }
}
