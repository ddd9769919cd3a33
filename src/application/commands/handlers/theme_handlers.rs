//! Theme Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::CreateTheme;
use crate::application::error::ApplicationError;
use crate::application::ports::{RepositoryError, ThemeRecord, ThemeRepositoryPort};
use crate::domain::theme::{Slug, Theme, ThemeName};

// ============================================================================
// CreateTheme
// ============================================================================

/// 创建主题响应
#[derive(Debug, Clone)]
pub struct CreateThemeResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// CreateTheme Handler
pub struct CreateThemeHandler {
    theme_repo: Arc<dyn ThemeRepositoryPort>,
}

impl CreateThemeHandler {
    pub fn new(theme_repo: Arc<dyn ThemeRepositoryPort>) -> Self {
        Self { theme_repo }
    }

    pub async fn handle(
        &self,
        command: CreateTheme,
    ) -> Result<CreateThemeResponse, ApplicationError> {
        let name = ThemeName::new(command.name).map_err(ApplicationError::validation)?;

        // 未给出 slug 时从名称派生
        let slug = if command.slug.trim().is_empty() {
            Slug::from_name(name.as_str()).map_err(ApplicationError::validation)?
        } else {
            Slug::new(command.slug).map_err(ApplicationError::validation)?
        };

        let theme = Theme::new(name, slug, command.description);
        let record = ThemeRecord::from(&theme);

        // name/slug 的唯一约束由存储层兜底
        match self.theme_repo.save(&record).await {
            Ok(()) => {}
            Err(RepositoryError::Duplicate(message)) => {
                return Err(ApplicationError::conflict(message));
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(
            theme_id = %record.id,
            slug = %record.slug,
            "Theme created"
        );

        Ok(CreateThemeResponse {
            id: record.id,
            name: record.name,
            slug: record.slug,
        })
    }
}
