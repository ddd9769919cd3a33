//! Editorial Command Handlers

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{
    CreateEditorial, DeactivateEditorial, DeleteEditorial, PublishEditorial, ReactivateEditorial,
    ScheduleEditorial, UpdateEditorial,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AuthorRepositoryPort, EditorialRecord, EditorialRepositoryPort, ThemeRepositoryPort,
};
use crate::domain::author::AuthorId;
use crate::domain::editorial::{Editorial, EditorialStatus, Layout, Style, Title};
use crate::domain::theme::ThemeId;

/// 校验版式/样式入参
fn parse_layout(layout: &str) -> Result<Layout, ApplicationError> {
    Layout::from_str(layout)
        .ok_or_else(|| ApplicationError::validation(format!("unknown layout: {}", layout)))
}

/// 校验主题列表，所有 ID 必须存在
async fn resolve_theme_ids(
    theme_repo: &Arc<dyn ThemeRepositoryPort>,
    theme_ids: &[Uuid],
) -> Result<Vec<ThemeId>, ApplicationError> {
    if theme_ids.is_empty() {
        return Ok(Vec::new());
    }

    let found = theme_repo.find_by_ids(theme_ids).await?;
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

/// 校验署名作者存在
async fn resolve_author_id(
    author_repo: &Arc<dyn AuthorRepositoryPort>,
    author_id: Option<Uuid>,
) -> Result<Option<AuthorId>, ApplicationError> {
    match author_id {
        None => Ok(None),
        Some(id) => {
            author_repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApplicationError::validation(format!("author not found: {}", id)))?;
            Ok(Some(AuthorId::from_uuid(id)))
        }
    }
}

// ============================================================================
// CreateEditorial
// ============================================================================

/// 创建社论响应
#[derive(Debug, Clone)]
pub struct CreateEditorialResponse {
    pub id: Uuid,
    pub title: String,
    pub status: EditorialStatus,
}

/// CreateEditorial Handler - 以草稿状态入库
pub struct CreateEditorialHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
    theme_repo: Arc<dyn ThemeRepositoryPort>,
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl CreateEditorialHandler {
    pub fn new(
        editorial_repo: Arc<dyn EditorialRepositoryPort>,
        theme_repo: Arc<dyn ThemeRepositoryPort>,
        author_repo: Arc<dyn AuthorRepositoryPort>,
    ) -> Self {
        Self {
            editorial_repo,
            theme_repo,
            author_repo,
        }
    }

    pub async fn handle(
        &self,
        command: CreateEditorial,
    ) -> Result<CreateEditorialResponse, ApplicationError> {
        let title = Title::new(command.title).map_err(ApplicationError::validation)?;
        let layout = parse_layout(&command.layout)?;
        let style = Style::new(command.style).map_err(ApplicationError::validation)?;

        let theme_ids = resolve_theme_ids(&self.theme_repo, &command.theme_ids).await?;
        let author_id = resolve_author_id(&self.author_repo, command.author_id).await?;

        let mut editorial = Editorial::new(title, command.body, layout, style);
        editorial.assign_author(author_id);
        editorial.set_themes(theme_ids);
        editorial.set_images(command.image1, command.image2, command.image3);

        let record = EditorialRecord::from(&editorial);
        self.editorial_repo.save(&record).await?;

        tracing::info!(
            editorial_id = %record.id,
            title = %record.title,
            "Editorial created (draft)"
        );

        Ok(CreateEditorialResponse {
            id: record.id,
            title: record.title,
            status: record.status,
        })
    }
}

// ============================================================================
// UpdateEditorial
// ============================================================================

/// UpdateEditorial Handler - 整体修订
pub struct UpdateEditorialHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
    theme_repo: Arc<dyn ThemeRepositoryPort>,
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl UpdateEditorialHandler {
    pub fn new(
        editorial_repo: Arc<dyn EditorialRepositoryPort>,
        theme_repo: Arc<dyn ThemeRepositoryPort>,
        author_repo: Arc<dyn AuthorRepositoryPort>,
    ) -> Self {
        Self {
            editorial_repo,
            theme_repo,
            author_repo,
        }
    }

    pub async fn handle(&self, command: UpdateEditorial) -> Result<(), ApplicationError> {
        let record = self
            .editorial_repo
            .find_by_id(command.editorial_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Editorial", command.editorial_id))?;

        let title = Title::new(command.title).map_err(ApplicationError::validation)?;
        let layout = parse_layout(&command.layout)?;
        let style = Style::new(command.style).map_err(ApplicationError::validation)?;

        let theme_ids = resolve_theme_ids(&self.theme_repo, &command.theme_ids).await?;
        let author_id = resolve_author_id(&self.author_repo, command.author_id).await?;

        let mut editorial =
            Editorial::try_from(record).map_err(ApplicationError::internal)?;
        editorial.revise(title, command.body, layout, style);
        editorial.assign_author(author_id);
        editorial.set_themes(theme_ids);
        editorial.set_images(command.image1, command.image2, command.image3);

        self.editorial_repo
            .update(&EditorialRecord::from(&editorial))
            .await?;

        tracing::info!(editorial_id = %command.editorial_id, "Editorial updated");

        Ok(())
    }
}

// ============================================================================
// DeleteEditorial
// ============================================================================

/// DeleteEditorial Handler
pub struct DeleteEditorialHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
}

impl DeleteEditorialHandler {
    pub fn new(editorial_repo: Arc<dyn EditorialRepositoryPort>) -> Self {
        Self { editorial_repo }
    }

    pub async fn handle(&self, command: DeleteEditorial) -> Result<(), ApplicationError> {
        let record = self
            .editorial_repo
            .find_by_id(command.editorial_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Editorial", command.editorial_id))?;

        self.editorial_repo.delete(command.editorial_id).await?;

        tracing::info!(
            editorial_id = %command.editorial_id,
            title = %record.title,
            "Editorial deleted"
        );

        Ok(())
    }
}

// ============================================================================
// 发布工作流
// ============================================================================

/// 工作流命令的统一响应
#[derive(Debug, Clone)]
pub struct WorkflowResponse {
    pub id: Uuid,
    pub status: EditorialStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

impl From<&EditorialRecord> for WorkflowResponse {
    fn from(record: &EditorialRecord) -> Self {
        Self {
            id: record.id,
            status: record.status,
            published_at: record.published_at,
            scheduled_at: record.scheduled_at,
        }
    }
}

/// PublishEditorial Handler - 立即发布
pub struct PublishEditorialHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
}

impl PublishEditorialHandler {
    pub fn new(editorial_repo: Arc<dyn EditorialRepositoryPort>) -> Self {
        Self { editorial_repo }
    }

    pub async fn handle(
        &self,
        command: PublishEditorial,
    ) -> Result<WorkflowResponse, ApplicationError> {
        let record = self
            .editorial_repo
            .find_by_id(command.editorial_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Editorial", command.editorial_id))?;

        let mut editorial =
            Editorial::try_from(record).map_err(ApplicationError::internal)?;
        editorial
            .publish_now()
            .map_err(ApplicationError::invalid_state)?;

        let record = EditorialRecord::from(&editorial);
        self.editorial_repo.update(&record).await?;

        tracing::info!(
            editorial_id = %record.id,
            title = %record.title,
            "Editorial published"
        );

        Ok(WorkflowResponse::from(&record))
    }
}

/// ScheduleEditorial Handler - 排期发布
pub struct ScheduleEditorialHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
}

impl ScheduleEditorialHandler {
    pub fn new(editorial_repo: Arc<dyn EditorialRepositoryPort>) -> Self {
        Self { editorial_repo }
    }

    pub async fn handle(
        &self,
        command: ScheduleEditorial,
    ) -> Result<WorkflowResponse, ApplicationError> {
        let record = self
            .editorial_repo
            .find_by_id(command.editorial_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Editorial", command.editorial_id))?;

        let mut editorial =
            Editorial::try_from(record).map_err(ApplicationError::internal)?;
        editorial
            .schedule(command.publish_at)
            .map_err(ApplicationError::validation)?;

        let record = EditorialRecord::from(&editorial);
        self.editorial_repo.update(&record).await?;

        tracing::info!(
            editorial_id = %record.id,
            publish_at = %command.publish_at,
            "Editorial scheduled"
        );

        Ok(WorkflowResponse::from(&record))
    }
}

/// DeactivateEditorial Handler - 下线
pub struct DeactivateEditorialHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
}

impl DeactivateEditorialHandler {
    pub fn new(editorial_repo: Arc<dyn EditorialRepositoryPort>) -> Self {
        Self { editorial_repo }
    }

    pub async fn handle(
        &self,
        command: DeactivateEditorial,
    ) -> Result<WorkflowResponse, ApplicationError> {
        let record = self
            .editorial_repo
            .find_by_id(command.editorial_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Editorial", command.editorial_id))?;

        let mut editorial =
            Editorial::try_from(record).map_err(ApplicationError::internal)?;
        editorial.deactivate();

        let record = EditorialRecord::from(&editorial);
        self.editorial_repo.update(&record).await?;

        tracing::info!(editorial_id = %record.id, "Editorial deactivated");

        Ok(WorkflowResponse::from(&record))
    }
}

/// ReactivateEditorial Handler - 恢复上线
pub struct ReactivateEditorialHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
}

impl ReactivateEditorialHandler {
    pub fn new(editorial_repo: Arc<dyn EditorialRepositoryPort>) -> Self {
        Self { editorial_repo }
    }

    pub async fn handle(
        &self,
        command: ReactivateEditorial,
    ) -> Result<WorkflowResponse, ApplicationError> {
        let record = self
            .editorial_repo
            .find_by_id(command.editorial_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Editorial", command.editorial_id))?;

        let mut editorial =
            Editorial::try_from(record).map_err(ApplicationError::internal)?;
        editorial.reactivate();

        let record = EditorialRecord::from(&editorial);
        self.editorial_repo.update(&record).await?;

        tracing::info!(editorial_id = %record.id, "Editorial reactivated");

        Ok(WorkflowResponse::from(&record))
    }
}
