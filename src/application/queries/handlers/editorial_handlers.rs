//! Editorial Query Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AuthorRepositoryPort, EditorialRecord, EditorialRepositoryPort, ThemeRepositoryPort,
};
use crate::application::queries::{
    EditorialsByAuthor, EditorialsByTheme, GetEditorial, LatestEditorials, ListEditorials,
    SearchEditorials, ViewEditorial,
};
use crate::domain::editorial::Editorial;

/// 相关社论数量上限
const RELATED_LIMIT: usize = 4;

// ============================================================================
// Response DTOs
// ============================================================================

/// 社论摘要响应（列表项）
#[derive(Debug, Clone)]
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

impl From<EditorialRecord> for EditorialSummaryResponse {
    fn from(record: EditorialRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            author_id: record.author_id,
            theme_ids: record.theme_ids,
            layout: record.layout.as_str().to_string(),
            style: record.style,
            image1: record.image1,
            status: record.status.as_str().to_string(),
            published_at: record.published_at.map(|t| t.to_rfc3339()),
            active: record.active,
            views: record.views,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

/// 社论详情响应
///
/// sections 是按版式切好的排版小节
#[derive(Debug, Clone)]
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

impl From<&Editorial> for EditorialDetailResponse {
    fn from(editorial: &Editorial) -> Self {
        Self {
            id: *editorial.id().as_uuid(),
            title: editorial.title().as_str().to_string(),
            body: editorial.body().to_string(),
            sections: editorial.sections(),
            author_id: editorial.author_id().map(|id| *id.as_uuid()),
            theme_ids: editorial.theme_ids().iter().map(|id| *id.as_uuid()).collect(),
            layout: editorial.layout().as_str().to_string(),
            style: editorial.style().value(),
            image1: editorial.image1().map(str::to_string),
            image2: editorial.image2().map(str::to_string),
            image3: editorial.image3().map(str::to_string),
            status: editorial.status().as_str().to_string(),
            published_at: editorial.published_at().map(|t| t.to_rfc3339()),
            scheduled: editorial.is_scheduled(),
            scheduled_at: editorial.scheduled_at().map(|t| t.to_rfc3339()),
            active: editorial.is_active(),
            views: editorial.views(),
            created_at: editorial.created_at().to_rfc3339(),
            updated_at: editorial.updated_at().to_rfc3339(),
        }
    }
}

/// 阅读响应：详情 + 相关社论
#[derive(Debug, Clone)]
pub struct EditorialViewResponse {
    pub editorial: EditorialDetailResponse,
    pub related: Vec<EditorialSummaryResponse>,
}

/// 主题浏览响应：主题信息 + 该主题下的公开社论
#[derive(Debug, Clone)]
pub struct EditorialsByThemeResponse {
    pub theme_id: Uuid,
    pub theme_name: String,
    pub theme_slug: String,
    pub editorials: Vec<EditorialSummaryResponse>,
}

/// 作者专栏响应：作者信息 + 其署名的公开社论
#[derive(Debug, Clone)]
pub struct EditorialsByAuthorResponse {
    pub author_id: Uuid,
    pub author_name: String,
    pub author_nickname: String,
    pub editorials: Vec<EditorialSummaryResponse>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetEditorial Handler - 管理端详情，不限状态
pub struct GetEditorialHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
}

impl GetEditorialHandler {
    pub fn new(editorial_repo: Arc<dyn EditorialRepositoryPort>) -> Self {
        Self { editorial_repo }
    }

    pub async fn handle(
        &self,
        query: GetEditorial,
    ) -> Result<EditorialDetailResponse, ApplicationError> {
        let record = self
            .editorial_repo
            .find_by_id(query.editorial_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Editorial", query.editorial_id))?;

        let editorial = Editorial::try_from(record).map_err(ApplicationError::internal)?;

        Ok(EditorialDetailResponse::from(&editorial))
    }
}

/// ListEditorials Handler - 管理端列表
pub struct ListEditorialsHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
}

impl ListEditorialsHandler {
    pub fn new(editorial_repo: Arc<dyn EditorialRepositoryPort>) -> Self {
        Self { editorial_repo }
    }

    pub async fn handle(
        &self,
        _query: ListEditorials,
    ) -> Result<Vec<EditorialSummaryResponse>, ApplicationError> {
        let records = self.editorial_repo.find_all().await?;
        Ok(records.into_iter().map(EditorialSummaryResponse::from).collect())
    }
}

/// LatestEditorials Handler - 公开列表，按发布时间倒序
pub struct LatestEditorialsHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
}

impl LatestEditorialsHandler {
    pub fn new(editorial_repo: Arc<dyn EditorialRepositoryPort>) -> Self {
        Self { editorial_repo }
    }

    pub async fn handle(
        &self,
        query: LatestEditorials,
    ) -> Result<Vec<EditorialSummaryResponse>, ApplicationError> {
        let records = self.editorial_repo.find_published(query.limit).await?;
        Ok(records.into_iter().map(EditorialSummaryResponse::from).collect())
    }
}

/// EditorialsByTheme Handler
pub struct EditorialsByThemeHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
    theme_repo: Arc<dyn ThemeRepositoryPort>,
}

impl EditorialsByThemeHandler {
    pub fn new(
        editorial_repo: Arc<dyn EditorialRepositoryPort>,
        theme_repo: Arc<dyn ThemeRepositoryPort>,
    ) -> Self {
        Self {
            editorial_repo,
            theme_repo,
        }
    }

    pub async fn handle(
        &self,
        query: EditorialsByTheme,
    ) -> Result<EditorialsByThemeResponse, ApplicationError> {
        // 主题必须存在且启用
        let theme = self
            .theme_repo
            .find_by_slug(&query.theme_slug)
            .await?
            .filter(|theme| theme.active)
            .ok_or_else(|| ApplicationError::not_found_str("Theme", &query.theme_slug))?;

        let records = self
            .editorial_repo
            .find_published_by_theme(&query.theme_slug)
            .await?;

        Ok(EditorialsByThemeResponse {
            theme_id: theme.id,
            theme_name: theme.name,
            theme_slug: theme.slug,
            editorials: records.into_iter().map(EditorialSummaryResponse::from).collect(),
        })
    }
}

/// EditorialsByAuthor Handler
pub struct EditorialsByAuthorHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl EditorialsByAuthorHandler {
    pub fn new(
        editorial_repo: Arc<dyn EditorialRepositoryPort>,
        author_repo: Arc<dyn AuthorRepositoryPort>,
    ) -> Self {
        Self {
            editorial_repo,
            author_repo,
        }
    }

    pub async fn handle(
        &self,
        query: EditorialsByAuthor,
    ) -> Result<EditorialsByAuthorResponse, ApplicationError> {
        // 作者必须存在且在职
        let author = self
            .author_repo
            .find_by_nickname(&query.nickname)
            .await?
            .filter(|author| author.active)
            .ok_or_else(|| ApplicationError::not_found_str("Author", &query.nickname))?;

        let records = self
            .editorial_repo
            .find_published_by_author(author.id)
            .await?;

        Ok(EditorialsByAuthorResponse {
            author_id: author.id,
            author_name: author.full_name,
            author_nickname: author.nickname,
            editorials: records.into_iter().map(EditorialSummaryResponse::from).collect(),
        })
    }
}

/// SearchEditorials Handler
///
/// 空白检索词直接返回空列表
pub struct SearchEditorialsHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
}

impl SearchEditorialsHandler {
    pub fn new(editorial_repo: Arc<dyn EditorialRepositoryPort>) -> Self {
        Self { editorial_repo }
    }

    pub async fn handle(
        &self,
        query: SearchEditorials,
    ) -> Result<Vec<EditorialSummaryResponse>, ApplicationError> {
        let term = query.query.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let records = self.editorial_repo.search_published(term).await?;
        Ok(records.into_iter().map(EditorialSummaryResponse::from).collect())
    }
}

/// ViewEditorial Handler - 公开阅读
///
/// 只命中公开可见的社论；命中即浏览数 +1
pub struct ViewEditorialHandler {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
}

impl ViewEditorialHandler {
    pub fn new(editorial_repo: Arc<dyn EditorialRepositoryPort>) -> Self {
        Self { editorial_repo }
    }

    pub async fn handle(
        &self,
        query: ViewEditorial,
    ) -> Result<EditorialViewResponse, ApplicationError> {
        let record = self
            .editorial_repo
            .find_published_by_id(query.editorial_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Editorial", query.editorial_id))?;

        let mut editorial = Editorial::try_from(record).map_err(ApplicationError::internal)?;

        // 持久层原子自增，聚合同步计数保持响应一致
        self.editorial_repo.increment_views(query.editorial_id).await?;
        editorial.record_view();

        let related = self
            .editorial_repo
            .find_related(query.editorial_id, RELATED_LIMIT)
            .await?;

        Ok(EditorialViewResponse {
            editorial: EditorialDetailResponse::from(&editorial),
            related: related.into_iter().map(EditorialSummaryResponse::from).collect(),
        })
    }
}
