//! Author Query Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{AuthorRecord, AuthorRepositoryPort, EditorialRepositoryPort};
use crate::application::queries::{GetAuthor, ListAuthors};

use super::editorial_handlers::EditorialSummaryResponse;

// ============================================================================
// Response DTOs
// ============================================================================

/// 作者响应
#[derive(Debug, Clone)]
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

impl From<AuthorRecord> for AuthorResponse {
    fn from(record: AuthorRecord) -> Self {
        Self {
            id: record.id,
            full_name: record.full_name,
            nickname: record.nickname,
            bio: record.bio,
            photo: record.photo,
            twitter: record.twitter,
            linkedin: record.linkedin,
            instagram: record.instagram,
            facebook: record.facebook,
            website: record.website,
        }
    }
}

/// 作者专栏响应：作者信息 + 署名的公开社论 + 其他在职作者
#[derive(Debug, Clone)]
pub struct AuthorDetailResponse {
    pub author: AuthorResponse,
    pub editorials: Vec<EditorialSummaryResponse>,
    pub other_authors: Vec<AuthorResponse>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetAuthor Handler - 作者专栏
///
/// 只命中在职作者；附带其公开社论和其他在职作者
pub struct GetAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
}

impl GetAuthorHandler {
    pub fn new(
        author_repo: Arc<dyn AuthorRepositoryPort>,
        editorial_repo: Arc<dyn EditorialRepositoryPort>,
    ) -> Self {
        Self {
            author_repo,
            editorial_repo,
        }
    }

    pub async fn handle(&self, query: GetAuthor) -> Result<AuthorDetailResponse, ApplicationError> {
        let author = self
            .author_repo
            .find_by_nickname(&query.nickname)
            .await?
            .filter(|author| author.active)
            .ok_or_else(|| ApplicationError::not_found_str("Author", &query.nickname))?;

        let editorials = self
            .editorial_repo
            .find_published_by_author(author.id)
            .await?;

        let other_authors: Vec<AuthorResponse> = self
            .author_repo
            .find_all_active()
            .await?
            .into_iter()
            .filter(|other| other.id != author.id)
            .map(AuthorResponse::from)
            .collect();

        Ok(AuthorDetailResponse {
            author: AuthorResponse::from(author),
            editorials: editorials
                .into_iter()
                .map(EditorialSummaryResponse::from)
                .collect(),
            other_authors,
        })
    }
}

/// ListAuthors Handler - 仅在职作者
pub struct ListAuthorsHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl ListAuthorsHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, _query: ListAuthors) -> Result<Vec<AuthorResponse>, ApplicationError> {
        let authors = self.author_repo.find_all_active().await?;
        Ok(authors.into_iter().map(AuthorResponse::from).collect())
    }
}
