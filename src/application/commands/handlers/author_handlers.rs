//! Author Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::CreateAuthor;
use crate::application::error::ApplicationError;
use crate::application::ports::{AuthorRecord, AuthorRepositoryPort, RepositoryError};
use crate::domain::author::{Author, Nickname, SocialLinks};

// ============================================================================
// CreateAuthor
// ============================================================================

/// 创建作者响应
#[derive(Debug, Clone)]
pub struct CreateAuthorResponse {
    pub id: Uuid,
    pub full_name: String,
    pub nickname: String,
}

/// CreateAuthor Handler
pub struct CreateAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl CreateAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(
        &self,
        command: CreateAuthor,
    ) -> Result<CreateAuthorResponse, ApplicationError> {
        let nickname = Nickname::new(command.nickname).map_err(ApplicationError::validation)?;

        let socials = SocialLinks {
            twitter: command.twitter,
            linkedin: command.linkedin,
            instagram: command.instagram,
            facebook: command.facebook,
            website: command.website,
        };

        let mut author = Author::with_socials(command.full_name, nickname, command.bio, socials);
        author.set_photo(command.photo);

        let record = AuthorRecord::from(&author);

        // nickname 唯一约束由存储层兜底
        match self.author_repo.save(&record).await {
            Ok(()) => {}
            Err(RepositoryError::Duplicate(message)) => {
                return Err(ApplicationError::conflict(message));
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(
            author_id = %record.id,
            nickname = %record.nickname,
            "Author created"
        );

        Ok(CreateAuthorResponse {
            id: record.id,
            full_name: record.full_name,
            nickname: record.nickname,
        })
    }
}
