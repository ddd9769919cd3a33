//! SQLite Author Repository

use async_trait::async_trait;
use sqlx::FromRow;
use uuid::Uuid;

use super::database::{map_sqlx_error, parse_datetime, parse_uuid};
use super::DbPool;
use crate::application::ports::{AuthorRecord, AuthorRepositoryPort, RepositoryError};

/// SQLite Author Repository
pub struct SqliteAuthorRepository {
    pool: DbPool,
}

impl SqliteAuthorRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AuthorRow {
    id: String,
    full_name: String,
    nickname: String,
    bio: String,
    photo: Option<String>,
    twitter: Option<String>,
    linkedin: Option<String>,
    instagram: Option<String>,
    facebook: Option<String>,
    website: Option<String>,
    active: i64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<AuthorRow> for AuthorRecord {
    type Error = RepositoryError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(AuthorRecord {
            id: parse_uuid(&row.id)?,
            full_name: row.full_name,
            nickname: row.nickname,
            bio: row.bio,
            photo: row.photo,
            twitter: row.twitter,
            linkedin: row.linkedin,
            instagram: row.instagram,
            facebook: row.facebook,
            website: row.website,
            active: row.active != 0,
            created_at: parse_datetime(&row.created_at)?,
            updated_at: parse_datetime(&row.updated_at)?,
        })
    }
}

#[async_trait]
impl AuthorRepositoryPort for SqliteAuthorRepository {
    async fn save(&self, author: &AuthorRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO authors (id, full_name, nickname, bio, photo,
                twitter, linkedin, instagram, facebook, website,
                active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(author.id.to_string())
        .bind(&author.full_name)
        .bind(&author.nickname)
        .bind(&author.bio)
        .bind(&author.photo)
        .bind(&author.twitter)
        .bind(&author.linkedin)
        .bind(&author.instagram)
        .bind(&author.facebook)
        .bind(&author.website)
        .bind(author.active as i64)
        .bind(author.created_at.to_rfc3339())
        .bind(author.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_sqlx_error(e, &format!("author already exists: {}", author.nickname))
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthorRecord>, RepositoryError> {
        let row: Option<AuthorRow> = sqlx::query_as(
            "SELECT id, full_name, nickname, bio, photo, twitter, linkedin, instagram, facebook, website, active, created_at, updated_at FROM authors WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(AuthorRecord::try_from).transpose()
    }

    async fn find_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<AuthorRecord>, RepositoryError> {
        let row: Option<AuthorRow> = sqlx::query_as(
            "SELECT id, full_name, nickname, bio, photo, twitter, linkedin, instagram, facebook, website, active, created_at, updated_at FROM authors WHERE nickname = ?",
        )
        .bind(nickname)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(AuthorRecord::try_from).transpose()
    }

    async fn find_all_active(&self) -> Result<Vec<AuthorRecord>, RepositoryError> {
        let rows: Vec<AuthorRow> = sqlx::query_as(
            "SELECT id, full_name, nickname, bio, photo, twitter, linkedin, instagram, facebook, website, active, created_at, updated_at FROM authors WHERE active = 1 ORDER BY full_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(AuthorRecord::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::database::{create_pool, run_migrations, DatabaseConfig};
    use super::*;
    use chrono::Utc;

    async fn setup_repo() -> SqliteAuthorRepository {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteAuthorRepository::new(pool)
    }

    fn sample_author(full_name: &str, nickname: &str) -> AuthorRecord {
        let now = Utc::now();
        AuthorRecord {
            id: Uuid::new_v4(),
            full_name: full_name.to_string(),
            nickname: nickname.to_string(),
            bio: String::new(),
            photo: None,
            twitter: None,
            linkedin: None,
            instagram: None,
            facebook: None,
            website: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = setup_repo().await;
        let mut author = sample_author("Ana Costa", "anacosta");
        author.twitter = Some("https://twitter.com/anacosta".to_string());
        repo.save(&author).await.unwrap();

        let found = repo.find_by_id(author.id).await.unwrap().unwrap();
        assert_eq!(found.full_name, "Ana Costa");
        assert_eq!(found.twitter.as_deref(), Some("https://twitter.com/anacosta"));
        assert!(found.linkedin.is_none());
    }

    #[tokio::test]
    async fn test_find_by_nickname() {
        let repo = setup_repo().await;
        repo.save(&sample_author("Ana Costa", "anacosta")).await.unwrap();

        let found = repo.find_by_nickname("anacosta").await.unwrap().unwrap();
        assert_eq!(found.full_name, "Ana Costa");

        let missing = repo.find_by_nickname("desconhecido").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_nickname_is_rejected() {
        let repo = setup_repo().await;
        repo.save(&sample_author("João Silva", "jsilva")).await.unwrap();

        let result = repo.save(&sample_author("José Silva", "jsilva")).await;
        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_find_all_active_sorted_by_name() {
        let repo = setup_repo().await;
        repo.save(&sample_author("Maria Souza", "msouza")).await.unwrap();
        repo.save(&sample_author("Ana Costa", "anacosta")).await.unwrap();

        let mut retired = sample_author("Carlos Antigo", "cantigo");
        retired.active = false;
        repo.save(&retired).await.unwrap();

        let authors = repo.find_all_active().await.unwrap();
        let names: Vec<&str> = authors.iter().map(|a| a.full_name.as_str()).collect();
        assert_eq!(names, vec!["Ana Costa", "Maria Souza"]);
    }
}
