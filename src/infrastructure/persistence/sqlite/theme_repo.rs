//! SQLite Theme Repository

use async_trait::async_trait;
use sqlx::FromRow;
use uuid::Uuid;

use super::database::{map_sqlx_error, parse_datetime, parse_uuid};
use super::DbPool;
use crate::application::ports::{RepositoryError, ThemeRecord, ThemeRepositoryPort};

/// SQLite Theme Repository
pub struct SqliteThemeRepository {
    pool: DbPool,
}

impl SqliteThemeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ThemeRow {
    id: String,
    name: String,
    slug: String,
    description: Option<String>,
    active: i64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<ThemeRow> for ThemeRecord {
    type Error = RepositoryError;

    fn try_from(row: ThemeRow) -> Result<Self, Self::Error> {
        Ok(ThemeRecord {
            id: parse_uuid(&row.id)?,
            name: row.name,
            slug: row.slug,
            description: row.description,
            active: row.active != 0,
            created_at: parse_datetime(&row.created_at)?,
            updated_at: parse_datetime(&row.updated_at)?,
        })
    }
}

#[async_trait]
impl ThemeRepositoryPort for SqliteThemeRepository {
    async fn save(&self, theme: &ThemeRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO themes (id, name, slug, description, active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(theme.id.to_string())
        .bind(&theme.name)
        .bind(&theme.slug)
        .bind(&theme.description)
        .bind(theme.active as i64)
        .bind(theme.created_at.to_rfc3339())
        .bind(theme.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_sqlx_error(
                e,
                &format!("theme already exists: {} ({})", theme.name, theme.slug),
            )
        })?;

        Ok(())
    }

    async fn find_all_active(&self) -> Result<Vec<ThemeRecord>, RepositoryError> {
        let rows: Vec<ThemeRow> = sqlx::query_as(
            "SELECT id, name, slug, description, active, created_at, updated_at FROM themes WHERE active = 1 ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ThemeRecord::try_from).collect()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ThemeRecord>, RepositoryError> {
        let row: Option<ThemeRow> = sqlx::query_as(
            "SELECT id, name, slug, description, active, created_at, updated_at FROM themes WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(ThemeRecord::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ThemeRecord>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // 构建 IN 子句的占位符
        let placeholders: Vec<String> = ids.iter().map(|_| "?".to_string()).collect();
        let query = format!(
            "SELECT id, name, slug, description, active, created_at, updated_at FROM themes WHERE id IN ({})",
            placeholders.join(", ")
        );

        let mut sql_query = sqlx::query_as::<_, ThemeRow>(&query);
        for id in ids {
            sql_query = sql_query.bind(id.to_string());
        }

        let rows: Vec<ThemeRow> = sql_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(ThemeRecord::try_from).collect()
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM themes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::super::database::{create_pool, run_migrations, DatabaseConfig};
    use super::*;
    use chrono::Utc;

    async fn setup_repo() -> SqliteThemeRepository {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteThemeRepository::new(pool)
    }

    fn sample_theme(name: &str, slug: &str) -> ThemeRecord {
        let now = Utc::now();
        ThemeRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: slug.to_string(),
            description: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_save_and_find_by_slug() {
        let repo = setup_repo().await;
        let theme = sample_theme("Tecnologia", "tecnologia");
        repo.save(&theme).await.unwrap();

        let found = repo.find_by_slug("tecnologia").await.unwrap().unwrap();
        assert_eq!(found.id, theme.id);
        assert_eq!(found.name, "Tecnologia");

        assert!(repo.find_by_slug("inexistente").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_rejected() {
        let repo = setup_repo().await;
        repo.save(&sample_theme("Saúde", "saude")).await.unwrap();

        let result = repo.save(&sample_theme("Saúde e Bem-estar", "saude")).await;
        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected() {
        let repo = setup_repo().await;
        repo.save(&sample_theme("Economia", "economia")).await.unwrap();

        let result = repo.save(&sample_theme("Economia", "economia-2")).await;
        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_find_all_active_sorted_by_name() {
        let repo = setup_repo().await;
        repo.save(&sample_theme("Esportes", "esportes")).await.unwrap();
        repo.save(&sample_theme("Cultura", "cultura")).await.unwrap();

        let mut disabled = sample_theme("Arquivado", "arquivado");
        disabled.active = false;
        repo.save(&disabled).await.unwrap();

        let themes = repo.find_all_active().await.unwrap();
        let names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Cultura", "Esportes"]);
    }

    #[tokio::test]
    async fn test_find_by_ids_returns_subset() {
        let repo = setup_repo().await;
        let a = sample_theme("Tecnologia", "tecnologia");
        let b = sample_theme("Saúde", "saude");
        repo.save(&a).await.unwrap();
        repo.save(&b).await.unwrap();

        let found = repo.find_by_ids(&[a.id, Uuid::new_v4()]).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, a.id);

        assert!(repo.find_by_ids(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_count_includes_disabled() {
        let repo = setup_repo().await;
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.save(&sample_theme("Cultura", "cultura")).await.unwrap();
        let mut disabled = sample_theme("Arquivado", "arquivado");
        disabled.active = false;
        repo.save(&disabled).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
