//! SQLite Site Config Repository
//!
//! 站点配置是单行表，主键恒为 1

use async_trait::async_trait;
use sqlx::FromRow;

use super::database::parse_datetime;
use super::DbPool;
use crate::application::ports::{RepositoryError, SiteConfigRepositoryPort};
use crate::domain::SiteConfig;

/// SQLite Site Config Repository
pub struct SqliteSiteConfigRepository {
    pool: DbPool,
}

impl SqliteSiteConfigRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SiteConfigRow {
    site_name: String,
    tagline: String,
    about: String,
    contact_email: String,
    phone: String,
    address: String,
    twitter: Option<String>,
    linkedin: Option<String>,
    instagram: Option<String>,
    facebook: Option<String>,
    youtube: Option<String>,
    logo: Option<String>,
    updated_at: String,
}

impl TryFrom<SiteConfigRow> for SiteConfig {
    type Error = RepositoryError;

    fn try_from(row: SiteConfigRow) -> Result<Self, Self::Error> {
        Ok(SiteConfig {
            site_name: row.site_name,
            tagline: row.tagline,
            about: row.about,
            contact_email: row.contact_email,
            phone: row.phone,
            address: row.address,
            twitter: row.twitter,
            linkedin: row.linkedin,
            instagram: row.instagram,
            facebook: row.facebook,
            youtube: row.youtube,
            logo: row.logo,
            updated_at: parse_datetime(&row.updated_at)?,
        })
    }
}

#[async_trait]
impl SiteConfigRepositoryPort for SqliteSiteConfigRepository {
    async fn get(&self) -> Result<SiteConfig, RepositoryError> {
        let row: Option<SiteConfigRow> = sqlx::query_as(
            "SELECT site_name, tagline, about, contact_email, phone, address, twitter, linkedin, instagram, facebook, youtube, logo, updated_at FROM site_config WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => SiteConfig::try_from(row),
            None => {
                // 首次读取落默认配置
                let config = SiteConfig::default();
                self.update(&config).await?;
                Ok(config)
            }
        }
    }

    async fn update(&self, config: &SiteConfig) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO site_config (id, site_name, tagline, about, contact_email, phone,
                address, twitter, linkedin, instagram, facebook, youtube, logo, updated_at)
            VALUES (1, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                site_name = excluded.site_name,
                tagline = excluded.tagline,
                about = excluded.about,
                contact_email = excluded.contact_email,
                phone = excluded.phone,
                address = excluded.address,
                twitter = excluded.twitter,
                linkedin = excluded.linkedin,
                instagram = excluded.instagram,
                facebook = excluded.facebook,
                youtube = excluded.youtube,
                logo = excluded.logo,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&config.site_name)
        .bind(&config.tagline)
        .bind(&config.about)
        .bind(&config.contact_email)
        .bind(&config.phone)
        .bind(&config.address)
        .bind(&config.twitter)
        .bind(&config.linkedin)
        .bind(&config.instagram)
        .bind(&config.facebook)
        .bind(&config.youtube)
        .bind(&config.logo)
        .bind(config.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::database::{create_pool, run_migrations, DatabaseConfig};
    use super::*;

    async fn setup_repo() -> SqliteSiteConfigRepository {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteSiteConfigRepository::new(pool)
    }

    #[tokio::test]
    async fn test_get_creates_default_on_first_read() {
        let repo = setup_repo().await;

        let config = repo.get().await.unwrap();
        assert_eq!(config.site_name, "Portal de Notícias");

        // 第二次读取拿到同一行
        let again = repo.get().await.unwrap();
        assert_eq!(again, config);
    }

    #[tokio::test]
    async fn test_update_round_trip() {
        let repo = setup_repo().await;

        let mut config = repo.get().await.unwrap();
        config.site_name = "Gazeta do Povo".to_string();
        config.contact_email = "contato@gazeta.example".to_string();
        config.twitter = Some("https://twitter.com/gazeta".to_string());
        repo.update(&config).await.unwrap();

        let found = repo.get().await.unwrap();
        assert_eq!(found.site_name, "Gazeta do Povo");
        assert_eq!(found.contact_email, "contato@gazeta.example");
        assert_eq!(found.twitter.as_deref(), Some("https://twitter.com/gazeta"));
    }
}
