//! SQLite Subscription Repository

use async_trait::async_trait;
use sqlx::FromRow;
use std::collections::HashMap;
use uuid::Uuid;

use super::database::{map_sqlx_error, parse_datetime, parse_uuid};
use super::DbPool;
use crate::application::ports::{
    RepositoryError, SubscriptionRecord, SubscriptionRepositoryPort,
};

/// SQLite Subscription Repository
pub struct SqliteSubscriptionRepository {
    pool: DbPool,
}

impl SqliteSubscriptionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// 单条订阅的主题关联
    async fn load_theme_ids(&self, subscription_id: Uuid) -> Result<Vec<Uuid>, RepositoryError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT theme_id FROM subscription_themes WHERE subscription_id = ?")
                .bind(subscription_id.to_string())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.iter().map(|(theme_id,)| parse_uuid(theme_id)).collect()
    }
}

#[derive(FromRow)]
struct SubscriptionRow {
    id: String,
    email: String,
    active: i64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<SubscriptionRow> for SubscriptionRecord {
    type Error = RepositoryError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        Ok(SubscriptionRecord {
            id: parse_uuid(&row.id)?,
            email: row.email,
            // 主题关联存在关联表里，由调用方补齐
            theme_ids: Vec::new(),
            active: row.active != 0,
            created_at: parse_datetime(&row.created_at)?,
            updated_at: parse_datetime(&row.updated_at)?,
        })
    }
}

#[async_trait]
impl SubscriptionRepositoryPort for SqliteSubscriptionRepository {
    async fn save(&self, subscription: &SubscriptionRecord) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO newsletter_subscriptions (id, email, active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(subscription.id.to_string())
        .bind(&subscription.email)
        .bind(subscription.active as i64)
        .bind(subscription.created_at.to_rfc3339())
        .bind(subscription.updated_at.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_sqlx_error(
                e,
                &format!("subscription already exists: {}", subscription.email),
            )
        })?;

        for theme_id in &subscription.theme_ids {
            sqlx::query(
                "INSERT INTO subscription_themes (subscription_id, theme_id) VALUES (?, ?)",
            )
            .bind(subscription.id.to_string())
            .bind(theme_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update(&self, subscription: &SubscriptionRecord) -> Result<(), RepositoryError> {
        // 使用事务，状态更新与主题关联替换保持原子
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        sqlx::query(
            r#"
            UPDATE newsletter_subscriptions
            SET email = ?, active = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&subscription.email)
        .bind(subscription.active as i64)
        .bind(subscription.updated_at.to_rfc3339())
        .bind(subscription.id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        // 主题关联整体替换
        sqlx::query("DELETE FROM subscription_themes WHERE subscription_id = ?")
            .bind(subscription.id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        for theme_id in &subscription.theme_ids {
            sqlx::query(
                "INSERT INTO subscription_themes (subscription_id, theme_id) VALUES (?, ?)",
            )
            .bind(subscription.id.to_string())
            .bind(theme_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubscriptionRecord>, RepositoryError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(
            "SELECT id, email, active, created_at, updated_at FROM newsletter_subscriptions WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => {
                let mut record = SubscriptionRecord::try_from(row)?;
                record.theme_ids = self.load_theme_ids(record.id).await?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<SubscriptionRecord>, RepositoryError> {
        let rows: Vec<SubscriptionRow> = sqlx::query_as(
            "SELECT id, email, active, created_at, updated_at FROM newsletter_subscriptions ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let mut records = rows
            .into_iter()
            .map(SubscriptionRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        if records.is_empty() {
            return Ok(records);
        }

        // 单次 IN 查询补齐全部主题关联
        let placeholders: Vec<String> = records.iter().map(|_| "?".to_string()).collect();
        let query = format!(
            "SELECT subscription_id, theme_id FROM subscription_themes WHERE subscription_id IN ({})",
            placeholders.join(", ")
        );

        let mut sql_query = sqlx::query_as::<_, (String, String)>(&query);
        for record in records.iter() {
            sql_query = sql_query.bind(record.id.to_string());
        }

        let links: Vec<(String, String)> = sql_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let mut by_subscription: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for (subscription_id, theme_id) in &links {
            by_subscription
                .entry(parse_uuid(subscription_id)?)
                .or_default()
                .push(parse_uuid(theme_id)?);
        }

        for record in records.iter_mut() {
            if let Some(theme_ids) = by_subscription.remove(&record.id) {
                record.theme_ids = theme_ids;
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::super::database::{create_pool, run_migrations, DatabaseConfig};
    use super::*;
    use chrono::{Duration, Utc};

    async fn setup_pool() -> DbPool {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    fn sample_subscription(email: &str) -> SubscriptionRecord {
        let now = Utc::now();
        SubscriptionRecord {
            id: Uuid::new_v4(),
            email: email.to_string(),
            theme_ids: Vec::new(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_save_and_find_by_email() {
        let pool = setup_pool().await;
        let repo = SqliteSubscriptionRepository::new(pool);

        let theme_id = Uuid::new_v4();
        let mut subscription = sample_subscription("leitor@example.com");
        subscription.theme_ids = vec![theme_id];
        repo.save(&subscription).await.unwrap();

        let found = repo
            .find_by_email("leitor@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, subscription.id);
        assert_eq!(found.theme_ids, vec![theme_id]);
        assert!(found.active);

        assert!(repo
            .find_by_email("outro@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let pool = setup_pool().await;
        let repo = SqliteSubscriptionRepository::new(pool);

        repo.save(&sample_subscription("leitor@example.com"))
            .await
            .unwrap();

        let result = repo.save(&sample_subscription("leitor@example.com")).await;
        assert!(matches!(result, Err(RepositoryError::Duplicate(_))));
    }

    #[tokio::test]
    async fn test_update_replaces_theme_links() {
        let pool = setup_pool().await;
        let repo = SqliteSubscriptionRepository::new(pool);

        let mut subscription = sample_subscription("leitor@example.com");
        subscription.theme_ids = vec![Uuid::new_v4()];
        repo.save(&subscription).await.unwrap();

        let replacement = Uuid::new_v4();
        subscription.active = false;
        subscription.theme_ids = vec![replacement];
        repo.update(&subscription).await.unwrap();

        let found = repo
            .find_by_email("leitor@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(!found.active);
        assert_eq!(found.theme_ids, vec![replacement]);
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_created_desc() {
        let pool = setup_pool().await;
        let repo = SqliteSubscriptionRepository::new(pool);

        let mut older = sample_subscription("primeiro@example.com");
        older.created_at = Utc::now() - Duration::days(1);
        repo.save(&older).await.unwrap();

        let newer = sample_subscription("segundo@example.com");
        repo.save(&newer).await.unwrap();

        let all = repo.find_all().await.unwrap();
        let emails: Vec<&str> = all.iter().map(|s| s.email.as_str()).collect();
        assert_eq!(emails, vec!["segundo@example.com", "primeiro@example.com"]);
    }
}
