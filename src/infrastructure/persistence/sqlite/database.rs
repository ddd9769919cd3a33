//! SQLite Database - 数据库连接和迁移

use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};
use std::path::Path;

use crate::application::ports::RepositoryError;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库文件路径
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:./data/gazeta.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=rwc", path.as_ref().display()),
            max_connections: 5,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    // 启用 WAL 模式，允许并发读写
    sqlx::query("PRAGMA journal_mode=WAL")
        .execute(&pool)
        .await?;

    // 设置 busy_timeout=5000ms，遇到锁时等待而不是立即失败
    sqlx::query("PRAGMA busy_timeout=5000")
        .execute(&pool)
        .await?;

    // 设置同步模式为 NORMAL（平衡性能和安全性）
    sqlx::query("PRAGMA synchronous=NORMAL")
        .execute(&pool)
        .await?;

    tracing::info!("SQLite pool created with WAL mode and busy_timeout=5000ms");

    Ok(pool)
}

/// 数据库错误归类
///
/// 唯一约束冲突（主题名、slug、作者笔名、订阅邮箱）映射为 Duplicate，
/// 由应用层转成业务冲突；其余一律视为数据库错误。
pub(crate) fn map_sqlx_error(e: sqlx::Error, conflict_message: &str) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::Duplicate(conflict_message.to_string())
        }
        _ => RepositoryError::DatabaseError(e.to_string()),
    }
}

/// 解析 TEXT 列里的 UUID
pub(crate) fn parse_uuid(value: &str) -> Result<uuid::Uuid, RepositoryError> {
    uuid::Uuid::parse_str(value).map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

/// 解析 TEXT 列里的 RFC3339 时间戳
pub(crate) fn parse_datetime(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
        .with_timezone(&Utc))
}

/// 可空时间戳列
pub(crate) fn parse_datetime_opt(
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, RepositoryError> {
    value.map(parse_datetime).transpose()
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // 创建 editorials 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS editorials (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            author_id TEXT,
            layout TEXT NOT NULL DEFAULT 'layout1',
            style INTEGER NOT NULL DEFAULT 1,
            image1 TEXT,
            image2 TEXT,
            image3 TEXT,
            status TEXT NOT NULL DEFAULT 'draft',
            published_at TEXT,
            scheduled INTEGER NOT NULL DEFAULT 0,
            scheduled_at TEXT,
            active INTEGER NOT NULL DEFAULT 1,
            views INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (author_id) REFERENCES authors(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 editorial_themes 关联表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS editorial_themes (
            editorial_id TEXT NOT NULL,
            theme_id TEXT NOT NULL,
            PRIMARY KEY (editorial_id, theme_id),
            FOREIGN KEY (editorial_id) REFERENCES editorials(id) ON DELETE CASCADE,
            FOREIGN KEY (theme_id) REFERENCES themes(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 themes 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS themes (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            slug TEXT NOT NULL UNIQUE,
            description TEXT,
            active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 authors 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS authors (
            id TEXT PRIMARY KEY,
            full_name TEXT NOT NULL,
            nickname TEXT NOT NULL UNIQUE,
            bio TEXT NOT NULL DEFAULT '',
            photo TEXT,
            twitter TEXT,
            linkedin TEXT,
            instagram TEXT,
            facebook TEXT,
            website TEXT,
            active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 newsletter_subscriptions 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS newsletter_subscriptions (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 subscription_themes 关联表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS subscription_themes (
            subscription_id TEXT NOT NULL,
            theme_id TEXT NOT NULL,
            PRIMARY KEY (subscription_id, theme_id),
            FOREIGN KEY (subscription_id) REFERENCES newsletter_subscriptions(id) ON DELETE CASCADE,
            FOREIGN KEY (theme_id) REFERENCES themes(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 创建 site_config 表（单行，主键恒为 1）
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS site_config (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            site_name TEXT NOT NULL,
            tagline TEXT NOT NULL DEFAULT '',
            about TEXT NOT NULL DEFAULT '',
            contact_email TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            address TEXT NOT NULL DEFAULT '',
            twitter TEXT,
            linkedin TEXT,
            instagram TEXT,
            facebook TEXT,
            youtube TEXT,
            logo TEXT,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 索引: 公开列表按状态过滤后以发布时间排序
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_editorials_status_published
        ON editorials(status, active, published_at)
        "#,
    )
    .execute(pool)
    .await?;

    // 索引: 作者署名页
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_editorials_author_id
        ON editorials(author_id)
        "#,
    )
    .execute(pool)
    .await?;

    // 索引: 排期扫描
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_editorials_scheduled
        ON editorials(scheduled, scheduled_at)
        "#,
    )
    .execute(pool)
    .await?;

    // 索引: 主题页反向查关联
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_editorial_themes_theme_id
        ON editorial_themes(theme_id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_in_memory_db() {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();
    }
}
