//! SQLite Editorial Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::collections::HashMap;
use uuid::Uuid;

use super::database::{parse_datetime, parse_datetime_opt, parse_uuid};
use super::DbPool;
use crate::application::ports::{EditorialRecord, EditorialRepositoryPort, RepositoryError};
use crate::domain::editorial::{EditorialStatus, Layout};

/// editorials 表的全部列，按建表顺序
const EDITORIAL_COLUMNS: &str = "id, title, body, author_id, layout, style, \
    image1, image2, image3, status, published_at, scheduled, scheduled_at, \
    active, views, created_at, updated_at";

/// 公开可见谓词：published + active + 发布时间不晚于查询时刻（绑定一个时间参数）
const PUBLISHED_PREDICATE: &str = "status = 'published' AND active = 1 \
    AND published_at IS NOT NULL AND datetime(published_at) <= datetime(?)";

/// SQLite Editorial Repository
pub struct SqliteEditorialRepository {
    pool: DbPool,
}

impl SqliteEditorialRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// 单条社论的主题关联
    async fn load_theme_ids(&self, editorial_id: Uuid) -> Result<Vec<Uuid>, RepositoryError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT theme_id FROM editorial_themes WHERE editorial_id = ?")
                .bind(editorial_id.to_string())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.iter().map(|(theme_id,)| parse_uuid(theme_id)).collect()
    }

    /// 为一批社论补齐主题关联（单次 IN 查询，避免逐条往返）
    async fn attach_theme_ids(
        &self,
        records: &mut [EditorialRecord],
    ) -> Result<(), RepositoryError> {
        if records.is_empty() {
            return Ok(());
        }

        let placeholders: Vec<String> = records.iter().map(|_| "?".to_string()).collect();
        let query = format!(
            "SELECT editorial_id, theme_id FROM editorial_themes WHERE editorial_id IN ({})",
            placeholders.join(", ")
        );

        let mut sql_query = sqlx::query_as::<_, (String, String)>(&query);
        for record in records.iter() {
            sql_query = sql_query.bind(record.id.to_string());
        }

        let rows: Vec<(String, String)> = sql_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let mut by_editorial: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for (editorial_id, theme_id) in &rows {
            by_editorial
                .entry(parse_uuid(editorial_id)?)
                .or_default()
                .push(parse_uuid(theme_id)?);
        }

        for record in records.iter_mut() {
            if let Some(theme_ids) = by_editorial.remove(&record.id) {
                record.theme_ids = theme_ids;
            }
        }

        Ok(())
    }

    /// 行集转记录并补齐主题关联
    async fn rows_to_records(
        &self,
        rows: Vec<EditorialRow>,
    ) -> Result<Vec<EditorialRecord>, RepositoryError> {
        let mut records = rows
            .into_iter()
            .map(EditorialRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        self.attach_theme_ids(&mut records).await?;
        Ok(records)
    }
}

#[derive(FromRow)]
struct EditorialRow {
    id: String,
    title: String,
    body: String,
    author_id: Option<String>,
    layout: String,
    style: i64,
    image1: Option<String>,
    image2: Option<String>,
    image3: Option<String>,
    status: String,
    published_at: Option<String>,
    scheduled: i64,
    scheduled_at: Option<String>,
    active: i64,
    views: i64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<EditorialRow> for EditorialRecord {
    type Error = RepositoryError;

    fn try_from(row: EditorialRow) -> Result<Self, Self::Error> {
        Ok(EditorialRecord {
            id: parse_uuid(&row.id)?,
            title: row.title,
            body: row.body,
            author_id: row.author_id.as_deref().map(parse_uuid).transpose()?,
            // 主题关联存在关联表里，由调用方补齐
            theme_ids: Vec::new(),
            layout: Layout::from_str(&row.layout).unwrap_or_default(),
            style: row.style as u8,
            image1: row.image1,
            image2: row.image2,
            image3: row.image3,
            status: EditorialStatus::from_str(&row.status).unwrap_or_default(),
            published_at: parse_datetime_opt(row.published_at.as_deref())?,
            scheduled: row.scheduled != 0,
            scheduled_at: parse_datetime_opt(row.scheduled_at.as_deref())?,
            active: row.active != 0,
            views: row.views as u64,
            created_at: parse_datetime(&row.created_at)?,
            updated_at: parse_datetime(&row.updated_at)?,
        })
    }
}

#[async_trait]
impl EditorialRepositoryPort for SqliteEditorialRepository {
    async fn save(&self, editorial: &EditorialRecord) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO editorials (id, title, body, author_id, layout, style,
                image1, image2, image3, status, published_at, scheduled, scheduled_at,
                active, views, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(editorial.id.to_string())
        .bind(&editorial.title)
        .bind(&editorial.body)
        .bind(editorial.author_id.map(|id| id.to_string()))
        .bind(editorial.layout.as_str())
        .bind(editorial.style as i64)
        .bind(&editorial.image1)
        .bind(&editorial.image2)
        .bind(&editorial.image3)
        .bind(editorial.status.as_str())
        .bind(editorial.published_at.map(|dt| dt.to_rfc3339()))
        .bind(editorial.scheduled as i64)
        .bind(editorial.scheduled_at.map(|dt| dt.to_rfc3339()))
        .bind(editorial.active as i64)
        .bind(editorial.views as i64)
        .bind(editorial.created_at.to_rfc3339())
        .bind(editorial.updated_at.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        for theme_id in &editorial.theme_ids {
            sqlx::query("INSERT INTO editorial_themes (editorial_id, theme_id) VALUES (?, ?)")
                .bind(editorial.id.to_string())
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

    async fn update(&self, editorial: &EditorialRecord) -> Result<(), RepositoryError> {
        // 使用事务，正文更新与主题关联替换保持原子
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        sqlx::query(
            r#"
            UPDATE editorials
            SET title = ?, body = ?, author_id = ?, layout = ?, style = ?,
                image1 = ?, image2 = ?, image3 = ?, status = ?, published_at = ?,
                scheduled = ?, scheduled_at = ?, active = ?, views = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&editorial.title)
        .bind(&editorial.body)
        .bind(editorial.author_id.map(|id| id.to_string()))
        .bind(editorial.layout.as_str())
        .bind(editorial.style as i64)
        .bind(&editorial.image1)
        .bind(&editorial.image2)
        .bind(&editorial.image3)
        .bind(editorial.status.as_str())
        .bind(editorial.published_at.map(|dt| dt.to_rfc3339()))
        .bind(editorial.scheduled as i64)
        .bind(editorial.scheduled_at.map(|dt| dt.to_rfc3339()))
        .bind(editorial.active as i64)
        .bind(editorial.views as i64)
        .bind(editorial.updated_at.to_rfc3339())
        .bind(editorial.id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        // 主题关联整体替换
        sqlx::query("DELETE FROM editorial_themes WHERE editorial_id = ?")
            .bind(editorial.id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        for theme_id in &editorial.theme_ids {
            sqlx::query("INSERT INTO editorial_themes (editorial_id, theme_id) VALUES (?, ?)")
                .bind(editorial.id.to_string())
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

    async fn find_by_id(&self, id: Uuid) -> Result<Option<EditorialRecord>, RepositoryError> {
        let query = format!("SELECT {} FROM editorials WHERE id = ?", EDITORIAL_COLUMNS);

        let row: Option<EditorialRow> = sqlx::query_as(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => {
                let mut record = EditorialRecord::try_from(row)?;
                record.theme_ids = self.load_theme_ids(record.id).await?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<EditorialRecord>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM editorials ORDER BY datetime(published_at) DESC, datetime(created_at) DESC",
            EDITORIAL_COLUMNS
        );

        let rows: Vec<EditorialRow> = sqlx::query_as(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        self.rows_to_records(rows).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // 使用事务确保原子性
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        sqlx::query("DELETE FROM editorial_themes WHERE editorial_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        sqlx::query("DELETE FROM editorials WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_published_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<EditorialRecord>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM editorials WHERE id = ? AND {}",
            EDITORIAL_COLUMNS, PUBLISHED_PREDICATE
        );

        let row: Option<EditorialRow> = sqlx::query_as(&query)
            .bind(id.to_string())
            .bind(Utc::now().to_rfc3339())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        match row {
            Some(row) => {
                let mut record = EditorialRecord::try_from(row)?;
                record.theme_ids = self.load_theme_ids(record.id).await?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn find_published(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<EditorialRecord>, RepositoryError> {
        let mut query = format!(
            "SELECT {} FROM editorials WHERE {} ORDER BY datetime(published_at) DESC",
            EDITORIAL_COLUMNS, PUBLISHED_PREDICATE
        );
        if limit.is_some() {
            query.push_str(" LIMIT ?");
        }

        let mut sql_query =
            sqlx::query_as::<_, EditorialRow>(&query).bind(Utc::now().to_rfc3339());
        if let Some(limit) = limit {
            sql_query = sql_query.bind(limit as i64);
        }

        let rows: Vec<EditorialRow> = sql_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        self.rows_to_records(rows).await
    }

    async fn find_published_by_theme(
        &self,
        theme_slug: &str,
    ) -> Result<Vec<EditorialRecord>, RepositoryError> {
        let query = format!(
            r#"
            SELECT {} FROM editorials
            WHERE {} AND id IN (
                SELECT et.editorial_id FROM editorial_themes et
                JOIN themes t ON t.id = et.theme_id
                WHERE t.slug = ?
            )
            ORDER BY datetime(published_at) DESC
            "#,
            EDITORIAL_COLUMNS, PUBLISHED_PREDICATE
        );

        let rows: Vec<EditorialRow> = sqlx::query_as(&query)
            .bind(Utc::now().to_rfc3339())
            .bind(theme_slug)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        self.rows_to_records(rows).await
    }

    async fn find_published_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<EditorialRecord>, RepositoryError> {
        let query = format!(
            "SELECT {} FROM editorials WHERE {} AND author_id = ? ORDER BY datetime(published_at) DESC",
            EDITORIAL_COLUMNS, PUBLISHED_PREDICATE
        );

        let rows: Vec<EditorialRow> = sqlx::query_as(&query)
            .bind(Utc::now().to_rfc3339())
            .bind(author_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        self.rows_to_records(rows).await
    }

    async fn search_published(
        &self,
        query: &str,
    ) -> Result<Vec<EditorialRecord>, RepositoryError> {
        let pattern = format!("%{}%", escape_like(query));

        let sql = format!(
            r#"
            SELECT {} FROM editorials
            WHERE {} AND (
                title LIKE ? ESCAPE '\'
                OR body LIKE ? ESCAPE '\'
                OR id IN (
                    SELECT et.editorial_id FROM editorial_themes et
                    JOIN themes t ON t.id = et.theme_id
                    WHERE t.name LIKE ? ESCAPE '\'
                )
            )
            ORDER BY datetime(published_at) DESC
            "#,
            EDITORIAL_COLUMNS, PUBLISHED_PREDICATE
        );

        let rows: Vec<EditorialRow> = sqlx::query_as(&sql)
            .bind(Utc::now().to_rfc3339())
            .bind(&pattern)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        self.rows_to_records(rows).await
    }

    async fn find_related(
        &self,
        editorial_id: Uuid,
        limit: usize,
    ) -> Result<Vec<EditorialRecord>, RepositoryError> {
        let query = format!(
            r#"
            SELECT {} FROM editorials
            WHERE {} AND id != ? AND id IN (
                SELECT et.editorial_id FROM editorial_themes et
                WHERE et.theme_id IN (
                    SELECT theme_id FROM editorial_themes WHERE editorial_id = ?
                )
            )
            ORDER BY datetime(published_at) DESC
            LIMIT ?
            "#,
            EDITORIAL_COLUMNS, PUBLISHED_PREDICATE
        );

        let rows: Vec<EditorialRow> = sqlx::query_as(&query)
            .bind(Utc::now().to_rfc3339())
            .bind(editorial_id.to_string())
            .bind(editorial_id.to_string())
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        self.rows_to_records(rows).await
    }

    async fn increment_views(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE editorials SET views = views + 1 WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_due_scheduled(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<EditorialRecord>, RepositoryError> {
        let query = format!(
            r#"
            SELECT {} FROM editorials
            WHERE status = 'scheduled' AND scheduled = 1
                AND scheduled_at IS NOT NULL AND datetime(scheduled_at) <= datetime(?)
            ORDER BY datetime(scheduled_at)
            "#,
            EDITORIAL_COLUMNS
        );

        let rows: Vec<EditorialRow> = sqlx::query_as(&query)
            .bind(now.to_rfc3339())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        self.rows_to_records(rows).await
    }
}

/// LIKE 通配符转义，检索词按字面匹配
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::super::database::{create_pool, run_migrations, DatabaseConfig};
    use super::*;
    use chrono::Duration;

    async fn setup_pool() -> DbPool {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    fn published_record(title: &str, published_at: DateTime<Utc>) -> EditorialRecord {
        let now = Utc::now();
        EditorialRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            body: "Primeiro parágrafo.\n\nSegundo parágrafo.".to_string(),
            author_id: None,
            theme_ids: Vec::new(),
            layout: Layout::Banner,
            style: 1,
            image1: None,
            image2: None,
            image3: None,
            status: EditorialStatus::Published,
            published_at: Some(published_at),
            scheduled: false,
            scheduled_at: None,
            active: true,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    async fn insert_theme(pool: &DbPool, name: &str, slug: &str) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO themes (id, name, slug, active, created_at, updated_at) VALUES (?, ?, ?, 1, ?, ?)",
        )
        .bind(id.to_string())
        .bind(name)
        .bind(slug)
        .bind(&now)
        .bind(&now)
        .execute(pool)
        .await
        .unwrap();
        id
    }

    #[tokio::test]
    async fn test_save_and_find_round_trip() {
        let pool = setup_pool().await;
        let repo = SqliteEditorialRepository::new(pool.clone());
        let theme_id = insert_theme(&pool, "Tecnologia", "tecnologia").await;

        let mut record = published_record("Edição de estreia", Utc::now());
        record.theme_ids = vec![theme_id];
        repo.save(&record).await.unwrap();

        let found = repo.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Edição de estreia");
        assert_eq!(found.theme_ids, vec![theme_id]);
        assert_eq!(found.status, EditorialStatus::Published);
        assert_eq!(found.views, 0);
    }

    #[tokio::test]
    async fn test_update_replaces_theme_links() {
        let pool = setup_pool().await;
        let repo = SqliteEditorialRepository::new(pool.clone());
        let old_theme = insert_theme(&pool, "Saúde", "saude").await;
        let new_theme = insert_theme(&pool, "Economia", "economia").await;

        let mut record = published_record("Temas em troca", Utc::now());
        record.theme_ids = vec![old_theme];
        repo.save(&record).await.unwrap();

        record.title = "Temas trocados".to_string();
        record.theme_ids = vec![new_theme];
        repo.update(&record).await.unwrap();

        let found = repo.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Temas trocados");
        assert_eq!(found.theme_ids, vec![new_theme]);
    }

    #[tokio::test]
    async fn test_find_published_filters_visibility() {
        let pool = setup_pool().await;
        let repo = SqliteEditorialRepository::new(pool);

        let visible = published_record("Visível", Utc::now() - Duration::hours(1));
        repo.save(&visible).await.unwrap();

        let mut draft = published_record("Rascunho", Utc::now());
        draft.status = EditorialStatus::Draft;
        draft.published_at = None;
        repo.save(&draft).await.unwrap();

        let mut inactive = published_record("Desativada", Utc::now() - Duration::hours(1));
        inactive.active = false;
        repo.save(&inactive).await.unwrap();

        let future = published_record("Futura", Utc::now() + Duration::hours(1));
        repo.save(&future).await.unwrap();

        let published = repo.find_published(None).await.unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].title, "Visível");

        assert!(repo.find_published_by_id(draft.id).await.unwrap().is_none());
        assert!(repo.find_published_by_id(future.id).await.unwrap().is_none());
        assert!(repo
            .find_published_by_id(visible.id)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_find_published_orders_latest_first_and_limits() {
        let pool = setup_pool().await;
        let repo = SqliteEditorialRepository::new(pool);

        let base = Utc::now() - Duration::days(3);
        for (i, title) in ["Antiga", "Média", "Recente"].iter().enumerate() {
            let record = published_record(title, base + Duration::days(i as i64));
            repo.save(&record).await.unwrap();
        }

        let latest = repo.find_published(Some(2)).await.unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].title, "Recente");
        assert_eq!(latest[1].title, "Média");
    }

    #[tokio::test]
    async fn test_find_published_by_theme_slug() {
        let pool = setup_pool().await;
        let repo = SqliteEditorialRepository::new(pool.clone());
        let tech = insert_theme(&pool, "Tecnologia", "tecnologia").await;
        let health = insert_theme(&pool, "Saúde", "saude").await;

        let mut tech_editorial = published_record("Chips novos", Utc::now());
        tech_editorial.theme_ids = vec![tech];
        repo.save(&tech_editorial).await.unwrap();

        let mut health_editorial = published_record("Vacinas", Utc::now());
        health_editorial.theme_ids = vec![health];
        repo.save(&health_editorial).await.unwrap();

        let found = repo.find_published_by_theme("tecnologia").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Chips novos");

        assert!(repo
            .find_published_by_theme("inexistente")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_title_body_and_theme_name() {
        let pool = setup_pool().await;
        let repo = SqliteEditorialRepository::new(pool.clone());
        let theme_id = insert_theme(&pool, "Esportes", "esportes").await;

        let mut record = published_record("Final do campeonato", Utc::now());
        record.body = "A partida terminou empatada.".to_string();
        record.theme_ids = vec![theme_id];
        repo.save(&record).await.unwrap();

        // 大小写不敏感命中标题
        let by_title = repo.search_published("CAMPEONATO").await.unwrap();
        assert_eq!(by_title.len(), 1);

        // 命中正文
        let by_body = repo.search_published("empatada").await.unwrap();
        assert_eq!(by_body.len(), 1);

        // 命中主题名
        let by_theme = repo.search_published("esportes").await.unwrap();
        assert_eq!(by_theme.len(), 1);

        // 通配符按字面处理
        assert!(repo.search_published("camp%nato").await.unwrap().is_empty());

        assert!(repo.search_published("inexistente").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_related_shares_theme_excludes_subject() {
        let pool = setup_pool().await;
        let repo = SqliteEditorialRepository::new(pool.clone());
        let shared = insert_theme(&pool, "Cultura", "cultura").await;
        let other = insert_theme(&pool, "Economia", "economia").await;

        let mut subject = published_record("Cinema nacional", Utc::now());
        subject.theme_ids = vec![shared];
        repo.save(&subject).await.unwrap();

        let mut related = published_record("Teatro de rua", Utc::now());
        related.theme_ids = vec![shared];
        repo.save(&related).await.unwrap();

        let mut unrelated = published_record("Inflação em alta", Utc::now());
        unrelated.theme_ids = vec![other];
        repo.save(&unrelated).await.unwrap();

        let found = repo.find_related(subject.id, 4).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Teatro de rua");
    }

    #[tokio::test]
    async fn test_find_related_respects_limit() {
        let pool = setup_pool().await;
        let repo = SqliteEditorialRepository::new(pool.clone());
        let shared = insert_theme(&pool, "Tecnologia", "tecnologia").await;

        let mut subject = published_record("Assunto", Utc::now());
        subject.theme_ids = vec![shared];
        repo.save(&subject).await.unwrap();

        for i in 0..5 {
            let mut record =
                published_record(&format!("Relacionada {}", i), Utc::now() - Duration::minutes(i));
            record.theme_ids = vec![shared];
            repo.save(&record).await.unwrap();
        }

        let found = repo.find_related(subject.id, 4).await.unwrap();
        assert_eq!(found.len(), 4);
    }

    #[tokio::test]
    async fn test_increment_views_persists() {
        let pool = setup_pool().await;
        let repo = SqliteEditorialRepository::new(pool);

        let record = published_record("Contagem", Utc::now());
        repo.save(&record).await.unwrap();

        repo.increment_views(record.id).await.unwrap();
        repo.increment_views(record.id).await.unwrap();

        let found = repo.find_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(found.views, 2);
    }

    #[tokio::test]
    async fn test_find_due_scheduled_boundary() {
        let pool = setup_pool().await;
        let repo = SqliteEditorialRepository::new(pool);
        let now = Utc::now();

        let mut due = published_record("Na hora", now);
        due.status = EditorialStatus::Scheduled;
        due.published_at = None;
        due.scheduled = true;
        due.scheduled_at = Some(now - Duration::seconds(30));
        repo.save(&due).await.unwrap();

        let mut exact = published_record("Em ponto", now);
        exact.status = EditorialStatus::Scheduled;
        exact.published_at = None;
        exact.scheduled = true;
        exact.scheduled_at = Some(now);
        repo.save(&exact).await.unwrap();

        let mut pending = published_record("Ainda não", now);
        pending.status = EditorialStatus::Scheduled;
        pending.published_at = None;
        pending.scheduled = true;
        pending.scheduled_at = Some(now + Duration::hours(2));
        repo.save(&pending).await.unwrap();

        let found = repo.find_due_scheduled(now).await.unwrap();
        let titles: Vec<&str> = found.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Na hora", "Em ponto"]);
    }

    #[tokio::test]
    async fn test_delete_removes_editorial_and_links() {
        let pool = setup_pool().await;
        let repo = SqliteEditorialRepository::new(pool.clone());
        let theme_id = insert_theme(&pool, "Saúde", "saude").await;

        let mut record = published_record("Descartável", Utc::now());
        record.theme_ids = vec![theme_id];
        repo.save(&record).await.unwrap();

        repo.delete(record.id).await.unwrap();

        assert!(repo.find_by_id(record.id).await.unwrap().is_none());
        let links: Vec<(String,)> =
            sqlx::query_as("SELECT editorial_id FROM editorial_themes WHERE editorial_id = ?")
                .bind(record.id.to_string())
                .fetch_all(&pool)
                .await
                .unwrap();
        assert!(links.is_empty());
    }
}
