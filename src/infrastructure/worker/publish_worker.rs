//! Publish Worker - Scheduled Editorial Publisher

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::application::ports::{EditorialRecord, EditorialRepositoryPort, RepositoryError};
use crate::domain::editorial::Editorial;

/// Worker 配置
#[derive(Debug, Clone)]
pub struct PublishWorkerConfig {
    /// 扫描间隔（秒）
    pub poll_interval_secs: u64,
}

impl Default for PublishWorkerConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 60,
        }
    }
}

/// 排期发布 Worker
///
/// 后台周期扫描到期的排期社论，逐条转为已发布
pub struct PublishWorker {
    config: PublishWorkerConfig,
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
}

impl PublishWorker {
    pub fn new(
        config: PublishWorkerConfig,
        editorial_repo: Arc<dyn EditorialRepositoryPort>,
    ) -> Self {
        Self {
            config,
            editorial_repo,
        }
    }

    /// 启动 Worker
    pub async fn run(self) {
        tracing::info!(
            poll_interval_secs = self.config.poll_interval_secs,
            "PublishWorker started"
        );

        let mut ticker =
            tokio::time::interval(Duration::from_secs(self.config.poll_interval_secs));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            if let Err(e) = self.publish_due().await {
                tracing::error!(error = %e, "Scheduled publish sweep failed");
            }
        }
    }

    /// 单轮扫描：取出到期的排期社论并发布
    async fn publish_due(&self) -> Result<(), RepositoryError> {
        let due = self.editorial_repo.find_due_scheduled(Utc::now()).await?;
        if due.is_empty() {
            return Ok(());
        }

        tracing::info!(count = due.len(), "Scheduled editorials are due");

        for record in due {
            let editorial_id = record.id;
            // 单条失败不影响同批其他社论
            if let Err(e) = self.publish_one(record).await {
                tracing::error!(
                    editorial_id = %editorial_id,
                    error = %e,
                    "Failed to publish scheduled editorial"
                );
            }
        }

        Ok(())
    }

    /// 发布单条到期社论
    async fn publish_one(&self, record: EditorialRecord) -> Result<(), String> {
        let mut editorial = Editorial::try_from(record).map_err(str::to_string)?;
        editorial.publish_now().map_err(str::to_string)?;

        self.editorial_repo
            .update(&EditorialRecord::from(&editorial))
            .await
            .map_err(|e| e.to_string())?;

        tracing::info!(
            editorial_id = %editorial.id(),
            title = %editorial.title().as_str(),
            "Scheduled editorial published"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::editorial::{EditorialStatus, Layout, Style, Title};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteEditorialRepository,
    };
    use chrono::Duration as ChronoDuration;
    use uuid::Uuid;

    async fn setup_repo() -> Arc<dyn EditorialRepositoryPort> {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Arc::new(SqliteEditorialRepository::new(pool))
    }

    fn scheduled_record(title: &str, scheduled_at: chrono::DateTime<Utc>) -> EditorialRecord {
        let now = Utc::now();
        EditorialRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            body: "Corpo da edição.".to_string(),
            author_id: None,
            theme_ids: Vec::new(),
            layout: Layout::Banner,
            style: 1,
            image1: None,
            image2: None,
            image3: None,
            status: EditorialStatus::Scheduled,
            published_at: None,
            scheduled: true,
            scheduled_at: Some(scheduled_at),
            active: true,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_publish_due_promotes_due_editorials() {
        let repo = setup_repo().await;
        let worker = PublishWorker::new(PublishWorkerConfig::default(), repo.clone());

        let due = scheduled_record("Atrasada", Utc::now() - ChronoDuration::minutes(5));
        repo.save(&due).await.unwrap();

        let pending = scheduled_record("Futura", Utc::now() + ChronoDuration::hours(1));
        repo.save(&pending).await.unwrap();

        worker.publish_due().await.unwrap();

        let published = repo.find_by_id(due.id).await.unwrap().unwrap();
        assert_eq!(published.status, EditorialStatus::Published);
        assert!(published.published_at.is_some());
        assert!(!published.scheduled);

        let untouched = repo.find_by_id(pending.id).await.unwrap().unwrap();
        assert_eq!(untouched.status, EditorialStatus::Scheduled);
        assert!(untouched.published_at.is_none());
    }

    #[tokio::test]
    async fn test_publish_due_with_empty_backlog_is_noop() {
        let repo = setup_repo().await;
        let worker = PublishWorker::new(PublishWorkerConfig::default(), repo);

        worker.publish_due().await.unwrap();
    }

    #[tokio::test]
    async fn test_published_editorial_becomes_visible() {
        let repo = setup_repo().await;
        let worker = PublishWorker::new(PublishWorkerConfig::default(), repo.clone());

        let due = scheduled_record("Agora no ar", Utc::now() - ChronoDuration::minutes(1));
        repo.save(&due).await.unwrap();
        assert!(repo.find_published_by_id(due.id).await.unwrap().is_none());

        worker.publish_due().await.unwrap();

        assert!(repo.find_published_by_id(due.id).await.unwrap().is_some());
    }

    #[test]
    fn test_worker_promotion_keeps_title_and_body() {
        let mut editorial = Editorial::new(
            Title::new("Edição agendada".to_string()).unwrap(),
            "Texto original.",
            Layout::Banner,
            Style::new(1).unwrap(),
        );
        editorial
            .schedule(Utc::now() + ChronoDuration::hours(1))
            .unwrap();

        let record = EditorialRecord::from(&editorial);
        let mut restored = Editorial::try_from(record).unwrap();
        restored.publish_now().unwrap();

        assert_eq!(restored.title().as_str(), "Edição agendada");
        assert_eq!(restored.status(), EditorialStatus::Published);
    }
}
