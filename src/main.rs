//! Gazeta - 新闻门户服务
//!
//! 架构:
//! - Domain: editorial/, theme/, author/, newsletter/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, persistence, worker, seed

use std::sync::Arc;

use gazeta::config::{load_config, print_config};
use gazeta::infrastructure::http::{AppState, HttpServer, ServerConfig};
use gazeta::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteAuthorRepository,
    SqliteEditorialRepository, SqliteSiteConfigRepository, SqliteSubscriptionRepository,
    SqliteThemeRepository,
};
use gazeta::infrastructure::seed::SampleDataSeeder;
use gazeta::infrastructure::worker::{PublishWorker, PublishWorkerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},gazeta={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Gazeta - 新闻门户服务");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let editorial_repo = Arc::new(SqliteEditorialRepository::new(pool.clone()));
    let theme_repo = Arc::new(SqliteThemeRepository::new(pool.clone()));
    let author_repo = Arc::new(SqliteAuthorRepository::new(pool.clone()));
    let subscription_repo = Arc::new(SqliteSubscriptionRepository::new(pool.clone()));
    let site_config_repo = Arc::new(SqliteSiteConfigRepository::new(pool.clone()));

    // 装载示例数据（仅当启用且库为空）
    if config.seed.enabled {
        let seeder = SampleDataSeeder::new(
            editorial_repo.clone(),
            theme_repo.clone(),
            author_repo.clone(),
        );
        seeder.run().await?;
    }

    // 启动排期发布 Worker
    if config.publisher.enabled {
        let worker_config = PublishWorkerConfig {
            poll_interval_secs: config.publisher.interval_secs,
        };
        let worker = PublishWorker::new(worker_config, editorial_repo.clone());
        tokio::spawn(worker.run());
    }

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        editorial_repo,
        theme_repo,
        author_repo,
        subscription_repo,
        site_config_repo,
    );

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
