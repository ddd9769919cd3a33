//! Gazeta - 新闻门户服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Editorial Context: 社论上下文（工作流 + 版式分节）
//! - Theme Context: 主题上下文
//! - Author Context: 作者上下文
//! - Newsletter Context: 简报订阅上下文
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Editorial/Theme/Author/Subscription/SiteConfig Repositories）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储
//! - Worker: PublishWorker 排期发布
//! - Seed: 开发用示例数据

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
