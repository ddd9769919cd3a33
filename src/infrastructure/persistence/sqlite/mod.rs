//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod editorial_repo;
mod theme_repo;
mod author_repo;
mod subscription_repo;
mod site_config_repo;

pub use database::*;
pub use editorial_repo::*;
pub use theme_repo::*;
pub use author_repo::*;
pub use subscription_repo::*;
pub use site_config_repo::*;
