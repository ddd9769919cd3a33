//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod author_queries;
mod editorial_queries;
mod newsletter_queries;
mod site_queries;
mod theme_queries;

pub mod handlers;

pub use author_queries::*;
pub use editorial_queries::*;
pub use newsletter_queries::*;
pub use site_queries::*;
pub use theme_queries::*;
