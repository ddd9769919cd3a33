//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod author_handlers;
mod editorial_handlers;
mod newsletter_handlers;
mod site_handlers;
mod theme_handlers;

pub use author_handlers::*;
pub use editorial_handlers::*;
pub use newsletter_handlers::*;
pub use site_handlers::*;
pub use theme_handlers::*;
