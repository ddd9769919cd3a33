//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod author_commands;
mod editorial_commands;
mod newsletter_commands;
mod site_commands;
mod theme_commands;

pub mod handlers;

pub use author_commands::*;
pub use editorial_commands::*;
pub use newsletter_commands::*;
pub use site_commands::*;
pub use theme_commands::*;
