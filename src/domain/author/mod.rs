//! Author Context - 作者限界上下文
//!
//! 职责:
//! - 作者聚合（署名与社交链接）

mod aggregate;
mod value_objects;

pub use aggregate::Author;
pub use value_objects::{AuthorId, Nickname, SocialLinks};
