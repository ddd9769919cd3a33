//! Editorial Context - 社论限界上下文
//!
//! 职责:
//! - 社论聚合与发布工作流
//! - 版式/样式/状态值对象
//! - 按版式切分正文小节

mod aggregate;
mod value_objects;

pub use aggregate::Editorial;
pub use value_objects::{EditorialId, EditorialStatus, Layout, Style, Title};
