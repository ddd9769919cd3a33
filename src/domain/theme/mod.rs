//! Theme Context - 主题限界上下文
//!
//! 职责:
//! - 主题聚合（社论分类标签）
//! - slug 值对象

mod aggregate;
mod value_objects;

pub use aggregate::Theme;
pub use value_objects::{Slug, ThemeId, ThemeName};
