//! Domain Layer - 领域层
//!
//! 包含四个限界上下文:
//! - Editorial Context: 社论与发布工作流
//! - Theme Context: 主题分类
//! - Author Context: 作者署名
//! - Newsletter Context: 邮件订阅

pub mod author;
pub mod editorial;
pub mod newsletter;
pub mod theme;

// 共享的正文分节器与站点配置
mod sections;
mod site_config;

pub use sections::{split_five, split_three};
pub use site_config::SiteConfig;
