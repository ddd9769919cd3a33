//! Newsletter Context - 邮件订阅限界上下文
//!
//! 职责:
//! - 订阅聚合（订阅/回归/取消）
//! - 邮箱值对象

mod aggregate;
mod value_objects;

pub use aggregate::Subscription;
pub use value_objects::{EmailAddress, SubscriptionId};
