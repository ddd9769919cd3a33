//! Worker Layer - Background Task Processing
//!
//! 实现 PublishWorker，处理排期社论的定时发布

mod publish_worker;

pub use publish_worker::{PublishWorker, PublishWorkerConfig};
