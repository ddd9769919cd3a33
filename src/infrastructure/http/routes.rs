//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping                    GET   健康检查
//! - /api/editorial/create        POST  创建社论（草稿）
//! - /api/editorial/update        POST  修订社论
//! - /api/editorial/delete        POST  删除社论
//! - /api/editorial/get           POST  获取社论详情（管理端）
//! - /api/editorial/list          GET   列出所有社论（管理端）
//! - /api/editorial/publish       POST  立即发布
//! - /api/editorial/schedule      POST  排期发布
//! - /api/editorial/deactivate    POST  下线
//! - /api/editorial/reactivate    POST  恢复上线
//! - /api/editorial/latest        POST  最新公开社论
//! - /api/editorial/view          POST  阅读公开社论（浏览数 +1，附相关社论）
//! - /api/editorial/by_theme      POST  某主题下的公开社论
//! - /api/editorial/by_author     POST  某作者署名的公开社论
//! - /api/editorial/search        POST  公开社论检索
//! - /api/theme/create            POST  创建主题
//! - /api/theme/list              GET   列出启用主题
//! - /api/author/create           POST  创建作者
//! - /api/author/get              POST  获取作者详情
//! - /api/author/list             GET   列出在职作者
//! - /api/newsletter/subscribe    POST  订阅 newsletter
//! - /api/newsletter/cancel       POST  取消订阅
//! - /api/newsletter/list         GET   列出全部订阅（管理端）
//! - /api/site/config             GET   读取站点配置
//! - /api/site/update             POST  更新站点配置

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/editorial", editorial_routes())
        .nest("/theme", theme_routes())
        .nest("/author", author_routes())
        .nest("/newsletter", newsletter_routes())
        .nest("/site", site_routes())
}

/// Editorial 路由
fn editorial_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(handlers::create_editorial))
        .route("/update", post(handlers::update_editorial))
        .route("/delete", post(handlers::delete_editorial))
        .route("/get", post(handlers::get_editorial))
        .route("/list", get(handlers::list_editorials))
        .route("/publish", post(handlers::publish_editorial))
        .route("/schedule", post(handlers::schedule_editorial))
        .route("/deactivate", post(handlers::deactivate_editorial))
        .route("/reactivate", post(handlers::reactivate_editorial))
        .route("/latest", post(handlers::latest_editorials))
        .route("/view", post(handlers::view_editorial))
        .route("/by_theme", post(handlers::editorials_by_theme))
        .route("/by_author", post(handlers::editorials_by_author))
        .route("/search", post(handlers::search_editorials))
}

/// Theme 路由
fn theme_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(handlers::create_theme))
        .route("/list", get(handlers::list_themes))
}

/// Author 路由
fn author_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create", post(handlers::create_author))
        .route("/get", post(handlers::get_author))
        .route("/list", get(handlers::list_authors))
}

/// Newsletter 路由
fn newsletter_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/subscribe", post(handlers::subscribe_newsletter))
        .route("/cancel", post(handlers::cancel_subscription))
        .route("/list", get(handlers::list_subscriptions))
}

/// Site 路由
fn site_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/config", get(handlers::get_site_config))
        .route("/update", post(handlers::update_site_config))
}
