//! HTTP Routes
//!
//! API Endpoints:
//! - /api/speak   ANY   外呼语音合成（非 POST 返回错误信封）
//! - /api/ping    GET   存活检查

use axum::{
    routing::{any, get},
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
        // 方法检查在 handler 内完成，保证非 POST 也返回 JSON 信封
        .route("/speak", any(handlers::speak))
}
