//! Ping Handler

use axum::Json;
use serde::Serialize;

use crate::infrastructure::http::dto::ApiResponse;

#[derive(Debug, Serialize)]
pub struct PingDataDto {
    pub service: &'static str,
    pub version: &'static str,
}

/// 存活检查，不需要 API key
pub async fn ping() -> Json<ApiResponse<PingDataDto>> {
    Json(ApiResponse::success(
        "pong",
        PingDataDto {
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        },
    ))
}
