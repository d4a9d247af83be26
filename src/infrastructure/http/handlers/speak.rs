//! Speak Handler
//!
//! 处理顺序（任一步失败即返回错误信封）:
//! 1. 请求方法必须是 POST
//! 2. X-API-Key 校验
//! 3. 请求体读取（超过上限返回 payload_too_large）与解析
//! 4. 字段校验 + 调用合成进程

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, Method, StatusCode},
    Json,
};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::infrastructure::http::dto::{
    parse_speak_body, ApiResponse, SpeakDataDto, SPEAK_SUCCESS_MESSAGE,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn speak(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ApiResponse<SpeakDataDto>>, ApiError> {
    let request_id = Uuid::new_v4();

    process(&state, &method, &headers, body)
        .instrument(tracing::info_span!("speak", %request_id))
        .await
}

async fn process(
    state: &AppState,
    method: &Method,
    headers: &HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ApiResponse<SpeakDataDto>>, ApiError> {
    if *method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    state.api_key.verify(headers)?;

    // 读取失败在方法和鉴权检查之后才上报
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::BodyTooLarge
        } else {
            ApiError::MissingFields
        }
    })?;

    let command = parse_speak_body(&body).ok_or(ApiError::MissingFields)?;

    let result = state
        .speak_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::from(e).with_diagnostics(state.expose_diagnostics))?;

    Ok(Json(ApiResponse::success(
        SPEAK_SUCCESS_MESSAGE,
        SpeakDataDto::from(result),
    )))
}
