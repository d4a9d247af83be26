//! Data Transfer Objects

use serde::Serialize;
use serde_json::{Map, Value};

use crate::application::{SpeakCommand, SpeakResponse};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 响应状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// 统一 API 响应格式
///
/// `{"status": "success"|"error", "message": "...", "data": {...}|null}`
/// 错误响应额外带一个稳定的 `code` 字段
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: Status,
    pub message: String,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            data: Some(data),
            code: None,
        }
    }

    /// 错误响应
    pub fn error(code: &'static str, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            status: Status::Error,
            message: message.into(),
            data: None,
            code: Some(code),
        }
    }
}

// ============================================================================
// Speak DTOs
// ============================================================================

/// 成功响应的固定文本
pub const SPEAK_SUCCESS_MESSAGE: &str = "Message processed successfully";

/// 解析请求体
///
/// 请求体必须是 JSON 对象，phone / message / uuid 三个字段必须存在且为字符串或数字。
/// 任一条件不满足返回 None
pub fn parse_speak_body(body: &[u8]) -> Option<SpeakCommand> {
    let fields: Map<String, Value> = serde_json::from_slice(body).ok()?;

    Some(SpeakCommand {
        phone: field_text(&fields, "phone")?,
        message: field_text(&fields, "message")?,
        uuid: field_text(&fields, "uuid")?,
    })
}

fn field_text(fields: &Map<String, Value>, name: &str) -> Option<String> {
    match fields.get(name)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[derive(Debug, Serialize)]
pub struct SpeakDataDto {
    pub phone: String,
    pub message: String,
    pub audio_file: Option<String>,
    pub timestamp: String,
}

impl From<SpeakResponse> for SpeakDataDto {
    fn from(r: SpeakResponse) -> Self {
        Self {
            phone: r.phone,
            message: r.message,
            audio_file: r.audio_file,
            timestamp: r.timestamp,
        }
    }
}
