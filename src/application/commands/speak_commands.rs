//! Speak Commands

use serde::Serialize;

/// 外呼语音命令
///
/// 字段为原始输入，尚未 trim 和校验
#[derive(Debug, Clone)]
pub struct SpeakCommand {
    pub phone: String,
    pub message: String,
    pub uuid: String,
}

/// 外呼语音响应
#[derive(Debug, Clone, Serialize)]
pub struct SpeakResponse {
    pub phone: String,
    pub message: String,
    pub audio_file: Option<String>,
    /// 本地时间 `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}
