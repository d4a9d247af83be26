//! Synthesizer Port - 语音合成引擎抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::SpeechRequest;

/// 合成错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// 输出不是 JSON 对象（空输出、崩溃堆栈等）
    #[error("Failed to decode synthesis output: {output}")]
    UndecodableOutput { output: String },

    /// 合成引擎自身报告 status = "error"
    #[error("{0}")]
    Rejected(String),

    #[error("Synthesis process timed out after {0} seconds")]
    Timeout(u64),

    #[error("Failed to start synthesis process: {0}")]
    SpawnFailed(String),

    #[error("Synthesis process I/O error: {0}")]
    Io(String),
}

impl SynthesisError {
    /// 错误文本是否包含服务端内部诊断信息
    pub fn is_diagnostic(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// 合成请求
///
/// 序列化后作为单个参数传给合成进程: {"phone", "message", "uuid"}
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesisRequest {
    pub phone: String,
    pub message: String,
    pub uuid: String,
}

impl From<&SpeechRequest> for SynthesisRequest {
    fn from(request: &SpeechRequest) -> Self {
        Self {
            phone: request.phone().as_str().to_string(),
            message: request.message().as_str().to_string(),
            uuid: request.call_id().as_str().to_string(),
        }
    }
}

/// 合成成功结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisOutcome {
    /// 生成的音频文件引用
    pub audio_file: Option<String>,
}

/// Synthesizer Port
///
/// 外部合成引擎的抽象接口：给定已校验的 phone/message/uuid，
/// 返回音频文件引用或错误
#[async_trait]
pub trait SynthesizerPort: Send + Sync {
    /// 执行一次合成（每次调用都是独立的一次外部调用）
    async fn synthesize(&self, request: SynthesisRequest)
        -> Result<SynthesisOutcome, SynthesisError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_field_order() {
        let request = SpeechRequest::parse("+14155551234", "Hello", "42").unwrap();
        let payload = serde_json::to_string(&SynthesisRequest::from(&request)).unwrap();
        assert_eq!(
            payload,
            r#"{"phone":"+14155551234","message":"Hello","uuid":"42"}"#
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SynthesisError::UndecodableOutput {
            output: "Traceback...".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to decode synthesis output: Traceback...");
        assert!(err.is_diagnostic());

        let err = SynthesisError::Rejected("voice not found".to_string());
        assert_eq!(err.to_string(), "voice not found");
        assert!(!err.is_diagnostic());
    }
}
