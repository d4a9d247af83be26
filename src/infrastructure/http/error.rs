//! HTTP Error Handling
//!
//! 所有错误都以 HTTP 200 + `status: "error"` 的统一信封返回

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ApiResponse;
use crate::application::{ApplicationError, SynthesisError};
use crate::domain::MessageError;

/// 错误码定义
pub mod code {
    pub const METHOD_NOT_ALLOWED: &str = "method_not_allowed";
    pub const MISSING_API_KEY: &str = "missing_api_key";
    pub const INVALID_API_KEY: &str = "invalid_api_key";
    pub const MISSING_FIELDS: &str = "missing_fields";
    pub const PAYLOAD_TOO_LARGE: &str = "payload_too_large";
    pub const INVALID_UUID: &str = "invalid_uuid";
    pub const INVALID_PHONE: &str = "invalid_phone";
    pub const EMPTY_MESSAGE: &str = "empty_message";
    pub const UNDECODABLE_OUTPUT: &str = "undecodable_output";
    pub const SYNTHESIS_FAILED: &str = "synthesis_failed";
    pub const SYNTHESIS_UNAVAILABLE: &str = "synthesis_unavailable";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    MethodNotAllowed,
    MissingApiKey,
    InvalidApiKey,
    MissingFields,
    /// 请求体超过 `server.max_body_bytes`
    BodyTooLarge,
    Validation(MessageError),
    Synthesis {
        error: SynthesisError,
        /// 隐藏进程输出等内部诊断信息
        redact: bool,
    },
}

impl ApiError {
    /// 按配置决定是否向调用方暴露合成诊断信息
    pub fn with_diagnostics(self, expose: bool) -> Self {
        match self {
            ApiError::Synthesis { error, .. } => ApiError::Synthesis {
                error,
                redact: !expose,
            },
            other => other,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed => code::METHOD_NOT_ALLOWED,
            ApiError::MissingApiKey => code::MISSING_API_KEY,
            ApiError::InvalidApiKey => code::INVALID_API_KEY,
            ApiError::MissingFields => code::MISSING_FIELDS,
            ApiError::BodyTooLarge => code::PAYLOAD_TOO_LARGE,
            ApiError::Validation(MessageError::InvalidCallId) => code::INVALID_UUID,
            ApiError::Validation(MessageError::InvalidPhone) => code::INVALID_PHONE,
            ApiError::Validation(MessageError::EmptyMessage) => code::EMPTY_MESSAGE,
            ApiError::Synthesis { error, .. } => match error {
                SynthesisError::UndecodableOutput { .. } => code::UNDECODABLE_OUTPUT,
                SynthesisError::Rejected(_) => code::SYNTHESIS_FAILED,
                SynthesisError::Timeout(_)
                | SynthesisError::SpawnFailed(_)
                | SynthesisError::Io(_) => code::SYNTHESIS_UNAVAILABLE,
            },
        }
    }

    /// 返回给调用方的文本
    pub fn message(&self) -> String {
        match self {
            ApiError::MethodNotAllowed => "Only POST method is allowed".to_string(),
            ApiError::MissingApiKey => "API key is required".to_string(),
            ApiError::InvalidApiKey => "Invalid API key".to_string(),
            ApiError::MissingFields => "Phone, message, and uuid are required".to_string(),
            ApiError::BodyTooLarge => "Request body too large".to_string(),
            ApiError::Validation(e) => e.to_string(),
            ApiError::Synthesis { error, redact } if *redact && error.is_diagnostic() => {
                match error {
                    SynthesisError::UndecodableOutput { .. } => {
                        "Failed to decode synthesis output".to_string()
                    }
                    _ => "Synthesis process unavailable".to_string(),
                }
            }
            ApiError::Synthesis { error, .. } => error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.code();
        match &self {
            ApiError::Synthesis { error, .. } => {
                // 完整诊断信息只写服务端日志
                tracing::error!(code, error = %error, "Synthesis error");
            }
            _ => {
                tracing::warn!(code, error = %self.message(), "Request rejected");
            }
        }

        (
            StatusCode::OK,
            Json(ApiResponse::<()>::error(code, self.message())),
        )
            .into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Validation(e) => ApiError::Validation(e),
            ApplicationError::Synthesis(error) => ApiError::Synthesis {
                error,
                redact: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undecodable() -> ApiError {
        ApiError::from(ApplicationError::Synthesis(SynthesisError::UndecodableOutput {
            output: "Traceback...".to_string(),
        }))
    }

    #[test]
    fn test_validation_messages() {
        let err = ApiError::from(ApplicationError::Validation(MessageError::InvalidCallId));
        assert_eq!(err.code(), code::INVALID_UUID);
        assert_eq!(
            err.message(),
            "Invalid UUID format. UUID must contain only numbers"
        );
    }

    #[test]
    fn test_diagnostics_exposed_by_default() {
        let err = undecodable();
        assert_eq!(err.code(), code::UNDECODABLE_OUTPUT);
        assert_eq!(err.message(), "Failed to decode synthesis output: Traceback...");
    }

    #[test]
    fn test_diagnostics_redacted() {
        let err = undecodable().with_diagnostics(false);
        assert_eq!(err.message(), "Failed to decode synthesis output");

        let err = ApiError::from(ApplicationError::Synthesis(SynthesisError::SpawnFailed(
            "No such file or directory (os error 2)".to_string(),
        )))
        .with_diagnostics(false);
        assert_eq!(err.code(), code::SYNTHESIS_UNAVAILABLE);
        assert_eq!(err.message(), "Synthesis process unavailable");
    }

    #[test]
    fn test_rejection_message_never_redacted() {
        let err = ApiError::from(ApplicationError::Synthesis(SynthesisError::Rejected(
            "voice not found".to_string(),
        )))
        .with_diagnostics(false);
        assert_eq!(err.code(), code::SYNTHESIS_FAILED);
        assert_eq!(err.message(), "voice not found");
    }

    #[test]
    fn test_response_is_http_ok() {
        let response = ApiError::InvalidApiKey.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = ApiError::BodyTooLarge.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_body_too_large() {
        let err = ApiError::BodyTooLarge;
        assert_eq!(err.code(), code::PAYLOAD_TOO_LARGE);
        assert_eq!(err.message(), "Request body too large");
    }
}
