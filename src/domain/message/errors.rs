//! Message Context - Errors

use thiserror::Error;

/// 校验错误
///
/// 错误文本直接返回给调用方，不可随意修改
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("Invalid UUID format. UUID must contain only numbers")]
    InvalidCallId,

    #[error("Invalid phone number format")]
    InvalidPhone,

    #[error("Message cannot be empty")]
    EmptyMessage,
}
