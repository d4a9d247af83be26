//! 应用层错误定义

use thiserror::Error;

use crate::application::ports::SynthesisError;
use crate::domain::MessageError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 字段校验失败
    #[error(transparent)]
    Validation(#[from] MessageError),

    /// 外部合成失败
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}
