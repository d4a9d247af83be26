//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Message Context: 外呼语音消息的字段校验

pub mod message;

pub use message::{CallId, MessageError, MessageText, PhoneNumber, SpeechRequest};
