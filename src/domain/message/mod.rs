//! Message Context - 外呼语音消息限界上下文
//!
//! 职责:
//! - 输入字段归一化（trim）
//! - 电话号码 / 消息文本 / 呼叫编号校验
//! - SpeechRequest 聚合构建

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::SpeechRequest;
pub use errors::MessageError;
pub use value_objects::{trim_field, CallId, MessageText, PhoneNumber};
