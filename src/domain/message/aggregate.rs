//! Message Context - Aggregate Root

use super::{CallId, MessageError, MessageText, PhoneNumber};

/// 外呼语音请求聚合根
///
/// 不变量:
/// - 三个字段全部通过校验才能构建
/// - 校验顺序固定: call id -> phone -> message，第一个失败即返回
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    call_id: CallId,
    phone: PhoneNumber,
    message: MessageText,
}

impl SpeechRequest {
    /// 从原始（未 trim）字段构建
    pub fn parse(phone: &str, message: &str, call_id: &str) -> Result<Self, MessageError> {
        let call_id = CallId::parse(call_id)?;
        let phone = PhoneNumber::parse(phone)?;
        let message = MessageText::parse(message)?;

        Ok(Self {
            call_id,
            phone,
            message,
        })
    }

    // Getters
    pub fn call_id(&self) -> &CallId {
        &self.call_id
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let req = SpeechRequest::parse(" +14155551234 ", "Hello ", "42").unwrap();
        assert_eq!(req.phone().as_str(), "+14155551234");
        assert_eq!(req.message().as_str(), "Hello");
        assert_eq!(req.call_id().as_str(), "42");
    }

    #[test]
    fn test_call_id_checked_first() {
        // 三个字段都无效时，先报 call id
        let err = SpeechRequest::parse("0123", "  ", "abc").unwrap_err();
        assert_eq!(err, MessageError::InvalidCallId);
    }

    #[test]
    fn test_phone_checked_before_message() {
        let err = SpeechRequest::parse("0123", "  ", "42").unwrap_err();
        assert_eq!(err, MessageError::InvalidPhone);

        let err = SpeechRequest::parse("4155551234", "  ", "42").unwrap_err();
        assert_eq!(err, MessageError::EmptyMessage);
    }
}
