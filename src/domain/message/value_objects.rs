//! Message Context - Value Objects

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::MessageError;

// \d 在 regex crate 中匹配 Unicode 数字，这里只接受 ASCII
static CALL_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("call id pattern"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("phone pattern"));

/// 去除首尾空白
///
/// 只处理 ASCII 空白集合: 空格 \t \n \r \0 \x0B
pub fn trim_field(raw: &str) -> &str {
    raw.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}

/// 呼叫编号
///
/// 字段名沿用 "uuid"，但实际只允许纯数字
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CallId(String);

impl CallId {
    pub fn parse(raw: &str) -> Result<Self, MessageError> {
        let value = trim_field(raw);
        if !CALL_ID_PATTERN.is_match(value) {
            return Err(MessageError::InvalidCallId);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 电话号码（E.164 形式，可选前导 +，共 2-15 位数字）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, MessageError> {
        let value = trim_field(raw);
        if !PHONE_PATTERN.is_match(value) {
            return Err(MessageError::InvalidPhone);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 日志用脱敏形式: 保留前 5 个和后 2 个字符
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 7 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..5].iter().collect();
        let tail: String = chars[chars.len() - 2..].iter().collect();
        format!("{}{}{}", head, "*".repeat(chars.len() - 7), tail)
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 待合成的消息文本（trim 后非空）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageText(String);

impl MessageText {
    pub fn parse(raw: &str) -> Result<Self, MessageError> {
        let value = trim_field(raw);
        if value.is_empty() {
            return Err(MessageError::EmptyMessage);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 字符数（非字节数）
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}
