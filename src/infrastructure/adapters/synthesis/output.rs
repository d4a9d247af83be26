//! Synthesis Output Decoder
//!
//! 合成进程的 stdout 协议:
//! `{"status": "success"|"error", "message"?: string, "audio_file"?: string}`

use serde_json::{Map, Value};

use crate::application::ports::{SynthesisError, SynthesisOutcome};

/// 解析合成进程输出
///
/// - stdout 必须是非空 JSON 对象，否则返回 UndecodableOutput（诊断文本为 stdout + stderr）
/// - status == "error" 时返回进程自身的 message
/// - 其余情况（包括缺少 status）视为成功
pub fn decode_output(stdout: &str, stderr: &str) -> Result<SynthesisOutcome, SynthesisError> {
    let fields = match serde_json::from_str::<Map<String, Value>>(stdout) {
        Ok(fields) if !fields.is_empty() => fields,
        _ => {
            return Err(SynthesisError::UndecodableOutput {
                output: format!("{}{}", stdout, stderr),
            })
        }
    };

    if fields.get("status").and_then(Value::as_str) == Some("error") {
        let message = fields
            .get("message")
            .and_then(scalar_text)
            .unwrap_or_default();
        return Err(SynthesisError::Rejected(message));
    }

    Ok(SynthesisOutcome {
        audio_file: fields.get("audio_file").and_then(scalar_text),
    })
}

/// 字符串或数字字段转为文本，其他类型视为缺失
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
