//! Speak Command Handler
//!
//! 校验 -> 调用合成引擎 -> 组装响应，任一步失败即终止

use chrono::Local;
use std::sync::Arc;

use crate::application::commands::{SpeakCommand, SpeakResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{SynthesisRequest, SynthesizerPort};
use crate::domain::SpeechRequest;

/// 响应中 timestamp 字段的格式（本地时间）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Speak Handler
pub struct SpeakHandler {
    synthesizer: Arc<dyn SynthesizerPort>,
}

impl SpeakHandler {
    pub fn new(synthesizer: Arc<dyn SynthesizerPort>) -> Self {
        Self { synthesizer }
    }

    pub async fn handle(&self, command: SpeakCommand) -> Result<SpeakResponse, ApplicationError> {
        // 校验不通过则不会调用合成引擎
        let request = SpeechRequest::parse(&command.phone, &command.message, &command.uuid)?;

        tracing::info!(
            call_id = %request.call_id(),
            phone = %request.phone().masked(),
            message_chars = request.message().char_count(),
            "Dispatching speech synthesis"
        );

        let outcome = self
            .synthesizer
            .synthesize(SynthesisRequest::from(&request))
            .await?;

        tracing::info!(
            call_id = %request.call_id(),
            audio_file = ?outcome.audio_file,
            "Speech synthesis completed"
        );

        Ok(SpeakResponse {
            phone: request.phone().as_str().to_string(),
            message: request.message().as_str().to_string(),
            audio_file: outcome.audio_file,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SynthesisError;
    use crate::domain::MessageError;
    use crate::infrastructure::adapters::FakeSynthesizer;
    use chrono::NaiveDateTime;

    fn command(phone: &str, message: &str, uuid: &str) -> SpeakCommand {
        SpeakCommand {
            phone: phone.to_string(),
            message: message.to_string(),
            uuid: uuid.to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_request_dispatches_trimmed_payload() {
        let fake = Arc::new(FakeSynthesizer::replying(
            r#"{"status":"success","audio_file":"out.mp3"}"#,
        ));
        let handler = SpeakHandler::new(fake.clone());

        let response = handler
            .handle(command(" +14155551234 ", "Hello\n", "42"))
            .await
            .unwrap();

        assert_eq!(response.phone, "+14155551234");
        assert_eq!(response.message, "Hello");
        assert_eq!(response.audio_file.as_deref(), Some("out.mp3"));
        assert!(NaiveDateTime::parse_from_str(&response.timestamp, TIMESTAMP_FORMAT).is_ok());

        let calls = fake.requests();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            SynthesisRequest {
                phone: "+14155551234".to_string(),
                message: "Hello".to_string(),
                uuid: "42".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_input_never_dispatches() {
        let fake = Arc::new(FakeSynthesizer::replying(r#"{"status":"success"}"#));
        let handler = SpeakHandler::new(fake.clone());

        let err = handler.handle(command("0123", "Hello", "42")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(MessageError::InvalidPhone)));

        let err = handler.handle(command("4155551234", "  ", "42")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(MessageError::EmptyMessage)));

        let err = handler.handle(command("4155551234", "Hi", "12a")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(MessageError::InvalidCallId)));

        assert!(fake.requests().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_request_dispatches_each_time() {
        let fake = Arc::new(FakeSynthesizer::replying(r#"{"status":"success"}"#));
        let handler = SpeakHandler::new(fake.clone());

        for _ in 0..3 {
            let response = handler.handle(command("4155551234", "Hi", "7")).await.unwrap();
            assert_eq!(response.audio_file, None);
        }

        assert_eq!(fake.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_downstream_error_surfaces_message() {
        let fake = Arc::new(FakeSynthesizer::replying(
            r#"{"status":"error","message":"voice not found"}"#,
        ));
        let handler = SpeakHandler::new(fake);

        let err = handler.handle(command("4155551234", "Hi", "7")).await.unwrap_err();
        match err {
            ApplicationError::Synthesis(SynthesisError::Rejected(msg)) => {
                assert_eq!(msg, "voice not found")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
