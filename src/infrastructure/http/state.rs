//! Application State

use std::sync::Arc;

use super::auth::ApiKeyVerifier;
use crate::application::{SpeakHandler, SynthesizerPort};

/// 应用状态
///
/// 启动时构建一次，之后只读
pub struct AppState {
    pub api_key: ApiKeyVerifier,
    /// 是否在错误响应中返回合成进程的原始输出
    pub expose_diagnostics: bool,
    pub speak_handler: SpeakHandler,
}

impl AppState {
    pub fn new(
        synthesizer: Arc<dyn SynthesizerPort>,
        api_key: ApiKeyVerifier,
        expose_diagnostics: bool,
    ) -> Self {
        Self {
            api_key,
            expose_diagnostics,
            speak_handler: SpeakHandler::new(synthesizer),
        }
    }
}
