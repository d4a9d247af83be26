//! Fake Synthesizer - 用于测试的合成引擎
//!
//! 不启动外部进程，按固定输出回复并记录每次调用

use async_trait::async_trait;
use std::sync::Mutex;

use super::decode_output;
use crate::application::ports::{
    SynthesisError, SynthesisOutcome, SynthesisRequest, SynthesizerPort,
};

enum FakeReply {
    /// 模拟进程 stdout，按真实协议解析
    Output(String),
    /// 直接返回错误（超时、启动失败等）
    Error(SynthesisError),
}

/// Fake Synthesizer
pub struct FakeSynthesizer {
    reply: FakeReply,
    requests: Mutex<Vec<SynthesisRequest>>,
}

impl FakeSynthesizer {
    /// 每次调用都输出固定的 stdout
    pub fn replying(stdout: impl Into<String>) -> Self {
        Self {
            reply: FakeReply::Output(stdout.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 每次调用都返回固定错误
    pub fn failing(error: SynthesisError) -> Self {
        Self {
            reply: FakeReply::Error(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的请求（按调用顺序）
    pub fn requests(&self) -> Vec<SynthesisRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl SynthesizerPort for FakeSynthesizer {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisOutcome, SynthesisError> {
        tracing::debug!(uuid = %request.uuid, "FakeSynthesizer: returning fixed reply");

        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request);

        match &self.reply {
            FakeReply::Output(stdout) => decode_output(stdout, ""),
            FakeReply::Error(err) => Err(err.clone()),
        }
    }
}
