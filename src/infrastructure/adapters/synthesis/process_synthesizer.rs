//! Process Synthesizer - 调用外部合成脚本
//!
//! 实现 SynthesizerPort trait，以参数数组方式启动合成进程（不经过 shell）
//!
//! 调用方式:
//! `<interpreter> <script_path> '{"phone":"...","message":"...","uuid":"..."}'`
//! 进程在 stdout 输出单个 JSON 对象

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use super::decode_output;
use crate::application::ports::{
    SynthesisError, SynthesisOutcome, SynthesisRequest, SynthesizerPort,
};

/// 合成进程配置
#[derive(Debug, Clone)]
pub struct ProcessSynthesizerConfig {
    /// 解释器（如 python3）
    pub interpreter: String,
    /// 合成脚本路径
    pub script_path: PathBuf,
    /// 进程超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for ProcessSynthesizerConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            script_path: PathBuf::from("text_to_speech.py"),
            timeout_secs: 120,
        }
    }
}

impl ProcessSynthesizerConfig {
    pub fn new(script_path: impl Into<PathBuf>) -> Self {
        Self {
            script_path: script_path.into(),
            ..Default::default()
        }
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// 合成进程客户端
///
/// 每次请求启动一个独立进程；超时后进程被 kill
pub struct ProcessSynthesizer {
    config: ProcessSynthesizerConfig,
}

impl ProcessSynthesizer {
    pub fn new(config: ProcessSynthesizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessSynthesizerConfig {
        &self.config
    }

    fn command(&self, payload: &str) -> Command {
        let mut cmd = Command::new(&self.config.interpreter);
        cmd.arg(&self.config.script_path)
            .arg(payload)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl SynthesizerPort for ProcessSynthesizer {
    /// info 级别只记录元数据（解释器、脚本、uuid、退出码、输出字节数）；
    /// 原始 stdout/stderr 仅在 debug 级别输出，phone/message 负载从不写入日志
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisOutcome, SynthesisError> {
        let payload =
            serde_json::to_string(&request).map_err(|e| SynthesisError::Io(e.to_string()))?;

        tracing::debug!(
            interpreter = %self.config.interpreter,
            script = %self.config.script_path.display(),
            uuid = %request.uuid,
            timeout_secs = self.config.timeout_secs,
            "Starting synthesis process"
        );

        let child = self
            .command(&payload)
            .spawn()
            .map_err(|e| SynthesisError::SpawnFailed(e.to_string()))?;

        // 超时时 future 被丢弃，kill_on_drop 负责结束子进程
        let output = tokio::time::timeout(
            Duration::from_secs(self.config.timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| SynthesisError::Timeout(self.config.timeout_secs))?
        .map_err(|e| SynthesisError::Io(e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        tracing::info!(
            interpreter = %self.config.interpreter,
            script = %self.config.script_path.display(),
            uuid = %request.uuid,
            exit_status = %output.status,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "Synthesis process finished"
        );
        tracing::debug!(stdout = %stdout, stderr = %stderr, "Synthesis process output");

        decode_output(&stdout, &stderr)
    }
}
