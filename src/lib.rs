//! Autocall - 外呼语音合成 HTTP 接口
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Message Context: phone / message / uuid 校验
//!
//! 应用层 (application/):
//! - Ports: SynthesizerPort
//! - Commands: SpeakCommand + SpeakHandler
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 单一 JSON 接口 + API key 鉴权
//! - Adapters: 外部合成进程调用

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
