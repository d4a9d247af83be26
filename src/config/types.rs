//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 鉴权配置
    #[serde(default)]
    pub auth: AuthConfig,

    /// 合成进程配置
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    64 * 1024 // 64 KiB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 鉴权配置
#[derive(Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// 调用方必须在 X-API-Key 中携带的密钥
    #[serde(default)]
    pub api_key: String,
}

impl AuthConfig {
    /// 日志用的脱敏形式
    pub fn masked_key(&self) -> String {
        if self.api_key.is_empty() {
            "<unset>".to_string()
        } else {
            format!("*** ({} chars)", self.api_key.chars().count())
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &self.masked_key())
            .finish()
    }
}

/// 合成进程配置
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    /// 解释器
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// 合成脚本路径
    #[serde(default = "default_script_path")]
    pub script_path: PathBuf,

    /// 进程超时时间（秒）
    #[serde(default = "default_synthesis_timeout")]
    pub timeout_secs: u64,

    /// 是否在错误响应中返回进程原始输出
    #[serde(default = "default_expose_diagnostics")]
    pub expose_diagnostics: bool,
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_script_path() -> PathBuf {
    PathBuf::from("text_to_speech.py")
}

fn default_synthesis_timeout() -> u64 {
    120
}

fn default_expose_diagnostics() -> bool {
    true
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            script_path: default_script_path(),
            timeout_secs: default_synthesis_timeout(),
            expose_diagnostics: default_expose_diagnostics(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.max_body_bytes, 65536);
        assert_eq!(config.synthesis.interpreter, "python3");
        assert_eq!(config.synthesis.timeout_secs, 120);
        assert!(config.synthesis.expose_diagnostics);
        assert!(config.auth.api_key.is_empty());
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_auth_debug_masks_key() {
        let auth = AuthConfig {
            api_key: "topsecret".to_string(),
        };
        let debug = format!("{:?}", auth);
        assert!(!debug.contains("topsecret"));
        assert!(debug.contains("9 chars"));
    }
}
