//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File, Map};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `AUTOCALL_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `AUTOCALL_SERVER__PORT=8080`
/// - `AUTOCALL_AUTH__API_KEY=...`
/// - `AUTOCALL_SYNTHESIS__SCRIPT_PATH=/opt/tts/text_to_speech.py`
/// - `AUTOCALL_SYNTHESIS__EXPOSE_DIAGNOSTICS=false`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with_env(config_path, None)
}

/// 合并配置；`env` 为 None 时读取进程环境变量
fn load_config_with_env(
    config_path: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.max_body_bytes", 64 * 1024)?
        .set_default("auth.api_key", "")?
        .set_default("synthesis.interpreter", "python3")?
        .set_default("synthesis.script_path", "text_to_speech.py")?
        .set_default("synthesis.timeout_secs", 120)?
        .set_default("synthesis.expose_diagnostics", true)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），例如 AUTOCALL_AUTH__API_KEY
    // 不开启 try_parsing: 纯数字的 API key 必须保持字符串原样（含前导 0），
    // 数值/布尔字段由反序列化时从字符串转换
    builder = builder.add_source(
        Environment::with_prefix("AUTOCALL")
            .prefix_separator("_")
            .separator("__")
            .source(env),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Request body limit cannot be 0".to_string(),
        ));
    }

    if config.auth.api_key.is_empty() {
        return Err(ConfigError::ValidationError(
            "API key must be configured (auth.api_key)".to_string(),
        ));
    }

    if config.synthesis.interpreter.is_empty() {
        return Err(ConfigError::ValidationError(
            "Synthesis interpreter cannot be empty".to_string(),
        ));
    }

    if config.synthesis.script_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Synthesis script path cannot be empty".to_string(),
        ));
    }

    if config.synthesis.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Synthesis timeout cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("API Key: {}", config.auth.masked_key());
    tracing::info!("Interpreter: {}", config.synthesis.interpreter);
    tracing::info!("Synthesis Script: {}", config.synthesis.script_path.display());
    tracing::info!("Synthesis Timeout: {}s", config.synthesis.timeout_secs);
    tracing::info!("Expose Diagnostics: {}", config.synthesis.expose_diagnostics);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
