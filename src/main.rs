//! Autocall - 外呼语音合成服务

use std::sync::Arc;

use autocall::config::{load_config, print_config, LogConfig};
use autocall::infrastructure::adapters::{ProcessSynthesizer, ProcessSynthesizerConfig};
use autocall::infrastructure::http::{ApiKeyVerifier, AppState, HttpServer, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Autocall - 外呼语音合成服务");
    print_config(&config);

    if !config.synthesis.script_path.exists() {
        tracing::warn!(
            script = %config.synthesis.script_path.display(),
            "Synthesis script not found; requests will fail until it is installed"
        );
    }

    // 创建合成进程客户端
    let synthesizer_config = ProcessSynthesizerConfig::new(config.synthesis.script_path.clone())
        .with_interpreter(config.synthesis.interpreter.clone())
        .with_timeout(config.synthesis.timeout_secs);
    let synthesizer = Arc::new(ProcessSynthesizer::new(synthesizer_config));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let state = AppState::new(
        synthesizer,
        ApiKeyVerifier::new(config.auth.api_key.clone()),
        config.synthesis.expose_diagnostics,
    );

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志（RUST_LOG 优先）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},autocall={},tower_http=debug", log.level, log.level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 等待 Ctrl-C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal");
}
