//! MonStockage - 漫画收藏管理命令行
//!
//! - `serve`: 以 mock 数据启动本地 REST 服务
//! - 其它子命令: 通过配置的 API（真实后端或 mock）执行一次操作

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use monstockage::application::MangaApiPort;
use monstockage::cli::{execute, Cli, CliError, Command};
use monstockage::config::{load_config_from_path, print_config, AppConfig};
use monstockage::infrastructure::http::{AppState, HttpServer, ServerConfig};
use monstockage::infrastructure::{HttpMangaApi, HttpMangaApiConfig, MockMangaApi, MockMangaApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let mut config = load_config_from_path(cli.config.as_deref()).context("Failed to load config")?;
    if cli.mock {
        config.api.use_mocks = true;
    }

    // 初始化日志，输出到 stderr，stdout 留给命令结果
    let log_filter = format!(
        "{},monstockage={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve => serve(&config).await,
        Command::Action(action) => {
            let state = AppState::new(build_api(&config)?);
            execute(&state, action, &mut std::io::stdout())
                .await
                .map_err(CliError::into_anyhow)
        }
    }
}

fn mock_api(config: &AppConfig) -> MockMangaApi {
    MockMangaApi::with_fixtures(MockMangaApiConfig {
        simulate_latency: config.mock.simulate_latency,
    })
}

/// 根据 `api.use_mocks` 选择 API 实现
fn build_api(config: &AppConfig) -> anyhow::Result<Arc<dyn MangaApiPort>> {
    if config.api.use_mocks {
        return Ok(Arc::new(mock_api(config)));
    }

    let api_config =
        HttpMangaApiConfig::new(&config.api.base_url).with_timeout(config.api.timeout());
    let api = HttpMangaApi::new(api_config).context("Failed to create HTTP client")?;
    Ok(Arc::new(api))
}

/// 本地开发服务，始终使用 mock 数据
async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    tracing::info!("MonStockage - serveur de développement");
    let mut config = config.clone();
    config.api.use_mocks = true;
    print_config(&config);

    let state = AppState::new(Arc::new(mock_api(&config)));
    let server = HttpServer::new(
        ServerConfig::new(&config.server.host, config.server.port),
        state,
    );

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
