//! Configuration Loader
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（monstockage.toml / monstockage.local.toml，或显式指定的文件）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
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

/// 配置文件搜索路径（不含扩展名）
const CONFIG_FILE_NAMES: &[&str] = &["monstockage", "monstockage.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "MONSTOCKAGE";

/// 加载应用配置
///
/// # 环境变量示例
/// - `MONSTOCKAGE_API__BASE_URL=http://192.168.1.10:3000/api/`
/// - `MONSTOCKAGE_API__USE_MOCKS=true`
/// - `MONSTOCKAGE_SERVER__PORT=8080`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置，`None` 时搜索默认文件名
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("api.base_url", "http://localhost:3000/api/")?
        .set_default("api.timeout_secs", 10)?
        .set_default("api.use_mocks", false)?
        .set_default("mock.simulate_latency", true)?
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("log.level", "info")?;

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 例如: MONSTOCKAGE_MOCK__SIMULATE_LATENCY=false
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let app_config: AppConfig = builder.build()?.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.api.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "API base URL cannot be empty".to_string(),
        ));
    }

    if config.api.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "API timeout cannot be 0".to_string(),
        ));
    }

    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    if config.api.use_mocks {
        tracing::info!(
            "API: mock data (simulate latency: {})",
            config.mock.simulate_latency
        );
    } else {
        tracing::info!("API: {}", config.api.base_url);
        tracing::info!("API Timeout: {}s", config.api.timeout_secs);
    }
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
