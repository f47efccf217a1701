//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 后端 API 配置
    #[serde(default)]
    pub api: ApiConfig,

    /// Mock 数据层配置
    #[serde(default)]
    pub mock: MockConfig,

    /// 开发服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 后端 API 配置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// 基础 URL，以 `/api/` 结尾
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// 使用内存假数据代替真实后端
    #[serde(default)]
    pub use_mocks: bool,
}

fn default_base_url() -> String {
    "http://localhost:3000/api/".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            use_mocks: false,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Mock 数据层配置
#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    /// 是否模拟网络延迟
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,
}

fn default_simulate_latency() -> bool {
    true
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            simulate_latency: default_simulate_latency(),
        }
    }
}

/// 开发服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3000/api/");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert!(!config.api.use_mocks);
        assert!(config.mock.simulate_latency);
        assert_eq!(config.server.addr(), "0.0.0.0:3000");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_value(serde_json::json!({"api": {"use_mocks": true}})).unwrap();
        assert!(config.api.use_mocks);
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.server.port, 3000);
    }
}
