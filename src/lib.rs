//! MonStockage - 漫画收藏管理
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Manga Context: 漫画、卷、作者/出版社/类型/主题引用
//! - Catalog Context: 列表检索（关键字、首字母、多类别筛选）
//!
//! 应用层 (application/):
//! - Ports: MangaApiPort（REST 契约）、CatalogStorePort（mock 数据存储）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HttpMangaApi（reqwest）、MockMangaApi（内存假数据 + 模拟延迟）
//! - Memory: InMemoryCatalog + 固定数据
//! - HTTP: 本地开发服务，暴露相同的 REST 接口
//!
//! 命令行 (cli/): 每个界面操作对应一个子命令

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
