//! Memory Layer - In-Memory State Management
//!
//! 实现 CatalogStore，为 Mock API 和本地开发服务提供内存数据

mod catalog;
pub mod fixtures;

pub use catalog::InMemoryCatalog;
