//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod catalog_store;
mod manga_api;

pub use catalog_store::{CatalogStorePort, StoreError};
pub use manga_api::{
    ApiError, ApiOperation, MangaApiPort, NETWORK_MESSAGE, TIMEOUT_MESSAGE,
};
