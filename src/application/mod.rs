//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（MangaApiPort、CatalogStorePort）
//! - commands: CQRS 命令及处理器（新增/删除漫画、修改卷购买状态）
//! - queries: CQRS 查询及处理器（列表、详情、筛选项、搜索、最新漫画、列表检索）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    CreateManga,
    DeleteManga,
    UpdateVolumeStatus,
    UpdateVolumesStatus,
    // Handlers
    handlers::{
        CreateMangaHandler, DeleteMangaHandler, UpdateVolumeStatusHandler,
        UpdateVolumesStatusHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    ApiError, ApiOperation, CatalogStorePort, MangaApiPort, StoreError, NETWORK_MESSAGE,
    TIMEOUT_MESSAGE,
};

pub use queries::{
    BrowseCatalog,
    GetFilters,
    GetLatestMangas,
    GetManga,
    ListMangas,
    SearchMangas,
    // Handlers
    handlers::{
        BrowseCatalogHandler, BrowseCatalogResponse, GetFiltersHandler, GetLatestMangasHandler,
        GetMangaHandler, ListMangasHandler, SearchMangasHandler,
    },
};
