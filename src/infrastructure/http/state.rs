//! Application State
//!
//! 基于同一个 MangaApiPort 实现（真实后端或 mock）构建的全部
//! Command/Query Handlers，开发服务与命令行共用

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateMangaHandler, DeleteMangaHandler, UpdateVolumeStatusHandler, UpdateVolumesStatusHandler,
    // Query handlers
    BrowseCatalogHandler, GetFiltersHandler, GetLatestMangasHandler, GetMangaHandler,
    ListMangasHandler, SearchMangasHandler,
    // Ports
    MangaApiPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_manga_handler: CreateMangaHandler,
    pub delete_manga_handler: DeleteMangaHandler,
    pub update_volume_status_handler: UpdateVolumeStatusHandler,
    pub update_volumes_status_handler: UpdateVolumesStatusHandler,

    // ========== Query Handlers ==========
    pub list_mangas_handler: ListMangasHandler,
    pub get_manga_handler: GetMangaHandler,
    pub search_mangas_handler: SearchMangasHandler,
    pub latest_mangas_handler: GetLatestMangasHandler,
    pub get_filters_handler: GetFiltersHandler,
    pub browse_catalog_handler: BrowseCatalogHandler,
}

impl AppState {
    pub fn new(api: Arc<dyn MangaApiPort>) -> Self {
        Self {
            create_manga_handler: CreateMangaHandler::new(api.clone()),
            delete_manga_handler: DeleteMangaHandler::new(api.clone()),
            update_volume_status_handler: UpdateVolumeStatusHandler::new(api.clone()),
            update_volumes_status_handler: UpdateVolumesStatusHandler::new(api.clone()),

            list_mangas_handler: ListMangasHandler::new(api.clone()),
            get_manga_handler: GetMangaHandler::new(api.clone()),
            search_mangas_handler: SearchMangasHandler::new(api.clone()),
            latest_mangas_handler: GetLatestMangasHandler::new(api.clone()),
            get_filters_handler: GetFiltersHandler::new(api.clone()),
            browse_catalog_handler: BrowseCatalogHandler::new(api),
        }
    }
}
