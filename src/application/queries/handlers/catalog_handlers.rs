//! Catalog Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::MangaApiPort;
use crate::application::queries::{BrowseCatalog, GetFilters};
use crate::domain::catalog::{FilterItem, FiltersResponse};
use crate::domain::manga::Manga;

/// GetFilters Handler
pub struct GetFiltersHandler {
    api: Arc<dyn MangaApiPort>,
}

impl GetFiltersHandler {
    pub fn new(api: Arc<dyn MangaApiPort>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, _query: GetFilters) -> Result<FiltersResponse, ApplicationError> {
        Ok(self.api.get_filters().await?)
    }
}

/// 列表页结果
#[derive(Debug, Clone)]
pub struct BrowseCatalogResponse {
    /// 命中的漫画（保持 API 返回顺序）
    pub mangas: Vec<Manga>,
    /// 可选的筛选项
    pub filters: Vec<FilterItem>,
    /// 检索前的漫画总数
    pub total: usize,
}

/// BrowseCatalog Handler
///
/// 漫画列表与筛选项并行加载；筛选项加载失败不影响列表展示
pub struct BrowseCatalogHandler {
    api: Arc<dyn MangaApiPort>,
}

impl BrowseCatalogHandler {
    pub fn new(api: Arc<dyn MangaApiPort>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, query: BrowseCatalog) -> Result<BrowseCatalogResponse, ApplicationError> {
        let (mangas, filters) = tokio::join!(self.api.list_mangas(), self.api.get_filters());

        let mangas = mangas?;
        let filters = match filters {
            Ok(filters) => filters.into_items(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load filters, continuing without them");
                Vec::new()
            }
        };

        let total = mangas.len();
        let matched = query.query.apply_owned(&mangas);

        tracing::debug!(
            total = total,
            matched = matched.len(),
            search = ?query.query.search,
            letter = ?query.query.letter,
            filters = query.query.filters.len(),
            "Catalog filtered"
        );

        Ok(BrowseCatalogResponse {
            mangas: matched,
            filters,
            total,
        })
    }
}
