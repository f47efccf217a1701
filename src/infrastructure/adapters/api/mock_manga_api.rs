//! Mock Manga API - 离线开发用的 API 实现
//!
//! 数据来自内存目录，每个操作前模拟一次网络延迟，不发出任何网络请求

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ApiError, ApiOperation, CatalogStorePort, MangaApiPort, StoreError};
use crate::domain::catalog::{FilterCategory, FiltersResponse};
use crate::domain::manga::{Manga, MangaId, MangaPreview, Reference, VolumeId};
use crate::infrastructure::memory::{fixtures, InMemoryCatalog};

/// `three-last` 返回的数量
const LATEST_COUNT: usize = 3;

/// Mock API 配置
#[derive(Debug, Clone)]
pub struct MockMangaApiConfig {
    /// 是否模拟网络延迟
    pub simulate_latency: bool,
}

impl Default for MockMangaApiConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
        }
    }
}

/// 各操作的模拟延迟
fn latency(operation: ApiOperation) -> Duration {
    let ms = match operation {
        ApiOperation::ListMangas => 500,
        ApiOperation::GetManga => 300,
        ApiOperation::CreateManga => 800,
        ApiOperation::DeleteManga => 400,
        ApiOperation::SearchMangas => 300,
        ApiOperation::UpdateVolumeStatus => 300,
        ApiOperation::UpdateVolumesStatus => 500,
        ApiOperation::GetFilters => 300,
        ApiOperation::LatestMangas => 300,
    };
    Duration::from_millis(ms)
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::not_found(err.to_string())
    }
}

/// Mock Manga API
pub struct MockMangaApi {
    store: Arc<dyn CatalogStorePort>,
    config: MockMangaApiConfig,
}

impl MockMangaApi {
    pub fn new(store: Arc<dyn CatalogStorePort>, config: MockMangaApiConfig) -> Self {
        tracing::info!(
            mangas = store.len(),
            simulate_latency = config.simulate_latency,
            "MockMangaApi initialized"
        );
        Self { store, config }
    }

    /// 使用内置固定数据
    pub fn with_fixtures(config: MockMangaApiConfig) -> Self {
        Self::new(Arc::new(InMemoryCatalog::with_fixtures()), config)
    }

    /// 固定数据 + 无延迟（测试用）
    pub fn without_latency() -> Self {
        Self::with_fixtures(MockMangaApiConfig {
            simulate_latency: false,
        })
    }

    async fn simulate(&self, operation: ApiOperation) {
        tracing::debug!(operation = operation.as_str(), "MockMangaApi: serving request");
        if self.config.simulate_latency {
            tokio::time::sleep(latency(operation)).await;
        }
    }
}

/// 按 ID 去重排序
fn categories<'a>(references: impl Iterator<Item = &'a Reference>) -> Vec<FilterCategory> {
    references
        .map(|r| (r.id, r))
        .collect::<BTreeMap<_, _>>()
        .into_values()
        .map(fixtures::to_category)
        .collect()
}

#[async_trait]
impl MangaApiPort for MockMangaApi {
    async fn list_mangas(&self) -> Result<Vec<Manga>, ApiError> {
        self.simulate(ApiOperation::ListMangas).await;
        Ok(self.store.list())
    }

    async fn get_manga(&self, id: MangaId) -> Result<Manga, ApiError> {
        self.simulate(ApiOperation::GetManga).await;
        Ok(self.store.get(id)?)
    }

    async fn create_manga(&self, title: &str) -> Result<Manga, ApiError> {
        self.simulate(ApiOperation::CreateManga).await;
        let today = chrono::Local::now().date_naive();
        Ok(self.store.insert_new(fixtures::draft_manga(title, today)))
    }

    async fn delete_manga(&self, id: MangaId) -> Result<(), ApiError> {
        self.simulate(ApiOperation::DeleteManga).await;
        self.store.remove(id)?;
        Ok(())
    }

    async fn get_filters(&self) -> Result<FiltersResponse, ApiError> {
        self.simulate(ApiOperation::GetFilters).await;
        let mangas = self.store.list();

        Ok(FiltersResponse {
            genres: categories(mangas.iter().flat_map(|m| m.genres.iter())),
            themes: categories(mangas.iter().flat_map(|m| m.themes.iter())),
            authors: categories(mangas.iter().filter_map(|m| m.author.as_ref())),
            publishers: categories(mangas.iter().flat_map(|m| {
                m.french_publisher
                    .iter()
                    .chain(m.original_publisher.iter())
            })),
            formats: Vec::new(),
            languages: Vec::new(),
        })
    }

    async fn latest_mangas(&self) -> Result<Vec<MangaPreview>, ApiError> {
        self.simulate(ApiOperation::LatestMangas).await;
        Ok(self
            .store
            .list()
            .iter()
            .rev()
            .take(LATEST_COUNT)
            .map(Manga::preview)
            .collect())
    }

    async fn search_mangas(&self, query: &str) -> Result<Vec<Manga>, ApiError> {
        self.simulate(ApiOperation::SearchMangas).await;
        let needle = query.to_lowercase();
        Ok(self
            .store
            .list()
            .into_iter()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .collect())
    }

    async fn update_volume_status(
        &self,
        manga_id: MangaId,
        volume_id: VolumeId,
        purchased: bool,
    ) -> Result<Manga, ApiError> {
        self.simulate(ApiOperation::UpdateVolumeStatus).await;
        Ok(self
            .store
            .set_volume_purchased(manga_id, volume_id, purchased)?)
    }

    async fn update_volumes_status(
        &self,
        manga_id: MangaId,
        volume_ids: &[VolumeId],
        purchased: bool,
    ) -> Result<Manga, ApiError> {
        self.simulate(ApiOperation::UpdateVolumesStatus).await;
        Ok(self
            .store
            .set_volumes_purchased(manga_id, volume_ids, purchased)?)
    }
}
