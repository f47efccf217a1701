//! Manga Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::MangaApiPort;
use crate::application::queries::{GetLatestMangas, GetManga, ListMangas, SearchMangas};
use crate::domain::manga::{Manga, MangaPreview};

/// ListMangas Handler
pub struct ListMangasHandler {
    api: Arc<dyn MangaApiPort>,
}

impl ListMangasHandler {
    pub fn new(api: Arc<dyn MangaApiPort>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, _query: ListMangas) -> Result<Vec<Manga>, ApplicationError> {
        Ok(self.api.list_mangas().await?)
    }
}

/// GetManga Handler
pub struct GetMangaHandler {
    api: Arc<dyn MangaApiPort>,
}

impl GetMangaHandler {
    pub fn new(api: Arc<dyn MangaApiPort>) -> Self {
        Self { api }
    }

    /// ID 为 0 时不发请求
    pub async fn handle(&self, query: GetManga) -> Result<Manga, ApplicationError> {
        if query.manga_id.value() == 0 {
            return Err(ApplicationError::validation("Identifiant de manga invalide"));
        }
        Ok(self.api.get_manga(query.manga_id).await?)
    }
}

/// SearchMangas Handler
pub struct SearchMangasHandler {
    api: Arc<dyn MangaApiPort>,
}

impl SearchMangasHandler {
    pub fn new(api: Arc<dyn MangaApiPort>) -> Self {
        Self { api }
    }

    /// 空关键字直接返回空结果
    pub async fn handle(&self, query: SearchMangas) -> Result<Vec<Manga>, ApplicationError> {
        let needle = query.query.trim();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.api.search_mangas(needle).await?)
    }
}

/// GetLatestMangas Handler
pub struct GetLatestMangasHandler {
    api: Arc<dyn MangaApiPort>,
}

impl GetLatestMangasHandler {
    pub fn new(api: Arc<dyn MangaApiPort>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, _query: GetLatestMangas) -> Result<Vec<MangaPreview>, ApplicationError> {
        Ok(self.api.latest_mangas().await?)
    }
}
