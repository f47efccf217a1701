//! In-Memory Catalog Store Implementation

use dashmap::DashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use super::fixtures;
use crate::application::ports::{CatalogStorePort, StoreError};
use crate::domain::manga::{Manga, MangaError, MangaId, VolumeId};

/// 内存漫画目录
///
/// ID 单调递增，删除后不会复用
pub struct InMemoryCatalog {
    mangas: DashMap<MangaId, Manga>,
    next_id: AtomicU32,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            mangas: DashMap::new(),
            next_id: AtomicU32::new(1),
        }
    }

    /// 使用给定数据初始化
    pub fn with_mangas(mangas: impl IntoIterator<Item = Manga>) -> Self {
        let catalog = Self::new();
        let mut max_id = 0;
        for manga in mangas {
            max_id = max_id.max(manga.id.value());
            catalog.mangas.insert(manga.id, manga);
        }
        catalog.next_id.store(max_id + 1, Ordering::SeqCst);
        catalog
    }

    /// 使用内置固定数据初始化
    pub fn with_fixtures() -> Self {
        Self::with_mangas(fixtures::mangas())
    }

    fn modify<F>(&self, manga_id: MangaId, f: F) -> Result<Manga, StoreError>
    where
        F: FnOnce(&mut Manga) -> Result<(), StoreError>,
    {
        let mut manga = self
            .mangas
            .get_mut(&manga_id)
            .ok_or(StoreError::MangaNotFound(manga_id))?;
        f(manga.value_mut())?;
        Ok(manga.value().clone())
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStorePort for InMemoryCatalog {
    fn list(&self) -> Vec<Manga> {
        let mut mangas: Vec<Manga> = self.mangas.iter().map(|e| e.value().clone()).collect();
        mangas.sort_by_key(|m| m.id);
        mangas
    }

    fn get(&self, id: MangaId) -> Result<Manga, StoreError> {
        self.mangas
            .get(&id)
            .map(|m| m.clone())
            .ok_or(StoreError::MangaNotFound(id))
    }

    fn insert_new(&self, mut draft: Manga) -> Manga {
        let id = MangaId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        draft.id = id;
        self.mangas.insert(id, draft.clone());
        tracing::info!(manga_id = %id, title = %draft.title, "Manga stored");
        draft
    }

    fn remove(&self, id: MangaId) -> Result<Manga, StoreError> {
        self.mangas
            .remove(&id)
            .map(|(_, manga)| {
                tracing::info!(manga_id = %id, title = %manga.title, "Manga removed");
                manga
            })
            .ok_or(StoreError::MangaNotFound(id))
    }

    fn set_volume_purchased(
        &self,
        manga_id: MangaId,
        volume_id: VolumeId,
        purchased: bool,
    ) -> Result<Manga, StoreError> {
        self.modify(manga_id, |manga| {
            manga
                .set_volume_purchased(volume_id, purchased)
                .map_err(|e| match e {
                    MangaError::VolumeNotFound(id) => StoreError::VolumeNotFound(id),
                    _ => StoreError::MangaNotFound(manga_id),
                })
        })
    }

    fn set_volumes_purchased(
        &self,
        manga_id: MangaId,
        volume_ids: &[VolumeId],
        purchased: bool,
    ) -> Result<Manga, StoreError> {
        self.modify(manga_id, |manga| {
            let updated = manga.set_volumes_purchased(volume_ids, purchased);
            tracing::debug!(
                manga_id = %manga_id,
                requested = volume_ids.len(),
                updated = updated,
                "Volumes status changed"
            );
            Ok(())
        })
    }

    fn len(&self) -> usize {
        self.mangas.len()
    }
}
