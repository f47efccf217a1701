//! Catalog Store Port - 漫画目录存储
//!
//! Mock API 背后的数据源，具体实现在 infrastructure/memory 层

use thiserror::Error;

use crate::domain::manga::{Manga, MangaId, VolumeId};

/// Catalog Store 错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Manga non trouvé")]
    MangaNotFound(MangaId),

    #[error("Volume non trouvé")]
    VolumeNotFound(VolumeId),
}

/// Catalog Store Port
pub trait CatalogStorePort: Send + Sync {
    /// 全部漫画，按 ID 升序
    fn list(&self) -> Vec<Manga>;

    fn get(&self, id: MangaId) -> Result<Manga, StoreError>;

    /// 分配新 ID 并保存（忽略 draft 自带的 ID）
    fn insert_new(&self, draft: Manga) -> Manga;

    fn remove(&self, id: MangaId) -> Result<Manga, StoreError>;

    /// 修改单卷购买状态，返回修改后的漫画
    fn set_volume_purchased(
        &self,
        manga_id: MangaId,
        volume_id: VolumeId,
        purchased: bool,
    ) -> Result<Manga, StoreError>;

    /// 批量修改购买状态，未知卷被忽略
    fn set_volumes_purchased(
        &self,
        manga_id: MangaId,
        volume_ids: &[VolumeId],
        purchased: bool,
    ) -> Result<Manga, StoreError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
