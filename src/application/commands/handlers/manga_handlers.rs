//! Manga Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateManga, DeleteManga};
use crate::application::error::ApplicationError;
use crate::application::ports::MangaApiPort;
use crate::domain::manga::{Manga, MangaError, MangaId};

// ============================================================================
// CreateManga
// ============================================================================

/// CreateManga Handler
pub struct CreateMangaHandler {
    api: Arc<dyn MangaApiPort>,
}

impl CreateMangaHandler {
    pub fn new(api: Arc<dyn MangaApiPort>) -> Self {
        Self { api }
    }

    /// 标题去掉首尾空白后提交；空标题不发请求
    pub async fn handle(&self, command: CreateManga) -> Result<Manga, ApplicationError> {
        let title = command.title.trim();
        if title.is_empty() {
            return Err(MangaError::EmptyTitle.into());
        }

        let manga = self.api.create_manga(title).await?;

        tracing::info!(
            manga_id = %manga.id,
            title = %manga.title,
            "Manga created"
        );

        Ok(manga)
    }
}

// ============================================================================
// DeleteManga
// ============================================================================

/// DeleteManga Handler
pub struct DeleteMangaHandler {
    api: Arc<dyn MangaApiPort>,
}

impl DeleteMangaHandler {
    pub fn new(api: Arc<dyn MangaApiPort>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, command: DeleteManga) -> Result<MangaId, ApplicationError> {
        self.api.delete_manga(command.manga_id).await?;

        tracing::info!(manga_id = %command.manga_id, "Manga deleted");

        Ok(command.manga_id)
    }
}
