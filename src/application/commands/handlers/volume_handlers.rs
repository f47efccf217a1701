//! Volume Command Handlers

use std::sync::Arc;

use crate::application::commands::{UpdateVolumeStatus, UpdateVolumesStatus};
use crate::application::error::ApplicationError;
use crate::application::ports::MangaApiPort;
use crate::domain::manga::Manga;

/// UpdateVolumeStatus Handler
pub struct UpdateVolumeStatusHandler {
    api: Arc<dyn MangaApiPort>,
}

impl UpdateVolumeStatusHandler {
    pub fn new(api: Arc<dyn MangaApiPort>) -> Self {
        Self { api }
    }

    /// 返回服务端更新后的漫画
    pub async fn handle(&self, command: UpdateVolumeStatus) -> Result<Manga, ApplicationError> {
        let manga = self
            .api
            .update_volume_status(command.manga_id, command.volume_id, command.purchased)
            .await
            .map_err(|e| {
                tracing::error!(
                    manga_id = %command.manga_id,
                    volume_id = %command.volume_id,
                    error = %e,
                    "Failed to update volume status"
                );
                e
            })?;

        tracing::info!(
            manga_id = %command.manga_id,
            volume_id = %command.volume_id,
            purchased = command.purchased,
            "Volume status updated"
        );

        Ok(manga)
    }
}

/// UpdateVolumesStatus Handler
pub struct UpdateVolumesStatusHandler {
    api: Arc<dyn MangaApiPort>,
}

impl UpdateVolumesStatusHandler {
    pub fn new(api: Arc<dyn MangaApiPort>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, command: UpdateVolumesStatus) -> Result<Manga, ApplicationError> {
        if command.volume_ids.is_empty() {
            return Err(ApplicationError::validation("Aucun volume sélectionné"));
        }

        let manga = self
            .api
            .update_volumes_status(command.manga_id, &command.volume_ids, command.purchased)
            .await?;

        tracing::info!(
            manga_id = %command.manga_id,
            count = command.volume_ids.len(),
            purchased = command.purchased,
            "Volumes status updated"
        );

        Ok(manga)
    }
}
