//! Manga Context - Errors

use thiserror::Error;

use super::VolumeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MangaError {
    #[error("Volume non trouvé: {0}")]
    VolumeNotFound(VolumeId),

    #[error("Veuillez entrer un titre")]
    EmptyTitle,
}
