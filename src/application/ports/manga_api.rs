//! Manga API Port - 漫画 REST API 抽象
//!
//! 客户端消费的接口契约，具体实现在 infrastructure/adapters 层：
//! - HttpMangaApi: 通过 HTTP 调用真实后端
//! - MockMangaApi: 内存假数据 + 模拟网络延迟

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::FiltersResponse;
use crate::domain::manga::{Manga, MangaId, MangaPreview, VolumeId};

/// 超时提示
pub const TIMEOUT_MESSAGE: &str = "La requête a pris trop de temps à répondre";

/// 无法连接提示
pub const NETWORK_MESSAGE: &str =
    "Impossible de se connecter au serveur. Vérifiez votre connexion.";

/// API 操作，用于选择服务端未给出 message 时的默认提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    ListMangas,
    GetManga,
    CreateManga,
    DeleteManga,
    GetFilters,
    LatestMangas,
    SearchMangas,
    UpdateVolumeStatus,
    UpdateVolumesStatus,
}

impl ApiOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiOperation::ListMangas => "list_mangas",
            ApiOperation::GetManga => "get_manga",
            ApiOperation::CreateManga => "create_manga",
            ApiOperation::DeleteManga => "delete_manga",
            ApiOperation::GetFilters => "get_filters",
            ApiOperation::LatestMangas => "latest_mangas",
            ApiOperation::SearchMangas => "search_mangas",
            ApiOperation::UpdateVolumeStatus => "update_volume_status",
            ApiOperation::UpdateVolumesStatus => "update_volumes_status",
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            ApiOperation::ListMangas => "Erreur lors de la récupération des mangas",
            ApiOperation::GetManga => "Manga non trouvé",
            ApiOperation::CreateManga => "Erreur lors de la création du manga",
            ApiOperation::DeleteManga => "Erreur lors de la suppression du manga",
            ApiOperation::GetFilters => "Erreur lors de la récupération des filtres",
            ApiOperation::LatestMangas => "Erreur lors de la récupération des derniers mangas",
            ApiOperation::SearchMangas => "Erreur lors de la recherche des mangas",
            ApiOperation::UpdateVolumeStatus => "Erreur lors de la mise à jour du volume",
            ApiOperation::UpdateVolumesStatus => "Erreur lors de la mise à jour des volumes",
        }
    }
}

/// API 错误
///
/// 只区分两类：网络层失败（固定提示）与服务端返回的错误（透传 message）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,

    /// 携带底层错误详情，仅用于日志
    #[error("{}", NETWORK_MESSAGE)]
    Network(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Réponse invalide du serveur: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::server(404, message)
    }

    /// 非 2xx 响应：优先使用服务端 message，否则使用操作默认提示
    pub fn from_status(operation: ApiOperation, status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| operation.fallback_message().to_string());
        Self::server(status, message)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Timeout | ApiError::Network(_))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Manga API Port
///
/// 每个方法对应一个 REST 端点，请求只会被 resolve 或 reject 一次，不做重试
#[async_trait]
pub trait MangaApiPort: Send + Sync {
    /// `GET /mangas`
    async fn list_mangas(&self) -> Result<Vec<Manga>, ApiError>;

    /// `GET /mangas/:id`（带全部关联数据）
    async fn get_manga(&self, id: MangaId) -> Result<Manga, ApiError>;

    /// `POST /mangas`，后端根据标题抓取元数据
    async fn create_manga(&self, title: &str) -> Result<Manga, ApiError>;

    /// `DELETE /mangas/:id`
    async fn delete_manga(&self, id: MangaId) -> Result<(), ApiError>;

    /// `GET /mangas/filters`
    async fn get_filters(&self) -> Result<FiltersResponse, ApiError>;

    /// `GET /mangas/three-last`
    async fn latest_mangas(&self) -> Result<Vec<MangaPreview>, ApiError>;

    /// `GET /mangas/search/:query`
    async fn search_mangas(&self, query: &str) -> Result<Vec<Manga>, ApiError>;

    /// `PATCH /mangas/:id/volumes/:volumeId/status`
    async fn update_volume_status(
        &self,
        manga_id: MangaId,
        volume_id: VolumeId,
        purchased: bool,
    ) -> Result<Manga, ApiError>;

    /// `PATCH /mangas/:id/volumes`
    async fn update_volumes_status(
        &self,
        manga_id: MangaId,
        volume_ids: &[VolumeId],
        purchased: bool,
    ) -> Result<Manga, ApiError>;

    /// 检查 API 是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
