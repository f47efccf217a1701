//! HTTP Manga API - 调用真实后端
//!
//! 实现 MangaApiPort trait，所有请求发往 `{base_url}/mangas...`
//!
//! 错误映射：
//! - 超时 -> ApiError::Timeout
//! - 无法建立连接等传输错误 -> ApiError::Network
//! - 非 2xx -> ApiError::Server（优先使用响应体中的 message）
//! - 响应体无法解析 -> ApiError::InvalidResponse

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::application::ports::{ApiError, ApiOperation, MangaApiPort};
use crate::domain::catalog::FiltersResponse;
use crate::domain::manga::{Manga, MangaId, MangaPreview, VolumeId};
use crate::infrastructure::http::dto::{
    CreateMangaRequest, ErrorBody, UpdateVolumeStatusRequest, UpdateVolumesStatusRequest,
};

/// 详情接口需要带上的关联数据
const DETAIL_INCLUDE: &str = "volumes,auteur,editeurVF,editeurVO,genres,themes";

/// 路径段编码集合，保留字符与浏览器 encodeURIComponent 一致
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// HTTP 客户端配置
#[derive(Debug, Clone)]
pub struct HttpMangaApiConfig {
    /// API 基础 URL（以 `/api/` 结尾）
    pub base_url: String,
    /// 请求超时时间
    pub timeout: Duration,
}

impl Default for HttpMangaApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api/".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl HttpMangaApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP Manga API 客户端
pub struct HttpMangaApi {
    client: Client,
    config: HttpMangaApiConfig,
}

impl HttpMangaApi {
    pub fn new(config: HttpMangaApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        tracing::info!(
            base_url = %config.base_url,
            timeout_ms = config.timeout.as_millis() as u64,
            "HttpMangaApi initialized"
        );

        Ok(Self { client, config })
    }

    /// 拼接相对路径，兼容 base_url 末尾有无 `/`
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn manga_url(&self, id: MangaId) -> String {
        self.url(&format!("mangas/{}", id))
    }

    /// 发送请求并检查状态码
    async fn send(&self, operation: ApiOperation, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(operation = operation.as_str(), error = %e, "API request failed");
            map_transport_error(e)
        })?;

        let status = response.status();
        tracing::debug!(
            operation = operation.as_str(),
            url = %response.url(),
            status = status.as_u16(),
            "API response"
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            let err = ApiError::from_status(operation, status.as_u16(), message);
            tracing::warn!(
                operation = operation.as_str(),
                status = status.as_u16(),
                error = %err,
                "API returned error status"
            );
            return Err(err);
        }

        Ok(response)
    }

    /// 发送请求并解析 JSON 响应体
    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: ApiOperation,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(operation, request).await?;
        let bytes = response.bytes().await.map_err(map_transport_error)?;

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(operation = operation.as_str(), error = %e, "Failed to decode API response");
            ApiError::InvalidResponse(e.to_string())
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(e.to_string())
    }
}

/// 搜索词作为单个路径段编码
fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[async_trait]
impl MangaApiPort for HttpMangaApi {
    async fn list_mangas(&self) -> Result<Vec<Manga>, ApiError> {
        let request = self.client.get(self.url("mangas"));
        self.fetch(ApiOperation::ListMangas, request).await
    }

    async fn get_manga(&self, id: MangaId) -> Result<Manga, ApiError> {
        let request = self
            .client
            .get(self.manga_url(id))
            .query(&[("include", DETAIL_INCLUDE)]);
        self.fetch(ApiOperation::GetManga, request).await
    }

    async fn create_manga(&self, title: &str) -> Result<Manga, ApiError> {
        tracing::debug!(title = %title, "Creating manga");
        let request = self.client.post(self.url("mangas")).json(&CreateMangaRequest {
            name: title.to_string(),
        });
        self.fetch(ApiOperation::CreateManga, request).await
    }

    async fn delete_manga(&self, id: MangaId) -> Result<(), ApiError> {
        let request = self.client.delete(self.manga_url(id));
        self.send(ApiOperation::DeleteManga, request).await?;
        Ok(())
    }

    async fn get_filters(&self) -> Result<FiltersResponse, ApiError> {
        let request = self.client.get(self.url("mangas/filters"));
        self.fetch(ApiOperation::GetFilters, request).await
    }

    async fn latest_mangas(&self) -> Result<Vec<MangaPreview>, ApiError> {
        let request = self.client.get(self.url("mangas/three-last"));
        self.fetch(ApiOperation::LatestMangas, request).await
    }

    async fn search_mangas(&self, query: &str) -> Result<Vec<Manga>, ApiError> {
        let path = format!("mangas/search/{}", encode_segment(query));
        let request = self.client.get(self.url(&path));
        self.fetch(ApiOperation::SearchMangas, request).await
    }

    async fn update_volume_status(
        &self,
        manga_id: MangaId,
        volume_id: VolumeId,
        purchased: bool,
    ) -> Result<Manga, ApiError> {
        let url = format!("{}/volumes/{}/status", self.manga_url(manga_id), volume_id);
        let request = self
            .client
            .patch(url)
            .json(&UpdateVolumeStatusRequest { purchased });
        self.fetch(ApiOperation::UpdateVolumeStatus, request).await
    }

    async fn update_volumes_status(
        &self,
        manga_id: MangaId,
        volume_ids: &[VolumeId],
        purchased: bool,
    ) -> Result<Manga, ApiError> {
        let url = format!("{}/volumes", self.manga_url(manga_id));
        let request = self.client.patch(url).json(&UpdateVolumesStatusRequest {
            volume_ids: volume_ids.to_vec(),
            purchased,
        });
        self.fetch(ApiOperation::UpdateVolumesStatus, request).await
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.url("ping"))
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
