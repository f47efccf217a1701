//! Data Transfer Objects - REST API 请求/响应体
//!
//! HTTP 客户端与本地开发服务共用同一份线上格式

use serde::{Deserialize, Serialize};

use crate::domain::manga::VolumeId;

/// 错误响应 `{ "message": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// `POST /mangas`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMangaRequest {
    pub name: String,
}

/// `PATCH /mangas/:id/volumes/:volumeId/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVolumeStatusRequest {
    #[serde(rename = "achete")]
    pub purchased: bool,
}

/// `PATCH /mangas/:id/volumes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVolumesStatusRequest {
    #[serde(rename = "volumeIds")]
    pub volume_ids: Vec<VolumeId>,
    #[serde(rename = "achete")]
    pub purchased: bool,
}

/// `GET /ping`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: String,
    pub mangas: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_request_wire_format() {
        let body = UpdateVolumesStatusRequest {
            volume_ids: vec![VolumeId::new(1), VolumeId::new(2)],
            purchased: true,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"volumeIds": [1, 2], "achete": true}));
    }

    #[test]
    fn test_error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert!(body.message.is_none());
    }
}
