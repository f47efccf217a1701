//! Volume Handlers

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::{UpdateVolumeStatus, UpdateVolumesStatus};
use crate::domain::manga::{Manga, MangaId, VolumeId};
use crate::infrastructure::http::dto::{UpdateVolumeStatusRequest, UpdateVolumesStatusRequest};
use crate::infrastructure::http::error::HttpError;
use crate::infrastructure::http::state::AppState;

/// PATCH /api/mangas/:id/volumes/:volume_id/status
pub async fn update_volume_status(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(MangaId, VolumeId)>, PathRejection>,
    body: Result<Json<UpdateVolumeStatusRequest>, JsonRejection>,
) -> Result<Json<Manga>, HttpError> {
    let Path((manga_id, volume_id)) = path?;
    let Json(request) = body?;
    let manga = state
        .update_volume_status_handler
        .handle(UpdateVolumeStatus {
            manga_id,
            volume_id,
            purchased: request.purchased,
        })
        .await?;
    Ok(Json(manga))
}

/// PATCH /api/mangas/:id/volumes
pub async fn update_volumes_status(
    State(state): State<Arc<AppState>>,
    path: Result<Path<MangaId>, PathRejection>,
    body: Result<Json<UpdateVolumesStatusRequest>, JsonRejection>,
) -> Result<Json<Manga>, HttpError> {
    let Path(manga_id) = path?;
    let Json(request) = body?;
    let manga = state
        .update_volumes_status_handler
        .handle(UpdateVolumesStatus {
            manga_id,
            volume_ids: request.volume_ids,
            purchased: request.purchased,
        })
        .await?;
    Ok(Json(manga))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use super::*;
    use crate::infrastructure::adapters::api::MockMangaApi;
    use crate::infrastructure::http::create_routes;

    async fn patch(uri: &str, body: Value) -> (StatusCode, Value) {
        let state = Arc::new(AppState::new(Arc::new(MockMangaApi::without_latency())));
        let request = Request::builder()
            .method(Method::PATCH)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = create_routes().with_state(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn purchased(manga: &Value) -> usize {
        manga["Volumes"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|v| v["achete"] == true)
            .count()
    }

    #[tokio::test]
    async fn test_single_volume_status() {
        let (status, body) = patch("/api/mangas/1/volumes/1/status", json!({"achete": false})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Volumes"][0]["achete"], false);
        assert_eq!(purchased(&body), 49);
    }

    #[tokio::test]
    async fn test_unknown_volume_is_404() {
        let (status, body) = patch("/api/mangas/1/volumes/999/status", json!({"achete": true})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Volume non trouvé");
    }

    #[tokio::test]
    async fn test_bulk_ignores_unknown_ids() {
        let (status, body) = patch(
            "/api/mangas/2/volumes",
            json!({"volumeIds": [31, 32, 999], "achete": true}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(purchased(&body), 32);
    }

    #[tokio::test]
    async fn test_bulk_without_ids_is_bad_request() {
        let (status, body) = patch("/api/mangas/2/volumes", json!({"volumeIds": [], "achete": true})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Aucun volume sélectionné");
    }

    #[tokio::test]
    async fn test_missing_body_field_is_bad_request() {
        let (status, _) = patch("/api/mangas/2/volumes", json!({"achete": true})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
