//! Manga Handlers

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{
    CreateManga, DeleteManga, GetFilters, GetLatestMangas, GetManga, ListMangas, SearchMangas,
};
use crate::domain::catalog::FiltersResponse;
use crate::domain::manga::{Manga, MangaId, MangaPreview};
use crate::infrastructure::http::dto::CreateMangaRequest;
use crate::infrastructure::http::error::HttpError;
use crate::infrastructure::http::state::AppState;

/// GET /api/mangas
pub async fn list_mangas(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Manga>>, HttpError> {
    let mangas = state.list_mangas_handler.handle(ListMangas).await?;
    Ok(Json(mangas))
}

/// GET /api/mangas/:id
///
/// `include` 参数被忽略，总是返回完整数据
pub async fn get_manga(
    State(state): State<Arc<AppState>>,
    path: Result<Path<MangaId>, PathRejection>,
) -> Result<Json<Manga>, HttpError> {
    let Path(manga_id) = path?;
    let manga = state.get_manga_handler.handle(GetManga { manga_id }).await?;
    Ok(Json(manga))
}

/// POST /api/mangas
pub async fn create_manga(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateMangaRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Manga>), HttpError> {
    let Json(request) = body?;
    let manga = state
        .create_manga_handler
        .handle(CreateManga {
            title: request.name,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(manga)))
}

/// DELETE /api/mangas/:id
pub async fn delete_manga(
    State(state): State<Arc<AppState>>,
    path: Result<Path<MangaId>, PathRejection>,
) -> Result<StatusCode, HttpError> {
    let Path(manga_id) = path?;
    state
        .delete_manga_handler
        .handle(DeleteManga { manga_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/mangas/filters
pub async fn get_filters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FiltersResponse>, HttpError> {
    let filters = state.get_filters_handler.handle(GetFilters).await?;
    Ok(Json(filters))
}

/// GET /api/mangas/three-last
pub async fn latest_mangas(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MangaPreview>>, HttpError> {
    let latest = state.latest_mangas_handler.handle(GetLatestMangas).await?;
    Ok(Json(latest))
}

/// GET /api/mangas/search/:query
pub async fn search_mangas(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Manga>>, HttpError> {
    let Path(query) = path?;
    let mangas = state
        .search_mangas_handler
        .handle(SearchMangas { query })
        .await?;
    Ok(Json(mangas))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use axum::Router;
    use serde_json::Value;
    use tower::util::ServiceExt;

    use super::*;
    use crate::infrastructure::adapters::api::MockMangaApi;
    use crate::infrastructure::http::create_routes;

    fn app() -> Router {
        let state = Arc::new(AppState::new(Arc::new(MockMangaApi::without_latency())));
        create_routes().with_state(state)
    }

    async fn call(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_list_mangas_uses_wire_names() {
        let (status, body) = call(app(), Method::GET, "/api/mangas", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0]["titre"], "One Piece");
        assert_eq!(body[0]["Auteur"]["nom"], "Eiichiro Oda");
    }

    #[tokio::test]
    async fn test_get_unknown_manga_is_404_with_message() {
        let (status, body) = call(app(), Method::GET, "/api/mangas/42?include=volumes", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["message"].as_str().unwrap().starts_with("Manga non trouvé"));
    }

    #[tokio::test]
    async fn test_invalid_id_is_bad_request() {
        let (status, body) = call(app(), Method::GET, "/api/mangas/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_create_then_delete() {
        let app = app();
        let (status, body) = call(
            app.clone(),
            Method::POST,
            "/api/mangas",
            Some(serde_json::json!({"name": "Bleach"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 4);
        assert_eq!(body["titre"], "Bleach");

        let (status, _) = call(app.clone(), Method::DELETE, "/api/mangas/4", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = call(app, Method::DELETE, "/api/mangas/4", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_blank_title_is_rejected() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/api/mangas",
            Some(serde_json::json!({"name": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Veuillez entrer un titre");
    }

    #[tokio::test]
    async fn test_static_routes_win_over_id() {
        let (status, body) = call(app(), Method::GET, "/api/mangas/filters", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["Genre"].is_array());
        assert_eq!(body["Format"], serde_json::json!([]));

        let (status, body) = call(app(), Method::GET, "/api/mangas/three-last", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["id"], 3);
    }

    #[tokio::test]
    async fn test_search_invalid_utf8_is_json_error() {
        let (status, body) = call(app(), Method::GET, "/api/mangas/search/%FF", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_search_decodes_path() {
        let (status, body) = call(app(), Method::GET, "/api/mangas/search/death%20note", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], 3);
    }
}
