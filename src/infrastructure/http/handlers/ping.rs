//! Ping Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListMangas;
use crate::infrastructure::http::dto::PingResponse;
use crate::infrastructure::http::error::HttpError;
use crate::infrastructure::http::state::AppState;

/// GET /api/ping
pub async fn ping(State(state): State<Arc<AppState>>) -> Result<Json<PingResponse>, HttpError> {
    let mangas = state.list_mangas_handler.handle(ListMangas).await?;
    Ok(Json(PingResponse {
        status: "ok".to_string(),
        mangas: mangas.len(),
    }))
}
