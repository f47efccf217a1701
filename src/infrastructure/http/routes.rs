//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                                   GET    健康检查
//! - /api/mangas                                 GET    漫画列表
//! - /api/mangas                                 POST   新增漫画 `{name}`
//! - /api/mangas/filters                         GET    筛选项
//! - /api/mangas/three-last                      GET    最新三部
//! - /api/mangas/search/:query                   GET    按标题搜索
//! - /api/mangas/:id                             GET    漫画详情
//! - /api/mangas/:id                             DELETE 删除漫画
//! - /api/mangas/:id/volumes                     PATCH  批量修改购买状态
//! - /api/mangas/:id/volumes/:volume_id/status   PATCH  修改单卷购买状态

use axum::{
    routing::{get, patch},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/mangas", manga_routes())
}

/// Manga 路由
fn manga_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::list_mangas).post(handlers::create_manga))
        .route("/filters", get(handlers::get_filters))
        .route("/three-last", get(handlers::latest_mangas))
        .route("/search/:query", get(handlers::search_mangas))
        .route(
            "/:id",
            get(handlers::get_manga).delete(handlers::delete_manga),
        )
        .route("/:id/volumes", patch(handlers::update_volumes_status))
        .route(
            "/:id/volumes/:volume_id/status",
            patch(handlers::update_volume_status),
        )
}
