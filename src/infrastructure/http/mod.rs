//! HTTP Layer - 本地开发服务
//!
//! 在 `/api` 下暴露与真实后端相同的 REST 接口，数据来自任意 MangaApiPort

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::HttpError;
pub use routes::create_routes;
pub use server::{build_router, HttpServer, ServerConfig};
pub use state::AppState;
