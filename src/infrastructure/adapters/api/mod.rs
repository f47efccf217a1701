//! Manga API Adapter - HTTP 客户端与 Mock 实现

mod http_manga_api;
mod mock_manga_api;

pub use http_manga_api::{HttpMangaApi, HttpMangaApiConfig};
pub use mock_manga_api::{MockMangaApi, MockMangaApiConfig};
