//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod catalog_handlers;
mod manga_handlers;

pub use catalog_handlers::*;
pub use manga_handlers::*;
