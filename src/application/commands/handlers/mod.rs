//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod manga_handlers;
mod volume_handlers;

pub use manga_handlers::*;
pub use volume_handlers::*;
