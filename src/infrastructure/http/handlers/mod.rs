//! HTTP Handlers

mod manga;
mod ping;
mod volume;

pub use manga::*;
pub use ping::*;
pub use volume::*;
