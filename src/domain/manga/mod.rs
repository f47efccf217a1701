//! Manga Context - 漫画限界上下文
//!
//! 职责:
//! - 漫画聚合（元数据 + 关联引用 + 卷列表）
//! - 卷的购买状态

mod aggregate;
mod entities;
mod errors;
mod value_objects;

pub use aggregate::Manga;
pub use entities::{
    Author, Genre, MangaPreview, Publisher, Reference, Theme, Volume, VolumeSummary,
};
pub use errors::MangaError;
pub use value_objects::{MangaId, VolumeId};

#[cfg(test)]
pub(crate) use aggregate::tests::manga as sample_manga;
