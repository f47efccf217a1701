//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Manga Context: 漫画与卷
//! - Catalog Context: 列表检索与筛选

pub mod catalog;
pub mod manga;
