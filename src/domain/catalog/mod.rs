//! Catalog Context - 目录检索上下文
//!
//! 职责:
//! - 分类筛选项（类型、题材、作者、出版社…）
//! - 列表的搜索 / 首字母 / 分类组合检索

mod filters;
mod query;

pub use filters::{FilterCategory, FilterItem, FilterKind, FilterSelection, FiltersResponse};
pub use query::{alphabet, CatalogQuery, LetterFilter};
