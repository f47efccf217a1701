//! Catalog Queries

use crate::domain::catalog::CatalogQuery;

/// 获取可用筛选项
#[derive(Debug, Clone)]
pub struct GetFilters;

/// 列表页：加载全部漫画与筛选项，并在本地执行检索
#[derive(Debug, Clone, Default)]
pub struct BrowseCatalog {
    pub query: CatalogQuery,
}
