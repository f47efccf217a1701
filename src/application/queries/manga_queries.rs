//! Manga Queries

use crate::domain::manga::MangaId;

/// 获取全部漫画
#[derive(Debug, Clone)]
pub struct ListMangas;

/// 获取漫画详情
#[derive(Debug, Clone)]
pub struct GetManga {
    pub manga_id: MangaId,
}

/// 服务端标题搜索
#[derive(Debug, Clone)]
pub struct SearchMangas {
    pub query: String,
}

/// 最近新增的三部漫画
#[derive(Debug, Clone)]
pub struct GetLatestMangas;
