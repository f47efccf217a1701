//! Manga Commands

use crate::domain::manga::MangaId;

/// 新增漫画命令（后端按标题抓取元数据）
#[derive(Debug, Clone)]
pub struct CreateManga {
    pub title: String,
}

/// 删除漫画命令
#[derive(Debug, Clone)]
pub struct DeleteManga {
    pub manga_id: MangaId,
}
