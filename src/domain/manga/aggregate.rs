//! Manga Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::entities::null_as_default;
use super::{
    Author, Genre, MangaError, MangaId, MangaPreview, Publisher, Theme, Volume, VolumeId,
    VolumeSummary,
};

/// Manga 聚合根
///
/// 字段与 API 的 JSON 结构一一对应；缺失或为 null 的字段按空值处理。
///
/// 不变量:
/// - `volumes` 中的 `VolumeId` 在本漫画内唯一
/// - 只有卷的购买状态会在客户端被修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manga {
    pub id: MangaId,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(rename = "titreOriginal", default, deserialize_with = "null_as_default")]
    pub original_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(rename = "origine", default, deserialize_with = "null_as_default")]
    pub origin: String,
    #[serde(rename = "anneeVF", default, deserialize_with = "null_as_default")]
    pub french_release_year: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(rename = "nbVolumesVO", default, deserialize_with = "null_as_default")]
    pub original_volume_count: String,
    #[serde(rename = "nbVolumesVF", default, deserialize_with = "null_as_default")]
    pub french_volume_count: String,
    #[serde(rename = "prix", default, deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synopsis: String,
    #[serde(rename = "lastPublishedVolumeId", default)]
    pub last_published_volume_id: Option<VolumeId>,
    #[serde(rename = "comingSoonVolumeId", default)]
    pub coming_soon_volume_id: Option<VolumeId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub finished: bool,
    #[serde(rename = "Auteur", default)]
    pub author: Option<Author>,
    #[serde(rename = "editeurVO", default)]
    pub original_publisher: Option<Publisher>,
    #[serde(rename = "editeurVF", default)]
    pub french_publisher: Option<Publisher>,
    #[serde(rename = "Genres", default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(rename = "Themes", default, deserialize_with = "null_as_default")]
    pub themes: Vec<Theme>,
    #[serde(rename = "Volumes", default, deserialize_with = "null_as_default")]
    pub volumes: Vec<Volume>,
    #[serde(
        rename = "lastPublishedVolume",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_published_volume: Option<VolumeSummary>,
    #[serde(
        rename = "comingSoonVolume",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub coming_soon_volume: Option<VolumeSummary>,
}

impl Manga {
    /// 作者名（没有作者时为 None）
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.name.as_str())
    }

    pub fn volume(&self, id: VolumeId) -> Option<&Volume> {
        self.volumes.iter().find(|v| v.id == id)
    }

    /// 已购买的卷数
    pub fn purchased_count(&self) -> usize {
        self.volumes.iter().filter(|v| v.purchased).count()
    }

    /// 购买进度 `(已购买, 总卷数)`
    pub fn purchase_progress(&self) -> (usize, usize) {
        (self.purchased_count(), self.volumes.len())
    }

    /// 修改单卷购买状态
    pub fn set_volume_purchased(
        &mut self,
        volume_id: VolumeId,
        purchased: bool,
    ) -> Result<(), MangaError> {
        let volume = self
            .volumes
            .iter_mut()
            .find(|v| v.id == volume_id)
            .ok_or(MangaError::VolumeNotFound(volume_id))?;
        volume.purchased = purchased;
        Ok(())
    }

    /// 批量修改购买状态，忽略未知的卷，返回实际修改的卷数
    pub fn set_volumes_purchased(&mut self, volume_ids: &[VolumeId], purchased: bool) -> usize {
        let mut updated = 0;
        for volume in self.volumes.iter_mut() {
            if volume_ids.contains(&volume.id) {
                volume.purchased = purchased;
                updated += 1;
            }
        }
        updated
    }

    pub fn preview(&self) -> MangaPreview {
        MangaPreview {
            id: self.id,
            title: self.title.clone(),
            image: self.image.clone(),
        }
    }
}
