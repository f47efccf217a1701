//! Manga Context - Entities

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::{MangaId, VolumeId};

/// `null` 与缺失字段一样取默认值
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 引用实体：作者、出版社、类型、题材共用 `{ id, nom }` 结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub id: u32,
    #[serde(rename = "nom")]
    pub name: String,
}

impl Reference {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

pub type Author = Reference;
pub type Publisher = Reference;
pub type Genre = Reference;
pub type Theme = Reference;

/// 单卷
///
/// `purchased` 是唯一会被修改的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub id: VolumeId,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(rename = "dateParution")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(rename = "achete", default, deserialize_with = "null_as_default")]
    pub purchased: bool,
}

impl Volume {
    /// 解析出版日期，兼容 `YYYY-MM-DD` 和完整 RFC 3339 时间戳
    pub fn release_day(&self) -> Option<NaiveDate> {
        let raw = self.release_date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
    }
}

/// 卷摘要（最新卷 / 即将出版卷）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeSummary {
    pub id: VolumeId,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(rename = "dateParution")]
    pub release_date: String,
    #[serde(default)]
    pub url: String,
}

impl From<&Volume> for VolumeSummary {
    fn from(volume: &Volume) -> Self {
        Self {
            id: volume.id,
            number: volume.number.clone(),
            title: volume.title.clone(),
            release_date: volume.release_date.clone(),
            url: volume.url.clone(),
        }
    }
}

/// 首页轮播使用的漫画预览
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaPreview {
    pub id: MangaId,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_wire_format() {
        let json = r#"{
            "id": 3,
            "numero": "3",
            "titre": "Volume 3",
            "dateParution": "2000-01-03",
            "image": "https://example.com/3.jpg",
            "url": "https://example.com/volume-3",
            "achete": true
        }"#;

        let volume: Volume = serde_json::from_str(json).unwrap();
        assert_eq!(volume.id, VolumeId::new(3));
        assert_eq!(volume.title, "Volume 3");
        assert!(volume.purchased);
        assert_eq!(
            volume.release_day(),
            NaiveDate::from_ymd_opt(2000, 1, 3)
        );
    }

    #[test]
    fn test_volume_missing_optional_fields() {
        let json = r#"{"id": 1, "numero": "1", "titre": "Tome 1", "dateParution": "2024-05-01T00:00:00.000Z"}"#;
        let volume: Volume = serde_json::from_str(json).unwrap();
        assert!(!volume.purchased);
        assert!(volume.url.is_empty());
        assert_eq!(volume.release_day(), NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn test_volume_null_fields_default() {
        let json = r#"{"id": 2, "numero": "2", "titre": "Tome 2", "dateParution": "2024-06-01", "image": null, "url": null, "achete": null}"#;
        let volume: Volume = serde_json::from_str(json).unwrap();
        assert!(volume.image.is_empty());
        assert!(volume.url.is_empty());
        assert!(!volume.purchased);
    }

    #[test]
    fn test_preview_ignores_extra_fields() {
        let json = r#"{"id": 9, "titre": "Blame!", "image": "x.jpg", "synopsis": "..."}"#;
        let preview: MangaPreview = serde_json::from_str(json).unwrap();
        assert_eq!(preview.id, MangaId::new(9));
        assert_eq!(preview.title, "Blame!");
    }
}
