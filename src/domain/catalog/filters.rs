//! Catalog Context - 分类筛选项

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::manga::Manga;

/// 筛选类别，序列化为 API 使用的名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    Genre,
    Theme,
    #[serde(rename = "Auteur")]
    Author,
    #[serde(rename = "Editeur")]
    Publisher,
    Format,
    #[serde(rename = "Langue")]
    Language,
}

impl FilterKind {
    /// API 响应中的固定顺序
    pub const ALL: [FilterKind; 6] = [
        FilterKind::Genre,
        FilterKind::Theme,
        FilterKind::Author,
        FilterKind::Publisher,
        FilterKind::Format,
        FilterKind::Language,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Genre => "Genre",
            FilterKind::Theme => "Theme",
            FilterKind::Author => "Auteur",
            FilterKind::Publisher => "Editeur",
            FilterKind::Format => "Format",
            FilterKind::Language => "Langue",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "genre" => Ok(FilterKind::Genre),
            "theme" => Ok(FilterKind::Theme),
            "auteur" | "author" => Ok(FilterKind::Author),
            "editeur" | "publisher" => Ok(FilterKind::Publisher),
            "format" => Ok(FilterKind::Format),
            "langue" | "language" => Ok(FilterKind::Language),
            other => Err(format!("unknown filter kind: {}", other)),
        }
    }
}

/// API 返回的单个筛选分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCategory {
    pub id: u32,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `GET /mangas/filters` 的响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiltersResponse {
    #[serde(rename = "Genre", default)]
    pub genres: Vec<FilterCategory>,
    #[serde(rename = "Theme", default)]
    pub themes: Vec<FilterCategory>,
    #[serde(rename = "Auteur", default)]
    pub authors: Vec<FilterCategory>,
    #[serde(rename = "Editeur", default)]
    pub publishers: Vec<FilterCategory>,
    #[serde(rename = "Format", default)]
    pub formats: Vec<FilterCategory>,
    #[serde(rename = "Langue", default)]
    pub languages: Vec<FilterCategory>,
}

impl FiltersResponse {
    pub fn categories(&self, kind: FilterKind) -> &[FilterCategory] {
        match kind {
            FilterKind::Genre => &self.genres,
            FilterKind::Theme => &self.themes,
            FilterKind::Author => &self.authors,
            FilterKind::Publisher => &self.publishers,
            FilterKind::Format => &self.formats,
            FilterKind::Language => &self.languages,
        }
    }

    /// 展开为筛选项列表（按类别顺序，保持类别内顺序）
    pub fn into_items(self) -> Vec<FilterItem> {
        FilterKind::ALL
            .iter()
            .flat_map(|kind| {
                self.categories(*kind)
                    .iter()
                    .map(|category| FilterItem::new(*kind, category.id, category.name.clone()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// 筛选项 `(类别, id, 名称)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterItem {
    #[serde(rename = "type")]
    pub kind: FilterKind,
    pub id: u32,
    pub name: String,
}

impl FilterItem {
    pub fn new(kind: FilterKind, id: u32, name: impl Into<String>) -> Self {
        Self {
            kind,
            id,
            name: name.into(),
        }
    }

    /// 判断漫画是否命中该筛选项
    ///
    /// Format / Langue 在漫画上没有对应字段，总是命中
    pub fn matches(&self, manga: &Manga) -> bool {
        match self.kind {
            FilterKind::Genre => manga.genres.iter().any(|g| g.id == self.id),
            FilterKind::Theme => manga.themes.iter().any(|t| t.id == self.id),
            FilterKind::Author => manga.author.as_ref().is_some_and(|a| a.id == self.id),
            FilterKind::Publisher => {
                manga.french_publisher.as_ref().is_some_and(|p| p.id == self.id)
                    || manga
                        .original_publisher
                        .as_ref()
                        .is_some_and(|p| p.id == self.id)
            }
            FilterKind::Format | FilterKind::Language => true,
        }
    }

    fn same_entry(&self, other: &FilterItem) -> bool {
        self.kind == other.kind && self.id == other.id
    }
}

/// 当前选中的筛选项集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    items: Vec<FilterItem>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切换选中状态：已选中则移除，否则追加
    pub fn toggle(&mut self, item: FilterItem) {
        if let Some(pos) = self.items.iter().position(|i| i.same_entry(&item)) {
            self.items.remove(pos);
        } else {
            self.items.push(item);
        }
    }

    pub fn is_selected(&self, item: &FilterItem) -> bool {
        self.items.iter().any(|i| i.same_entry(item))
    }

    pub fn items(&self) -> &[FilterItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_items(self) -> Vec<FilterItem> {
        self.items
    }
}

impl From<Vec<FilterItem>> for FilterSelection {
    fn from(items: Vec<FilterItem>) -> Self {
        let mut selection = Self::new();
        for item in items {
            if !selection.is_selected(&item) {
                selection.items.push(item);
            }
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::manga::{sample_manga, Reference};

    #[test]
    fn test_filters_response_wire_format() {
        let json = r#"{
            "Genre": [{"id": 1, "nom": "Shonen", "createdAt": "2024-01-01T00:00:00.000Z", "updatedAt": "2024-01-01T00:00:00.000Z"}],
            "Theme": [{"id": 2, "nom": "Aventure"}, {"id": 3, "nom": "Fantastique"}],
            "Auteur": [],
            "Editeur": [{"id": 1, "nom": "Glénat"}],
            "Format": [],
            "Langue": []
        }"#;

        let response: FiltersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.genres.len(), 1);
        assert!(response.genres[0].created_at.is_some());

        let items = response.into_items();
        assert_eq!(
            items,
            vec![
                FilterItem::new(FilterKind::Genre, 1, "Shonen"),
                FilterItem::new(FilterKind::Theme, 2, "Aventure"),
                FilterItem::new(FilterKind::Theme, 3, "Fantastique"),
                FilterItem::new(FilterKind::Publisher, 1, "Glénat"),
            ]
        );
    }

    #[test]
    fn test_publisher_matches_either_edition() {
        let mut manga = sample_manga(1, "Death Note");
        manga.original_publisher = Some(Reference::new(4, "Shogakukan"));
        manga.french_publisher = Some(Reference::new(2, "Kana"));

        assert!(FilterItem::new(FilterKind::Publisher, 4, "Shogakukan").matches(&manga));
        assert!(FilterItem::new(FilterKind::Publisher, 2, "Kana").matches(&manga));
        assert!(!FilterItem::new(FilterKind::Publisher, 1, "Glénat").matches(&manga));
    }

    #[test]
    fn test_format_and_language_always_match() {
        let manga = sample_manga(1, "Naruto");
        assert!(FilterItem::new(FilterKind::Format, 99, "Poche").matches(&manga));
        assert!(FilterItem::new(FilterKind::Language, 99, "VF").matches(&manga));
    }

    #[test]
    fn test_author_filter() {
        let mut manga = sample_manga(1, "One Piece");
        assert!(FilterItem::new(FilterKind::Author, 1, "Eiichiro Oda").matches(&manga));
        assert!(!FilterItem::new(FilterKind::Author, 2, "Masashi Kishimoto").matches(&manga));

        manga.author = None;
        assert!(!FilterItem::new(FilterKind::Author, 1, "Eiichiro Oda").matches(&manga));
    }

    #[test]
    fn test_selection_toggle() {
        let mut selection = FilterSelection::new();
        let shonen = FilterItem::new(FilterKind::Genre, 1, "Shonen");
        let action = FilterItem::new(FilterKind::Theme, 1, "Action");

        selection.toggle(shonen.clone());
        selection.toggle(action.clone());
        assert_eq!(selection.items().len(), 2);

        // 同 id 不同类别互不影响
        selection.toggle(shonen.clone());
        assert!(!selection.is_selected(&shonen));
        assert!(selection.is_selected(&action));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Auteur".parse::<FilterKind>().unwrap(), FilterKind::Author);
        assert_eq!("publisher".parse::<FilterKind>().unwrap(), FilterKind::Publisher);
        assert!("studio".parse::<FilterKind>().is_err());
    }
}
