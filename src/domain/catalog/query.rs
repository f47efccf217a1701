//! Catalog Context - 列表检索
//!
//! 三种条件都是作用在同一份列表上的纯谓词：
//! - 文本搜索：标题 / 原标题 / 作者名包含关键字（忽略大小写）
//! - 首字母：标题首字符大写后等于所选字母，`#` 匹配非 A-Z 开头
//! - 分类筛选：所有选中项同时命中（AND）

use std::fmt;
use std::str::FromStr;

use super::filters::FilterItem;
use crate::domain::manga::Manga;

/// 字母筛选条
pub fn alphabet() -> Vec<LetterFilter> {
    std::iter::once(LetterFilter::Symbol)
        .chain(('A'..='Z').map(LetterFilter::Letter))
        .collect()
}

/// 首字母筛选
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFilter {
    /// `#`：非字母开头
    Symbol,
    /// `A`..`Z`，通过 `LetterFilter::letter` 或 `FromStr` 构造
    Letter(char),
}

impl LetterFilter {
    /// ASCII 字母（不区分大小写），其它字符返回 None
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| LetterFilter::Letter(c.to_ascii_uppercase()))
    }

    pub fn matches(&self, manga: &Manga) -> bool {
        let first: String = manga
            .title
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();

        match self {
            LetterFilter::Symbol => !first.starts_with(|c: char| c.is_ascii_uppercase()),
            LetterFilter::Letter(letter) => {
                let mut chars = first.chars();
                chars.next() == Some(letter.to_ascii_uppercase()) && chars.next().is_none()
            }
        }
    }

    /// 点击字母：再次点击已选中的字母即取消
    pub fn toggle(current: Option<LetterFilter>, pressed: LetterFilter) -> Option<LetterFilter> {
        if current == Some(pressed) {
            None
        } else {
            Some(pressed)
        }
    }
}

impl fmt::Display for LetterFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterFilter::Symbol => f.write_str("#"),
            LetterFilter::Letter(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for LetterFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some('#'), None) => Ok(LetterFilter::Symbol),
            (Some(c), None) => LetterFilter::letter(c)
                .ok_or_else(|| format!("invalid letter filter: {:?} (expected '#' or A-Z)", s)),
            _ => Err(format!("invalid letter filter: {:?} (expected '#' or A-Z)", s)),
        }
    }
}

/// 列表检索条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub letter: Option<LetterFilter>,
    pub filters: Vec<FilterItem>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_letter(mut self, letter: LetterFilter) -> Self {
        self.letter = Some(letter);
        self
    }

    pub fn with_filter(mut self, item: FilterItem) -> Self {
        self.filters.push(item);
        self
    }

    pub fn with_filters(mut self, items: impl IntoIterator<Item = FilterItem>) -> Self {
        self.filters.extend(items);
        self
    }

    /// 没有任何有效条件
    pub fn is_empty(&self) -> bool {
        self.normalized_search().is_none() && self.letter.is_none() && self.filters.is_empty()
    }

    fn normalized_search(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
    }

    pub fn matches_search(&self, manga: &Manga) -> bool {
        match self.normalized_search() {
            None => true,
            Some(needle) => search_matches(manga, &needle),
        }
    }

    pub fn matches_letter(&self, manga: &Manga) -> bool {
        self.letter.map_or(true, |letter| letter.matches(manga))
    }

    pub fn matches_filters(&self, manga: &Manga) -> bool {
        self.filters.iter().all(|item| item.matches(manga))
    }

    pub fn matches(&self, manga: &Manga) -> bool {
        self.matches_search(manga) && self.matches_letter(manga) && self.matches_filters(manga)
    }

    /// 按原顺序返回命中的漫画
    pub fn apply<'a>(&self, mangas: &'a [Manga]) -> Vec<&'a Manga> {
        let needle = self.normalized_search();
        mangas
            .iter()
            .filter(|m| needle.as_deref().map_or(true, |n| search_matches(m, n)))
            .filter(|m| self.matches_letter(m))
            .filter(|m| self.matches_filters(m))
            .collect()
    }

    /// 与 `apply` 相同，但返回拥有所有权的副本
    pub fn apply_owned(&self, mangas: &[Manga]) -> Vec<Manga> {
        self.apply(mangas).into_iter().cloned().collect()
    }
}

/// `needle` 已经是去空白、小写后的关键字
fn search_matches(manga: &Manga, needle: &str) -> bool {
    manga.title.to_lowercase().contains(needle)
        || manga.original_title.to_lowercase().contains(needle)
        || manga
            .author_name()
            .is_some_and(|name| name.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::FilterKind;
    use crate::domain::manga::{sample_manga, Reference};

    fn catalog() -> Vec<Manga> {
        let mut one_piece = sample_manga(1, "One Piece");
        one_piece.original_title = "ワンピース".to_string();
        one_piece.genres = vec![Reference::new(1, "Shonen")];
        one_piece.themes = vec![Reference::new(2, "Aventure"), Reference::new(3, "Fantastique")];
        one_piece.french_publisher = Some(Reference::new(1, "Glénat"));
        one_piece.original_publisher = Some(Reference::new(3, "Shueisha"));

        let mut naruto = sample_manga(2, "Naruto");
        naruto.original_title = "ナルト".to_string();
        naruto.author = Some(Reference::new(2, "Masashi Kishimoto"));
        naruto.genres = vec![Reference::new(1, "Shonen")];
        naruto.themes = vec![Reference::new(1, "Action"), Reference::new(2, "Aventure")];
        naruto.french_publisher = Some(Reference::new(2, "Kana"));
        naruto.original_publisher = Some(Reference::new(3, "Shueisha"));

        let mut death_note = sample_manga(3, "Death Note");
        death_note.original_title = "Desu Nōto".to_string();
        death_note.author = Some(Reference::new(3, "Tsugumi Ohba"));
        death_note.genres = vec![Reference::new(2, "Seinen")];
        death_note.themes = vec![Reference::new(4, "Mystère"), Reference::new(1, "Action")];
        death_note.french_publisher = Some(Reference::new(2, "Kana"));
        death_note.original_publisher = Some(Reference::new(4, "Shogakukan"));

        let mut twenty = sample_manga(4, "20th Century Boys");
        twenty.author = Some(Reference::new(4, "Naoki Urasawa"));

        let mut eclair = sample_manga(5, "éclair");
        eclair.author = None;

        vec![one_piece, naruto, death_note, twenty, eclair]
    }

    fn ids(result: &[&Manga]) -> Vec<u32> {
        result.iter().map(|m| m.id.value()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let mangas = catalog();
        let query = CatalogQuery::new().with_search("   ");
        assert!(query.is_empty());
        assert_eq!(ids(&query.apply(&mangas)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_search_title_case_insensitive() {
        let mangas = catalog();
        let result = CatalogQuery::new().with_search("  NARU ").apply(&mangas);
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_search_original_title_and_author() {
        let mangas = catalog();
        assert_eq!(ids(&CatalogQuery::new().with_search("ワン").apply(&mangas)), vec![1]);
        assert_eq!(ids(&CatalogQuery::new().with_search("ohba").apply(&mangas)), vec![3]);
        assert_eq!(ids(&CatalogQuery::new().with_search("oda").apply(&mangas)), vec![1]);
    }

    #[test]
    fn test_search_is_exact_on_fields() {
        let mangas = catalog();
        let needle = "note";
        let result = CatalogQuery::new().with_search(needle).apply(&mangas);
        for manga in &mangas {
            let expected = manga.title.to_lowercase().contains(needle)
                || manga.original_title.to_lowercase().contains(needle)
                || manga
                    .author_name()
                    .is_some_and(|a| a.to_lowercase().contains(needle));
            assert_eq!(result.iter().any(|m| m.id == manga.id), expected);
        }
    }

    #[test]
    fn test_letter_filter() {
        let mangas = catalog();
        let n = CatalogQuery::new().with_letter(LetterFilter::Letter('N'));
        assert_eq!(ids(&n.apply(&mangas)), vec![2]);

        // 数字和非 ASCII 字母都归入 #
        let symbol = CatalogQuery::new().with_letter(LetterFilter::Symbol);
        assert_eq!(ids(&symbol.apply(&mangas)), vec![4, 5]);
    }

    #[test]
    fn test_letter_uppercases_first_char() {
        let manga = sample_manga(1, "one piece");
        assert!(LetterFilter::Letter('O').matches(&manga));
        assert!(!LetterFilter::Symbol.matches(&manga));
    }

    #[test]
    fn test_letter_constructor_accepts_ascii_only() {
        assert_eq!(LetterFilter::letter('k'), Some(LetterFilter::Letter('K')));
        assert_eq!(LetterFilter::letter('é'), None);
        assert_eq!(LetterFilter::letter('1'), None);
        assert!("é".parse::<LetterFilter>().is_err());

        // 直接构造的小写字母与大写等价
        let naruto = sample_manga(2, "Naruto");
        assert!(LetterFilter::Letter('n').matches(&naruto));
    }

    #[test]
    fn test_empty_title_is_symbol() {
        let manga = sample_manga(1, "");
        assert!(LetterFilter::Symbol.matches(&manga));
        assert!(!LetterFilter::Letter('A').matches(&manga));
    }

    #[test]
    fn test_category_filters_intersect() {
        let mangas = catalog();
        let shonen = FilterItem::new(FilterKind::Genre, 1, "Shonen");
        let action = FilterItem::new(FilterKind::Theme, 1, "Action");
        let kana = FilterItem::new(FilterKind::Publisher, 2, "Kana");

        let shonen_only = CatalogQuery::new().with_filter(shonen.clone());
        assert_eq!(ids(&shonen_only.apply(&mangas)), vec![1, 2]);

        let shonen_action = CatalogQuery::new().with_filters([shonen.clone(), action.clone()]);
        assert_eq!(ids(&shonen_action.apply(&mangas)), vec![2]);

        let action_kana = CatalogQuery::new().with_filters([action, kana]);
        assert_eq!(ids(&action_kana.apply(&mangas)), vec![2, 3]);

        let shueisha_vo = CatalogQuery::new()
            .with_filter(FilterItem::new(FilterKind::Publisher, 3, "Shueisha"));
        assert_eq!(ids(&shueisha_vo.apply(&mangas)), vec![1, 2]);

        let ohba = CatalogQuery::new().with_filter(FilterItem::new(FilterKind::Author, 3, "Tsugumi Ohba"));
        assert_eq!(ids(&ohba.apply(&mangas)), vec![3]);

        let kishimoto = FilterItem::new(FilterKind::Author, 2, "Masashi Kishimoto");
        let kishimoto_action = CatalogQuery::new().with_filters([kishimoto.clone(), action_theme()]);
        assert_eq!(ids(&kishimoto_action.apply(&mangas)), vec![2]);

        let kishimoto_mystery = CatalogQuery::new()
            .with_filters([kishimoto, FilterItem::new(FilterKind::Theme, 4, "Mystère")]);
        assert!(kishimoto_mystery.apply(&mangas).is_empty());
    }

    fn action_theme() -> FilterItem {
        FilterItem::new(FilterKind::Theme, 1, "Action")
    }

    #[test]
    fn test_combination_is_order_independent() {
        let mangas = catalog();
        let query = CatalogQuery::new()
            .with_search("a")
            .with_letter(LetterFilter::Letter('N'))
            .with_filter(FilterItem::new(FilterKind::Theme, 2, "Aventure"));

        let combined = ids(&query.apply(&mangas));

        let by_letter_first: Vec<u32> = mangas
            .iter()
            .filter(|m| query.matches_letter(m))
            .filter(|m| query.matches_filters(m))
            .filter(|m| query.matches_search(m))
            .map(|m| m.id.value())
            .collect();

        let by_filters_first: Vec<u32> = mangas
            .iter()
            .filter(|m| query.matches_filters(m))
            .filter(|m| query.matches_search(m))
            .filter(|m| query.matches_letter(m))
            .map(|m| m.id.value())
            .collect();

        assert_eq!(combined, vec![2]);
        assert_eq!(combined, by_letter_first);
        assert_eq!(combined, by_filters_first);
        assert!(mangas.iter().filter(|m| query.matches(m)).count() == combined.len());
    }

    #[test]
    fn test_alphabet_and_toggle() {
        let letters = alphabet();
        assert_eq!(letters.len(), 27);
        assert_eq!(letters[0], LetterFilter::Symbol);
        assert_eq!(letters[26], LetterFilter::Letter('Z'));

        let a = LetterFilter::Letter('A');
        let selected = LetterFilter::toggle(None, a);
        assert_eq!(selected, Some(a));
        assert_eq!(LetterFilter::toggle(selected, a), None);
        assert_eq!(
            LetterFilter::toggle(selected, LetterFilter::Symbol),
            Some(LetterFilter::Symbol)
        );
    }

    #[test]
    fn test_letter_parsing() {
        assert_eq!("#".parse::<LetterFilter>().unwrap(), LetterFilter::Symbol);
        assert_eq!("k".parse::<LetterFilter>().unwrap(), LetterFilter::Letter('K'));
        assert!("AB".parse::<LetterFilter>().is_err());
        assert!("é".parse::<LetterFilter>().is_err());
        assert_eq!(LetterFilter::Letter('K').to_string(), "K");
    }
}
