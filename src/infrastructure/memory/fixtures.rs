//! 离线开发用的固定数据
//!
//! 三部作品、三位作者、四家出版社、三个类型、四个题材

use chrono::{DateTime, Utc};

use crate::domain::catalog::FilterCategory;
use crate::domain::manga::{
    Author, Genre, Manga, MangaId, Publisher, Reference, Theme, Volume, VolumeId, VolumeSummary,
};

/// 新建漫画时使用的占位图片
pub const PLACEHOLDER_IMAGE: &str = "https://example.com/placeholder.jpg";

/// 新建漫画时使用的占位出版社名
pub const UNDEFINED_PUBLISHER: &str = "À définir";

pub fn authors() -> Vec<Author> {
    vec![
        Reference::new(1, "Eiichiro Oda"),
        Reference::new(2, "Masashi Kishimoto"),
        Reference::new(3, "Tsugumi Ohba"),
    ]
}

pub fn publishers() -> Vec<Publisher> {
    vec![
        Reference::new(1, "Glénat"),
        Reference::new(2, "Kana"),
        Reference::new(3, "Shueisha"),
        Reference::new(4, "Shogakukan"),
    ]
}

pub fn genres() -> Vec<Genre> {
    vec![
        Reference::new(1, "Shonen"),
        Reference::new(2, "Seinen"),
        Reference::new(3, "Shojo"),
    ]
}

pub fn themes() -> Vec<Theme> {
    vec![
        Reference::new(1, "Action"),
        Reference::new(2, "Aventure"),
        Reference::new(3, "Fantastique"),
        Reference::new(4, "Mystère"),
    ]
}

/// 筛选分类的固定时间戳
pub fn fixture_timestamp() -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn to_category(reference: &Reference) -> FilterCategory {
    FilterCategory {
        id: reference.id,
        name: reference.name.clone(),
        created_at: fixture_timestamp(),
        updated_at: fixture_timestamp(),
    }
}

/// 生成卷列表：前 `purchased` 卷为已购买
///
/// 日期格式 `{year}-{i/12+1}-{i%12+1}`
fn volumes(slug: &str, year: u32, count: u32, purchased: u32) -> Vec<Volume> {
    (0..count)
        .map(|i| Volume {
            id: VolumeId::new(i + 1),
            number: (i + 1).to_string(),
            title: format!("Volume {}", i + 1),
            release_date: format!("{}-{:02}-{:02}", year, i / 12 + 1, i % 12 + 1),
            image: format!("https://example.com/{}-{}.jpg", slug, i + 1),
            url: format!("https://example.com/{}/volume-{}", slug, i + 1),
            purchased: i < purchased,
        })
        .collect()
}

struct Series {
    id: u32,
    title: &'static str,
    original_title: &'static str,
    slug: &'static str,
    year: u32,
    kind: &'static str,
    volume_count: u32,
    purchased: u32,
    price: &'static str,
    synopsis: &'static str,
    coming_soon: Option<u32>,
    finished: bool,
    author: usize,
    original_publisher: usize,
    french_publisher: usize,
    genres: &'static [usize],
    themes: &'static [usize],
}

const SERIES: &[Series] = &[
    Series {
        id: 1,
        title: "One Piece",
        original_title: "ワンピース",
        slug: "one-piece",
        year: 2000,
        kind: "Shonen",
        volume_count: 105,
        purchased: 50,
        price: "6.90",
        synopsis: "L'histoire suit les aventures de Monkey D. Luffy, un jeune pirate élastique...",
        coming_soon: Some(106),
        finished: false,
        author: 0,
        original_publisher: 2,
        french_publisher: 0,
        genres: &[0],
        themes: &[1, 2],
    },
    Series {
        id: 2,
        title: "Naruto",
        original_title: "ナルト",
        slug: "naruto",
        year: 2002,
        kind: "Shonen",
        volume_count: 72,
        purchased: 30,
        price: "6.90",
        synopsis: "L'histoire suit Naruto Uzumaki, un jeune ninja qui recherche la reconnaissance...",
        coming_soon: None,
        finished: true,
        author: 1,
        original_publisher: 2,
        french_publisher: 1,
        genres: &[0],
        themes: &[0, 1],
    },
    Series {
        id: 3,
        title: "Death Note",
        original_title: "デスノート",
        slug: "death-note",
        year: 2007,
        kind: "Shonen",
        volume_count: 12,
        purchased: 12,
        price: "7.60",
        synopsis: "Light Yagami, un étudiant brillant, découvre un carnet aux pouvoirs surnaturels...",
        coming_soon: None,
        finished: true,
        author: 2,
        original_publisher: 3,
        french_publisher: 1,
        genres: &[1],
        themes: &[3, 0],
    },
];

fn pick(source: &[Reference], indices: &[usize]) -> Vec<Reference> {
    indices
        .iter()
        .filter_map(|&i| source.get(i).cloned())
        .collect()
}

/// 初始漫画目录
pub fn mangas() -> Vec<Manga> {
    let authors = authors();
    let publishers = publishers();
    let genres = genres();
    let themes = themes();

    SERIES
        .iter()
        .map(|s| {
            let volumes = volumes(s.slug, s.year, s.volume_count, s.purchased);
            let last_published_volume = volumes.last().map(VolumeSummary::from);
            Manga {
                id: MangaId::new(s.id),
                title: s.title.to_string(),
                original_title: s.original_title.to_string(),
                image: format!("https://example.com/{}.jpg", s.slug),
                origin: "Japon".to_string(),
                french_release_year: s.year.to_string(),
                kind: s.kind.to_string(),
                original_volume_count: s.volume_count.to_string(),
                french_volume_count: s.volume_count.to_string(),
                price: s.price.to_string(),
                synopsis: s.synopsis.to_string(),
                last_published_volume_id: last_published_volume.as_ref().map(|v| v.id),
                coming_soon_volume_id: s.coming_soon.map(VolumeId::new),
                finished: s.finished,
                author: authors.get(s.author).cloned(),
                original_publisher: publishers.get(s.original_publisher).cloned(),
                french_publisher: publishers.get(s.french_publisher).cloned(),
                genres: pick(&genres, s.genres),
                themes: pick(&themes, s.themes),
                volumes,
                last_published_volume,
                coming_soon_volume: None,
            }
        })
        .collect()
}

/// 新建漫画的草稿（ID 由存储分配）
pub fn draft_manga(title: &str, today: chrono::NaiveDate) -> Manga {
    let undefined = Reference::new(1, UNDEFINED_PUBLISHER);
    Manga {
        id: MangaId::new(0),
        title: title.to_string(),
        original_title: title.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        origin: "Japon".to_string(),
        french_release_year: today.format("%Y").to_string(),
        kind: "Shonen".to_string(),
        original_volume_count: "1".to_string(),
        french_volume_count: "1".to_string(),
        price: "6.90".to_string(),
        synopsis: "Synopsis à venir...".to_string(),
        last_published_volume_id: None,
        coming_soon_volume_id: None,
        finished: false,
        author: authors().into_iter().next(),
        original_publisher: Some(undefined.clone()),
        french_publisher: Some(undefined),
        genres: vec![Reference::new(1, "Shonen")],
        themes: vec![Reference::new(1, "Action")],
        volumes: vec![Volume {
            id: VolumeId::new(1),
            number: "1".to_string(),
            title: "Volume 1".to_string(),
            release_date: today.format("%Y-%m-%d").to_string(),
            image: "https://example.com/placeholder-1.jpg".to_string(),
            url: "https://example.com/manga/volume-1".to_string(),
            purchased: false,
        }],
        last_published_volume: None,
        coming_soon_volume: None,
    }
}
