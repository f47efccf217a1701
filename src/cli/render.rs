//! 纯文本输出

use std::io::{self, Write};

use crate::application::BrowseCatalogResponse;
use crate::domain::catalog::{FilterItem, FilterKind, FiltersResponse};
use crate::domain::manga::{Manga, MangaPreview};

fn manga_line(out: &mut impl Write, manga: &Manga) -> io::Result<()> {
    let (owned, total) = manga.purchase_progress();
    writeln!(
        out,
        "{:>4}  {:<30} {:<20} {}/{}",
        manga.id,
        manga.title,
        manga.author_name().unwrap_or("-"),
        owned,
        total
    )
}

pub fn manga_list(out: &mut impl Write, mangas: &[Manga]) -> io::Result<()> {
    if mangas.is_empty() {
        return writeln!(out, "Aucun manga trouvé");
    }
    for manga in mangas {
        manga_line(out, manga)?;
    }
    Ok(())
}

pub fn catalog(out: &mut impl Write, response: &BrowseCatalogResponse) -> io::Result<()> {
    manga_list(out, &response.mangas)?;
    writeln!(out, "{} / {} mangas", response.mangas.len(), response.total)?;
    available_filters(out, &response.filters)
}

/// 每个类别一行 `Genre : 1 Shonen, 2 Seinen`
fn available_filters(out: &mut impl Write, items: &[FilterItem]) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "Filtres disponibles :")?;
    for kind in FilterKind::ALL {
        let entries: Vec<String> = items
            .iter()
            .filter(|item| item.kind == kind)
            .map(|item| format!("{} {}", item.id, item.name))
            .collect();
        if !entries.is_empty() {
            writeln!(out, "  {} : {}", kind, entries.join(", "))?;
        }
    }
    Ok(())
}

pub fn manga_detail(out: &mut impl Write, manga: &Manga) -> io::Result<()> {
    writeln!(out, "#{} {} ({})", manga.id, manga.title, manga.original_title)?;
    writeln!(out, "Auteur : {}", manga.author_name().unwrap_or("-"))?;
    if let Some(publisher) = &manga.french_publisher {
        writeln!(out, "Éditeur VF : {}", publisher.name)?;
    }
    writeln!(
        out,
        "{} · {} · {} € · {}",
        manga.kind,
        manga.french_release_year,
        manga.price,
        if manga.finished { "Terminé" } else { "En cours" }
    )?;
    if !manga.synopsis.is_empty() {
        writeln!(out, "{}", manga.synopsis)?;
    }
    progress(out, manga)?;
    for volume in &manga.volumes {
        writeln!(
            out,
            "  [{}] {:>4}  {:<16} {}",
            if volume.purchased { "x" } else { " " },
            volume.number,
            volume.title,
            volume.release_date
        )?;
    }
    Ok(())
}

pub fn progress(out: &mut impl Write, manga: &Manga) -> io::Result<()> {
    let (owned, total) = manga.purchase_progress();
    writeln!(out, "{} : {}/{} volumes achetés", manga.title, owned, total)
}

pub fn filters(out: &mut impl Write, filters: &FiltersResponse) -> io::Result<()> {
    for kind in FilterKind::ALL {
        let categories = filters.categories(kind);
        if categories.is_empty() {
            continue;
        }
        writeln!(out, "{}:", kind)?;
        for category in categories {
            writeln!(out, "  {:>4}  {}", category.id, category.name)?;
        }
    }
    Ok(())
}

pub fn previews(out: &mut impl Write, previews: &[MangaPreview]) -> io::Result<()> {
    for preview in previews {
        writeln!(out, "{:>4}  {}", preview.id, preview.title)?;
    }
    Ok(())
}
