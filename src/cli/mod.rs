//! 命令行前端
//!
//! 每个子命令对应一个 Command/Query Handler，结果以纯文本写入输出流

mod args;
mod render;

pub use args::{Action, Cli, Command, ListArgs};

use std::io::Write;

use crate::application::{
    ApplicationError, BrowseCatalog, CreateManga, DeleteManga, GetFilters, GetLatestMangas,
    GetManga, SearchMangas, UpdateVolumeStatus, UpdateVolumesStatus,
};
use crate::domain::catalog::{CatalogQuery, FilterItem, FilterKind};
use crate::infrastructure::http::AppState;

/// 命令执行错误：业务错误展示给用户，输出错误直接上抛
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// 转为入口函数返回的错误，业务错误只保留面向用户的提示
    pub fn into_anyhow(self) -> anyhow::Error {
        match self {
            CliError::Application(e) => anyhow::anyhow!(e.user_message()),
            other => other.into(),
        }
    }
}

impl ListArgs {
    /// 转换为列表检索条件
    pub fn to_query(&self) -> CatalogQuery {
        let selected = [
            (FilterKind::Genre, &self.genres),
            (FilterKind::Theme, &self.themes),
            (FilterKind::Author, &self.authors),
            (FilterKind::Publisher, &self.publishers),
        ]
        .into_iter()
        .flat_map(|(kind, ids)| ids.iter().map(move |&id| FilterItem::new(kind, id, "")));

        let mut query = CatalogQuery::new().with_filters(selected);
        if let Some(search) = &self.search {
            query = query.with_search(search.clone());
        }
        if let Some(letter) = self.letter {
            query = query.with_letter(letter);
        }
        query
    }
}

/// 执行一次性操作
pub async fn execute(state: &AppState, action: Action, out: &mut impl Write) -> Result<(), CliError> {
    match action {
        Action::List(args) => {
            let response = state
                .browse_catalog_handler
                .handle(BrowseCatalog {
                    query: args.to_query(),
                })
                .await?;
            render::catalog(out, &response)?;
        }
        Action::Show { id } => {
            let manga = state.get_manga_handler.handle(GetManga { manga_id: id }).await?;
            render::manga_detail(out, &manga)?;
        }
        Action::Create { title } => {
            let manga = state.create_manga_handler.handle(CreateManga { title }).await?;
            writeln!(out, "Manga ajouté : #{} {}", manga.id, manga.title)?;
        }
        Action::Delete { id } => {
            let id = state
                .delete_manga_handler
                .handle(DeleteManga { manga_id: id })
                .await?;
            writeln!(out, "Manga #{} supprimé", id)?;
        }
        Action::Filters => {
            let filters = state.get_filters_handler.handle(GetFilters).await?;
            render::filters(out, &filters)?;
        }
        Action::Latest => {
            let latest = state.latest_mangas_handler.handle(GetLatestMangas).await?;
            render::previews(out, &latest)?;
        }
        Action::Search { query } => {
            let mangas = state
                .search_mangas_handler
                .handle(SearchMangas { query })
                .await?;
            render::manga_list(out, &mangas)?;
        }
        Action::Volume {
            manga,
            volume,
            purchased,
        } => {
            let manga = state
                .update_volume_status_handler
                .handle(UpdateVolumeStatus {
                    manga_id: manga,
                    volume_id: volume,
                    purchased,
                })
                .await?;
            render::progress(out, &manga)?;
        }
        Action::Volumes {
            manga,
            ids,
            purchased,
        } => {
            let manga = state
                .update_volumes_status_handler
                .handle(UpdateVolumesStatus {
                    manga_id: manga,
                    volume_ids: ids,
                    purchased,
                })
                .await?;
            render::progress(out, &manga)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::sync::Arc;

    use crate::domain::catalog::LetterFilter;
    use crate::infrastructure::adapters::api::MockMangaApi;

    fn state() -> AppState {
        AppState::new(Arc::new(MockMangaApi::without_latency()))
    }

    async fn run(state: &AppState, argv: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("monstockage").chain(argv.iter().copied())).unwrap();
        let Command::Action(action) = cli.command else {
            panic!("expected an action");
        };
        let mut out = Vec::new();
        execute(state, action, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_args_to_query() {
        let args = ListArgs {
            search: Some("oda".to_string()),
            letter: Some(LetterFilter::Letter('O')),
            genres: vec![1],
            publishers: vec![3],
            ..Default::default()
        };
        let query = args.to_query();
        assert_eq!(query.search.as_deref(), Some("oda"));
        assert_eq!(query.letter, Some(LetterFilter::Letter('O')));
        assert_eq!(query.filters.len(), 2);
        assert_eq!(query.filters[1].kind, FilterKind::Publisher);
    }

    #[tokio::test]
    async fn test_list_applies_letter() {
        let output = run(&state(), &["list", "--letter", "d"]).await.unwrap();
        assert!(output.contains("Death Note"));
        assert!(!output.contains("Naruto"));
        assert!(output.contains("1 / 3"));
        assert!(output.contains("Filtres disponibles"));
        assert!(output.contains("Genre : 1 Shonen, 2 Seinen"));
    }

    #[tokio::test]
    async fn test_show_lists_volumes() {
        let output = run(&state(), &["show", "3"]).await.unwrap();
        assert!(output.contains("Death Note"));
        assert!(output.contains("12/12"));
    }

    #[tokio::test]
    async fn test_create_then_latest() {
        let state = state();
        let created = run(&state, &["create", "Bleach"]).await.unwrap();
        assert!(created.contains("#4 Bleach"));

        let latest = run(&state, &["latest"]).await.unwrap();
        assert!(latest.lines().next().unwrap().contains("Bleach"));
    }

    #[tokio::test]
    async fn test_bulk_volume_update_reports_progress() {
        let output = run(&state(), &["volumes", "2", "31", "32", "--purchased", "true"])
            .await
            .unwrap();
        assert!(output.contains("32/72"));
    }

    #[tokio::test]
    async fn test_errors_carry_user_message() {
        let err = run(&state(), &["delete", "99"]).await.unwrap_err();
        assert_eq!(err.to_string(), "Manga non trouvé");

        let err = run(&state(), &["create", " "]).await.unwrap_err();
        assert_eq!(err.to_string(), "Veuillez entrer un titre");
    }

    #[tokio::test]
    async fn test_application_error_reported_as_user_message() {
        let err = run(&state(), &["show", "0"]).await.unwrap_err().into_anyhow();
        assert_eq!(err.to_string(), "Identifiant de manga invalide");
        assert_eq!(err.chain().count(), 1);
    }
}
