//! 命令行参数

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::catalog::LetterFilter;
use crate::domain::manga::{MangaId, VolumeId};

#[derive(Debug, Parser)]
#[command(
    name = "monstockage",
    version,
    about = "Catalogue de mangas et suivi des volumes achetés",
    long_about = None
)]
pub struct Cli {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Use in-memory mock data instead of the backend.
    #[arg(long, global = true)]
    pub mock: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the REST API locally over mock data.
    Serve,

    #[command(flatten)]
    Action(Action),
}

/// 一次性执行的操作
#[derive(Debug, Subcommand)]
pub enum Action {
    /// List the catalogue, optionally filtered.
    List(ListArgs),

    /// Show one manga with its volumes.
    Show { id: MangaId },

    /// Add a manga by title.
    Create { title: String },

    /// Delete a manga.
    Delete { id: MangaId },

    /// Show the available filters.
    Filters,

    /// Show the three most recently added mangas.
    Latest,

    /// Search mangas by title on the server.
    Search { query: String },

    /// Mark a single volume as purchased or not.
    Volume {
        manga: MangaId,
        volume: VolumeId,
        #[arg(long, action = clap::ArgAction::Set)]
        purchased: bool,
    },

    /// Mark several volumes as purchased or not.
    Volumes {
        manga: MangaId,
        #[arg(required = true)]
        ids: Vec<VolumeId>,
        #[arg(long, action = clap::ArgAction::Set)]
        purchased: bool,
    },
}

#[derive(Debug, Default, clap::Args)]
pub struct ListArgs {
    /// Text matched against title, original title and author.
    #[arg(short, long)]
    pub search: Option<String>,

    /// First letter of the title (`#` for non-letters).
    #[arg(short, long)]
    pub letter: Option<LetterFilter>,

    /// Genre id (repeatable).
    #[arg(long = "genre", value_name = "ID")]
    pub genres: Vec<u32>,

    /// Theme id (repeatable).
    #[arg(long = "theme", value_name = "ID")]
    pub themes: Vec<u32>,

    /// Author id (repeatable).
    #[arg(long = "author", value_name = "ID")]
    pub authors: Vec<u32>,

    /// Publisher id (repeatable).
    #[arg(long = "publisher", value_name = "ID")]
    pub publishers: Vec<u32>,
}
