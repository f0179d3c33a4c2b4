mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use filmshelf_core::{Genre, Shelf};

/// Filmshelf — a personal film catalog
#[derive(Parser)]
#[command(name = "filmshelf", version, about)]
struct Cli {
    /// Path to the data directory
    #[arg(long, default_value_t = default_data_dir())]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage folders of watched films
    Folders {
        #[command(subcommand)]
        action: Option<FoldersAction>,
    },
    /// Manage the film collection
    Films {
        #[command(subcommand)]
        action: Option<FilmsAction>,
    },
    /// Manage the wishlist of films to watch
    Wishlist {
        #[command(subcommand)]
        action: Option<WishlistAction>,
    },
    /// List all films by rating, best first
    Ranking,
    /// Search films by title, genre, or rating
    Search {
        /// Text to match (case-insensitive substring)
        query: String,
    },
    /// Show catalog statistics
    Stats,
}

#[derive(Subcommand)]
enum FoldersAction {
    /// Create a folder
    Add {
        /// Folder name
        name: String,
        /// Optional cover image to import
        #[arg(long)]
        cover: Option<PathBuf>,
    },
    /// Delete a folder and the film copies inside it
    Rm {
        /// Folder ID
        id: String,
    },
    /// Show a folder and its films
    Show {
        /// Folder ID
        id: String,
    },
}

#[derive(Subcommand)]
enum FilmsAction {
    /// Record a watched film
    Add {
        /// Film title
        title: String,
        /// Short description
        #[arg(long, default_value = "")]
        description: String,
        /// Genre (e.g. horror, sci-fi, drama)
        #[arg(long)]
        genre: Genre,
        /// Rating, 1 to 5
        #[arg(long, default_value_t = 3)]
        rating: u8,
        /// Duration in minutes
        #[arg(long)]
        duration: u32,
        /// Optional cover image to import
        #[arg(long)]
        cover: Option<PathBuf>,
        /// Create the film directly inside this folder
        #[arg(long)]
        folder: Option<String>,
    },
    /// Place an existing film into a folder
    File {
        /// Folder ID
        folder: String,
        /// Film ID
        film: String,
    },
    /// Remove a film from a folder (the film itself survives)
    Unfile {
        /// Folder ID
        folder: String,
        /// Film ID
        film: String,
    },
    /// Move a film from its current folder to another
    Mv {
        /// Film ID
        film: String,
        /// Target folder ID
        folder: String,
    },
    /// Edit a film everywhere it appears
    Edit {
        /// Film ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        genre: Option<Genre>,
        #[arg(long)]
        rating: Option<u8>,
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long)]
        cover: Option<PathBuf>,
    },
    /// Delete a film everywhere it appears
    Rm {
        /// Film ID
        id: String,
    },
    /// Show one film in detail
    Show {
        /// Film ID
        id: String,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Add a film to watch later
    Add {
        /// Film title
        title: String,
        /// Short description
        #[arg(long, default_value = "")]
        description: String,
        /// Genre (e.g. horror, sci-fi, drama)
        #[arg(long)]
        genre: Genre,
        /// Duration in minutes
        #[arg(long)]
        duration: u32,
        /// Optional cover image to import
        #[arg(long)]
        cover: Option<PathBuf>,
    },
    /// Drop a wish without watching it
    Rm {
        /// Wish ID
        id: String,
    },
    /// Mark a wish as watched, turning it into a rated film
    Convert {
        /// Wish ID
        id: String,
        /// Rating, 1 to 5
        #[arg(long)]
        rating: u8,
        /// Folder to place the new film in (defaults to the flat list)
        #[arg(long)]
        folder: Option<String>,
    },
}

fn default_data_dir() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
        .join(".filmshelf")
        .to_string_lossy()
        .to_string()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut shelf = Shelf::open(PathBuf::from(&cli.data_dir))?;

    match cli.command {
        Commands::Folders { action } => match action {
            None => commands::folders::list(&shelf)?,
            Some(FoldersAction::Add { name, cover }) => {
                commands::folders::add(&mut shelf, name, cover)?
            }
            Some(FoldersAction::Rm { id }) => commands::folders::rm(&mut shelf, id)?,
            Some(FoldersAction::Show { id }) => commands::folders::show(&shelf, id)?,
        },
        Commands::Films { action } => match action {
            None => commands::films::list(&shelf)?,
            Some(FilmsAction::Add {
                title,
                description,
                genre,
                rating,
                duration,
                cover,
                folder,
            }) => commands::films::add(
                &mut shelf,
                title,
                description,
                genre,
                rating,
                duration,
                cover,
                folder,
            )?,
            Some(FilmsAction::File { folder, film }) => {
                commands::films::file(&mut shelf, folder, film)?
            }
            Some(FilmsAction::Unfile { folder, film }) => {
                commands::films::unfile(&mut shelf, folder, film)?
            }
            Some(FilmsAction::Mv { film, folder }) => {
                commands::films::mv(&mut shelf, film, folder)?
            }
            Some(FilmsAction::Edit {
                id,
                title,
                description,
                genre,
                rating,
                duration,
                cover,
            }) => commands::films::edit(
                &mut shelf,
                id,
                title,
                description,
                genre,
                rating,
                duration,
                cover,
            )?,
            Some(FilmsAction::Rm { id }) => commands::films::rm(&mut shelf, id)?,
            Some(FilmsAction::Show { id }) => commands::films::show(&shelf, id)?,
        },
        Commands::Wishlist { action } => match action {
            None => commands::wishlist::list(&shelf)?,
            Some(WishlistAction::Add {
                title,
                description,
                genre,
                duration,
                cover,
            }) => commands::wishlist::add(&mut shelf, title, description, genre, duration, cover)?,
            Some(WishlistAction::Rm { id }) => commands::wishlist::rm(&mut shelf, id)?,
            Some(WishlistAction::Convert { id, rating, folder }) => {
                commands::wishlist::convert(&mut shelf, id, rating, folder)?
            }
        },
        Commands::Ranking => commands::films::ranking(&shelf)?,
        Commands::Search { query } => commands::films::search(&shelf, query)?,
        Commands::Stats => commands::stats::run(&shelf)?,
    }

    Ok(())
}
