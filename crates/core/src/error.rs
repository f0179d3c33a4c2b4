use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("folder not found: {0}")]
    FolderNotFound(String),

    #[error("film not found: {0}")]
    FilmNotFound(String),

    #[error("wish not found: {0}")]
    WishNotFound(String),

    #[error("folder name must not be empty")]
    EmptyFolderName,

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("duration must be at least one minute, got {0}")]
    InvalidDuration(u32),

    #[error("film {film_id} is already filed in folder {folder_id}")]
    AlreadyFiled { film_id: String, folder_id: String },

    #[error("cover image does not exist: {}", .0.display())]
    CoverNotFound(PathBuf),

    #[error("unknown genre: {0}")]
    UnknownGenre(String),
}

pub type Result<T> = std::result::Result<T, Error>;
