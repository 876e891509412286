use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadingError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    WalkDir(#[from] async_walkdir::Error),
    #[error("Invalid URL: {0}")]
    InvalidURL(String),
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
}
