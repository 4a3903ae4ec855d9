use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParlorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Content error: {0}")]
    ContentError(String),
}

pub type Result<T> = std::result::Result<T, ParlorError>;
