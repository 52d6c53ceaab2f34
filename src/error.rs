use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadlError {
    #[error("Expected top-level type \"FeatureCollection\", found {found}")]
    NotAFeatureCollection { found: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RadlError>;
