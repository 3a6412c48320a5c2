use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Unknown timezone '{name}'")]
    Timezone { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, DiningError>;
