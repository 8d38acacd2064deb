use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unrecognized month name: {0}")]
    InvalidMonth(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("No metadata for id: {0}")]
    MissingMetadata(String),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
