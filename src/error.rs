use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unexpected catalog shape: {0}")]
    CatalogShape(String),

    #[error("Could not read {file}: {reason}")]
    Ingest { file: String, reason: String },
}
