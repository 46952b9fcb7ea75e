// crates/explorer-core/src/error.rs
use thiserror::Error;

/// Errors raised inside the core.
///
/// Most of these never reach callers of the gateway or the store: those
/// boundaries log the error and degrade to an empty/`None` result instead.
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("{0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "compact")]
    #[error("Cache encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
