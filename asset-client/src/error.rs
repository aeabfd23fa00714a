//! Error types for asset retrieval

use thiserror::Error;

pub type AssetResult<T> = Result<T, AssetError>;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Asset request for {path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Asset path escapes the asset base: {0}")]
    InvalidPath(String),

    #[error("Invalid asset base: {0}")]
    InvalidBase(String),

    #[error("Mock response not configured for: {0}")]
    NotConfigured(String),
}

impl AssetError {
    /// True when the asset is plainly absent, as opposed to unreachable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AssetError::NotFound(_))
    }
}
