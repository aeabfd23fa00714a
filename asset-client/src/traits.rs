//! AssetSource trait abstraction for asset backends

use crate::error::AssetResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Read-only access to board assets.
/// Implemented by the filesystem and HTTP sources, and by MockAssetSource
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Fetch the asset at `path`, relative to the source's base
    async fn fetch(&self, path: &str) -> AssetResult<Bytes>;

    /// Check whether the asset at `path` exists
    async fn probe(&self, path: &str) -> AssetResult<bool> {
        match self.fetch(path).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Human-readable base, for logs
    fn describe(&self) -> String;
}
