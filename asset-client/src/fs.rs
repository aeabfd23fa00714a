//! Local-directory asset source

use crate::error::{AssetError, AssetResult};
use crate::traits::AssetSource;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};

/// Reject paths that could leave the asset base.
pub(crate) fn check_relative(path: &str) -> AssetResult<&Path> {
    let rel = Path::new(path);
    let escapes = path.is_empty()
        || rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(AssetError::InvalidPath(path.to_string()));
    }
    Ok(rel)
}

/// Serves assets from a directory tree, e.g. a checkout of the board scans.
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> AssetResult<Self> {
        let root = root.into();
        if root.as_os_str().is_empty() {
            return Err(AssetError::InvalidBase("empty directory path".to_string()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl AssetSource for FsAssetSource {
    async fn fetch(&self, path: &str) -> AssetResult<Bytes> {
        let full = self.root.join(check_relative(path)?);
        tracing::debug!(path = %full.display(), "Reading asset");
        match tokio::fs::read(&full).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AssetError::NotFound(path.to_string()))
            }
            Err(e) => Err(AssetError::Io(e)),
        }
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
