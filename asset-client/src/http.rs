//! HTTP asset source

use crate::error::{AssetError, AssetResult};
use crate::fs::check_relative;
use crate::traits::AssetSource;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;

/// Fetches assets with plain GET requests below a base URL.
#[derive(Debug, Clone)]
pub struct HttpAssetSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAssetSource {
    pub fn new(base_url: &str) -> AssetResult<Self> {
        let trimmed = base_url.trim();
        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| AssetError::InvalidBase(base_url.to_string()))?;
        if rest.trim_matches('/').is_empty() {
            return Err(AssetError::InvalidBase(base_url.to_string()));
        }

        let base_url = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{}/", trimmed)
        };
        let client = reqwest::Client::builder().build()?;

        Ok(Self { base_url, client })
    }

    /// Full URL for a relative asset path.
    pub fn url_for(&self, path: &str) -> AssetResult<String> {
        check_relative(path)?;
        Ok(format!("{}{}", self.base_url, path.trim_start_matches("./")))
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    async fn fetch(&self, path: &str) -> AssetResult<Bytes> {
        let url = self.url_for(path)?;
        tracing::debug!(url = %url, "Requesting asset");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AssetError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(AssetError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_gets_trailing_slash() {
        let source = HttpAssetSource::new("https://example.com/NintendoPCB").unwrap();
        assert_eq!(
            source.url_for("DMG-A02/scans/front.png").unwrap(),
            "https://example.com/NintendoPCB/DMG-A02/scans/front.png"
        );
    }

    #[test]
    fn test_invalid_bases() {
        assert!(matches!(
            HttpAssetSource::new("ftp://example.com"),
            Err(AssetError::InvalidBase(_))
        ));
        assert!(matches!(
            HttpAssetSource::new("http://"),
            Err(AssetError::InvalidBase(_))
        ));
    }

    #[test]
    fn test_url_for_rejects_parent_segments() {
        let source = HttpAssetSource::new("http://localhost:8000/").unwrap();
        assert!(matches!(
            source.url_for("../etc/passwd"),
            Err(AssetError::InvalidPath(_))
        ));
    }
}
