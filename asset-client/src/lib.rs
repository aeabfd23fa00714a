//! Asset retrieval for board scans and schematics.
//!
//! Assets are addressed by paths relative to a base, which is either a local
//! directory or an HTTP(S) URL. The only contract a caller relies on is
//! "bytes came back" or "they did not".
//!
//! # Example
//!
//! ```no_run
//! use asset_client::{open_source, AssetSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = open_source("NintendoPCB")?;
//!     let present = source.probe("DMG-A02/DMG-A02.schematic").await?;
//!     println!("schematic present: {}", present);
//!     Ok(())
//! }
//! ```

mod error;
mod fs;
mod http;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod traits;

pub use error::{AssetError, AssetResult};
pub use fs::FsAssetSource;
pub use http::HttpAssetSource;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockAssetSource, MockCall};
pub use traits::AssetSource;

pub use bytes::Bytes;

use std::sync::Arc;

/// Open a source for `base`: HTTP for `http://` and `https://` URLs, the local
/// filesystem for anything else.
pub fn open_source(base: &str) -> AssetResult<Arc<dyn AssetSource>> {
    if base.starts_with("http://") || base.starts_with("https://") {
        Ok(Arc::new(HttpAssetSource::new(base)?))
    } else {
        Ok(Arc::new(FsAssetSource::new(base)?))
    }
}
