//! Decoded board scans.

use catalog::AssetKind;
use image::{imageops::FilterType, RgbImage};

/// Scans larger than this (in either dimension) are downsampled on decode.
/// Terminal cells are far coarser than this, even in the zoom overlay.
const MAX_SCAN_DIMENSION: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanSide {
    Front,
    Back,
}

impl ScanSide {
    pub fn kind(&self) -> AssetKind {
        match self {
            ScanSide::Front => AssetKind::FrontScan,
            ScanSide::Back => AssetKind::BackScan,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScanSide::Front => "Front",
            ScanSide::Back => "Back",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to decode scan {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// An RGB scan ready for terminal rendering.
#[derive(Debug, Clone)]
pub struct ScanImage {
    pub path: String,
    image: RgbImage,
}

impl ScanImage {
    pub fn decode(path: &str, bytes: &[u8]) -> Result<Self, ScanError> {
        let decoded = image::load_from_memory(bytes).map_err(|source| ScanError::Decode {
            path: path.to_string(),
            source,
        })?;

        let decoded = if decoded.width() > MAX_SCAN_DIMENSION
            || decoded.height() > MAX_SCAN_DIMENSION
        {
            decoded.resize(MAX_SCAN_DIMENSION, MAX_SCAN_DIMENSION, FilterType::Triangle)
        } else {
            decoded
        };

        Ok(Self {
            path: path.to_string(),
            image: decoded.to_rgb8(),
        })
    }

    pub fn from_rgb(path: &str, image: RgbImage) -> Self {
        Self {
            path: path.to_string(),
            image,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Nearest-neighbour sample at fractional coordinates in `[0, 1)`.
    pub fn sample(&self, fx: f32, fy: f32) -> [u8; 3] {
        let x = ((fx * self.width() as f32) as u32).min(self.width().saturating_sub(1));
        let y = ((fy * self.height() as f32) as u32).min(self.height().saturating_sub(1));
        self.image.get_pixel(x, y).0
    }
}
