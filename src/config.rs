//! Configuration for the scan ingestion pipeline.
//!
//! Only the limits of the image boundary are tunable. Classification
//! thresholds and pH bands are fixed in [`crate::constants`].
//!
//! ```no_run
//! use woundscan::ScanConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ScanConfig::from_json_file(Path::new("scan.json"))?;
//!
//! // Or use defaults
//! let config = ScanConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::constants::sampling;

/// Complete ingestion configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Image sampling limits
    #[serde(default)]
    pub sampler: SamplerConfig,
}

/// Limits applied before and during image decoding.
///
/// Oversized or unaccepted images fail the same way as undecodable ones, so the
/// manual-color fallback still applies to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Maximum size of the submitted image in bytes
    pub max_image_bytes: usize,

    /// Maximum decoded width and height in pixels
    pub max_image_dimension: u32,

    /// Accepted container formats by extension name: "jpeg", "png", "webp"
    pub accepted_formats: Vec<String>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: sampling::DEFAULT_MAX_IMAGE_BYTES,
            max_image_dimension: sampling::DEFAULT_MAX_IMAGE_DIMENSION,
            accepted_formats: vec!["jpeg".to_string(), "png".to_string(), "webp".to_string()],
        }
    }
}

impl SamplerConfig {
    /// Check whether a detected container format is accepted
    pub fn accepts(&self, format: ImageFormat) -> bool {
        format.extensions_str().iter().any(|ext| {
            self.accepted_formats
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
    }
}

impl ScanConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accepts_upload_formats() {
        let config = SamplerConfig::default();
        assert!(config.accepts(ImageFormat::Jpeg));
        assert!(config.accepts(ImageFormat::Png));
        assert!(config.accepts(ImageFormat::WebP));
        assert!(!config.accepts(ImageFormat::Gif));
        assert!(!config.accepts(ImageFormat::Bmp));
    }

    #[test]
    fn test_accepts_jpg_alias() {
        let config = SamplerConfig {
            accepted_formats: vec!["JPG".to_string()],
            ..SamplerConfig::default()
        };
        assert!(config.accepts(ImageFormat::Jpeg));
        assert!(!config.accepts(ImageFormat::Png));
    }

    #[test]
    fn test_json_roundtrip_with_missing_section() {
        let config: ScanConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ScanConfig::default());

        let custom = ScanConfig {
            sampler: SamplerConfig {
                max_image_bytes: 1024,
                ..SamplerConfig::default()
            },
        };
        let json = serde_json::to_string(&custom).unwrap();
        let back: ScanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sampler.max_image_bytes, 1024);
    }
}
