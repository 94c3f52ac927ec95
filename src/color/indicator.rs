//! Indicator pad vocabulary and raw RGB samples

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{Result, ScanError};

/// Representative RGB triple of an image, channels in [0, 255]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RgbSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbSample {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hexadecimal representation (e.g., "#FFEB3B")
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<RgbSample> for Srgb<u8> {
    fn from(sample: RgbSample) -> Self {
        Srgb::new(sample.r, sample.g, sample.b)
    }
}

impl From<Srgb<u8>> for RgbSample {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

/// Discrete states of the colorimetric indicator pad.
///
/// This is the whole vocabulary of the risk mapper. Strings are parsed strictly:
/// `Yellow`, `Green`, `Blue`, `DarkBlue`, plus the legacy spelling `Dark Blue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorColor {
    Yellow,
    Green,
    Blue,
    #[serde(alias = "Dark Blue")]
    DarkBlue,
}

impl IndicatorColor {
    /// Every indicator color in order of increasing pH
    pub const ALL: [IndicatorColor; 4] = [
        IndicatorColor::Yellow,
        IndicatorColor::Green,
        IndicatorColor::Blue,
        IndicatorColor::DarkBlue,
    ];

    /// Canonical name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorColor::Yellow => "Yellow",
            IndicatorColor::Green => "Green",
            IndicatorColor::Blue => "Blue",
            IndicatorColor::DarkBlue => "DarkBlue",
        }
    }

    /// Comma-separated list of accepted names for caller-facing messages
    pub fn allowed_names() -> &'static str {
        "Yellow, Green, Blue, DarkBlue"
    }

    /// Display swatch approximating how the pad looks in this state
    pub fn swatch(&self) -> Srgb<u8> {
        match self {
            IndicatorColor::Yellow => Srgb::new(255, 235, 59),
            IndicatorColor::Green => Srgb::new(76, 175, 80),
            IndicatorColor::Blue => Srgb::new(33, 150, 243),
            IndicatorColor::DarkBlue => Srgb::new(13, 71, 161),
        }
    }
}

impl fmt::Display for IndicatorColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorColor {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Yellow" => Ok(IndicatorColor::Yellow),
            "Green" => Ok(IndicatorColor::Green),
            "Blue" => Ok(IndicatorColor::Blue),
            "DarkBlue" | "Dark Blue" => Ok(IndicatorColor::DarkBlue),
            other => Err(ScanError::InvalidColor {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for color in IndicatorColor::ALL {
            assert_eq!(color.as_str().parse::<IndicatorColor>().unwrap(), color);
        }
        assert_eq!("Dark Blue".parse::<IndicatorColor>().unwrap(), IndicatorColor::DarkBlue);
    }

    #[test]
    fn test_parse_rejects_unknown_and_case_variants() {
        for bad in ["Purple", "yellow", "GREEN", "", " Blue", "Darkblue"] {
            let err = bad.parse::<IndicatorColor>().unwrap_err();
            assert!(matches!(err, ScanError::InvalidColor { ref value } if value == bad));
        }
    }

    #[test]
    fn test_serde_accepts_legacy_spelling() {
        let color: IndicatorColor = serde_json::from_str("\"Dark Blue\"").unwrap();
        assert_eq!(color, IndicatorColor::DarkBlue);
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"DarkBlue\"");
    }

    #[test]
    fn test_sample_hex_and_palette_conversion() {
        let sample = RgbSample::new(255, 235, 59);
        assert_eq!(sample.hex(), "#FFEB3B");

        let srgb: Srgb<u8> = sample.into();
        assert_eq!(RgbSample::from(srgb), sample);
        assert_eq!(RgbSample::from(IndicatorColor::Yellow.swatch()), sample);
    }

    #[test]
    fn test_default_sample_is_zeroed() {
        assert_eq!(RgbSample::default(), RgbSample::new(0, 0, 0));
    }
}
