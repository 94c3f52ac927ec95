//! Fixed indicator color → pH → infection level mapping
//!
//! | Color    | pH band     | Estimate | Level           |
//! |----------|-------------|----------|-----------------|
//! | Yellow   | [5.5, 6.5]  | 6.0      | Healthy         |
//! | Green    | [6.6, 7.2]  | 6.9      | MildRisk        |
//! | Blue     | [7.3, 8.0]  | 7.65     | MediumInfection |
//! | DarkBlue | [8.1, 14.0] | 11.05    | HighInfection   |
//!
//! Level lookup by pH works on the ranges directly. The bands are contiguous:
//! a boundary belongs to the lower band, so 6.5 is Healthy and anything above
//! it up to 7.2 is MildRisk.

use serde::Serialize;

use crate::color::IndicatorColor;
use crate::constants::ph::*;
use crate::risk::{InfectionLevel, PhEstimate};
use crate::{Result, ScanError};

struct RiskBand {
    color: IndicatorColor,
    band: (f64, f64),
    level: InfectionLevel,
}

static RISK_TABLE: [RiskBand; 4] = [
    RiskBand {
        color: IndicatorColor::Yellow,
        band: YELLOW_BAND,
        level: InfectionLevel::Healthy,
    },
    RiskBand {
        color: IndicatorColor::Green,
        band: GREEN_BAND,
        level: InfectionLevel::MildRisk,
    },
    RiskBand {
        color: IndicatorColor::Blue,
        band: BLUE_BAND,
        level: InfectionLevel::MediumInfection,
    },
    RiskBand {
        color: IndicatorColor::DarkBlue,
        band: DARK_BLUE_BAND,
        level: InfectionLevel::HighInfection,
    },
];

/// Inclusive pH band printed on the indicator for `color`
pub fn ph_band(color: IndicatorColor) -> (f64, f64) {
    match color {
        IndicatorColor::Yellow => YELLOW_BAND,
        IndicatorColor::Green => GREEN_BAND,
        IndicatorColor::Blue => BLUE_BAND,
        IndicatorColor::DarkBlue => DARK_BLUE_BAND,
    }
}

/// Midpoint of the color's pH band
pub fn color_to_ph(color: IndicatorColor) -> PhEstimate {
    let (min, max) = ph_band(color);
    // Every band lies inside [0, 14]
    PhEstimate((min + max) / 2.0)
}

/// pH estimate for a color given by name, for externally supplied strings
pub fn color_name_to_ph(name: &str) -> Result<PhEstimate> {
    let color: IndicatorColor = name.parse().map_err(|_| ScanError::UnknownColor {
        value: name.to_string(),
    })?;
    Ok(color_to_ph(color))
}

fn band_for_ph(ph: f64) -> Result<&'static RiskBand> {
    if ph.is_nan() || ph < OBSERVABLE_MIN || ph > OBSERVABLE_MAX {
        return Err(ScanError::OutOfRange { ph });
    }
    RISK_TABLE
        .iter()
        .find(|entry| ph <= entry.band.1)
        .ok_or(ScanError::OutOfRange { ph })
}

/// Infection level for a pH value in [5.5, 14.0]
pub fn ph_to_level(ph: f64) -> Result<InfectionLevel> {
    band_for_ph(ph).map(|entry| entry.level)
}

/// Indicator color whose band contains `ph`, for display and reference
pub fn ph_to_color(ph: f64) -> Result<IndicatorColor> {
    band_for_ph(ph).map(|entry| entry.color)
}

/// A color together with the pH and level derived from it.
///
/// Only constructible from a color, so the three values can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    color: IndicatorColor,
    ph: PhEstimate,
    level: InfectionLevel,
}

impl Classification {
    pub fn from_color(color: IndicatorColor) -> Result<Self> {
        let ph = color_to_ph(color);
        let level = ph_to_level(ph.value())?;
        Ok(Self { color, ph, level })
    }

    pub fn color(&self) -> IndicatorColor {
        self.color
    }

    pub fn ph(&self) -> PhEstimate {
        self.ph
    }

    pub fn level(&self) -> InfectionLevel {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries_match_bands() {
        for entry in &RISK_TABLE {
            assert_eq!(entry.band, ph_band(entry.color));
        }
    }

    #[test]
    fn test_color_to_ph_midpoints() {
        assert_eq!(color_to_ph(IndicatorColor::Yellow).rounded(), 6.0);
        assert_eq!(color_to_ph(IndicatorColor::Green).rounded(), 6.9);
        assert_eq!(color_to_ph(IndicatorColor::Blue).rounded(), 7.65);
        assert_eq!(color_to_ph(IndicatorColor::DarkBlue).rounded(), 11.05);
    }

    #[test]
    fn test_forward_mapping_levels() {
        let expected = [
            (IndicatorColor::Yellow, InfectionLevel::Healthy),
            (IndicatorColor::Green, InfectionLevel::MildRisk),
            (IndicatorColor::Blue, InfectionLevel::MediumInfection),
            (IndicatorColor::DarkBlue, InfectionLevel::HighInfection),
        ];
        for (color, level) in expected {
            assert_eq!(ph_to_level(color_to_ph(color).value()).unwrap(), level);
            assert_eq!(ph_to_color(color_to_ph(color).value()).unwrap(), color);
        }
    }

    #[test]
    fn test_boundary_ownership() {
        let cases = [
            (5.5, InfectionLevel::Healthy),
            (6.5, InfectionLevel::Healthy),
            (6.55, InfectionLevel::MildRisk),
            (6.6, InfectionLevel::MildRisk),
            (7.2, InfectionLevel::MildRisk),
            (7.25, InfectionLevel::MediumInfection),
            (7.3, InfectionLevel::MediumInfection),
            (8.0, InfectionLevel::MediumInfection),
            (8.05, InfectionLevel::HighInfection),
            (8.1, InfectionLevel::HighInfection),
            (14.0, InfectionLevel::HighInfection),
        ];
        for (ph, level) in cases {
            assert_eq!(ph_to_level(ph).unwrap(), level, "pH {ph}");
        }
    }

    #[test]
    fn test_out_of_range_fails() {
        for ph in [5.49, 0.0, -1.0, 14.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(ph_to_level(ph), Err(ScanError::OutOfRange { .. })), "pH {ph}");
            assert!(ph_to_color(ph).is_err());
        }
    }

    #[test]
    fn test_color_name_to_ph() {
        assert_eq!(color_name_to_ph("Yellow").unwrap().rounded(), 6.0);
        assert_eq!(color_name_to_ph("Dark Blue").unwrap().rounded(), 11.05);
        for bad in ["Red", "yellow", "", "Unknown"] {
            let err = color_name_to_ph(bad).unwrap_err();
            assert!(matches!(err, ScanError::UnknownColor { ref value } if value == bad));
        }
    }

    #[test]
    fn test_classification_is_consistent() {
        for color in IndicatorColor::ALL {
            let c = Classification::from_color(color).unwrap();
            assert_eq!(c.color(), color);
            assert_eq!(c.ph(), color_to_ph(color));
            assert_eq!(c.level(), ph_to_level(c.ph().value()).unwrap());
        }
    }
}
