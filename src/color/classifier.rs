//! Heuristic indicator color classification
//!
//! Maps an averaged RGB sample to one of the four indicator states. Rule
//! order and thresholds are fixed, including the DarkBlue thresholds that a
//! normalized channel can never reach.

use crate::color::{IndicatorColor, RgbSample};
use crate::constants::thresholds::*;

/// RGB sample with each channel linearly rescaled to 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedRgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl NormalizedRgb {
    /// `round(channel / 255 * 100)` per channel
    pub fn from_sample(sample: RgbSample) -> Self {
        Self {
            red: normalize_channel(sample.r),
            green: normalize_channel(sample.g),
            blue: normalize_channel(sample.b),
        }
    }
}

fn normalize_channel(channel: u8) -> u8 {
    // Always in 0..=100, never a half-way case
    (f64::from(channel) / 255.0 * NORMALIZED_SCALE).round() as u8
}

/// Classify an RGB sample. Pure and total: every input maps to exactly one color.
pub fn classify(sample: RgbSample) -> IndicatorColor {
    let NormalizedRgb { red, green, blue } = NormalizedRgb::from_sample(sample);

    if red > YELLOW_MIN_RED && green > YELLOW_MIN_GREEN && blue < YELLOW_MAX_BLUE {
        return IndicatorColor::Yellow;
    } else if red < GREEN_MAX_RED && green > GREEN_MIN_GREEN && blue < GREEN_MAX_BLUE {
        return IndicatorColor::Green;
    } else if red < BLUE_MAX_RED && green < BLUE_MAX_GREEN && blue > BLUE_MIN_BLUE {
        return IndicatorColor::Blue;
    } else if red < DARK_BLUE_MAX_RED
        && green < DARK_BLUE_MAX_GREEN
        // Unreachable: blue is at most 100 after normalization. Kept as observed;
        // it may have been meant for the raw 0-255 channel.
        && blue > DARK_BLUE_MIN_BLUE
    {
        return IndicatorColor::DarkBlue;
    }

    // Dominant channel fallback
    if red > green && red > blue {
        IndicatorColor::Yellow
    } else if green > red && green > blue {
        IndicatorColor::Green
    } else if blue > red && blue > green {
        // `blue > 100` is unreachable for the same reason as above
        if blue > DARK_BLUE_MIN_BLUE || (red < DARK_BLUE_MAX_RED && green < DARK_BLUE_MAX_GREEN) {
            IndicatorColor::DarkBlue
        } else {
            IndicatorColor::Blue
        }
    } else {
        IndicatorColor::Green
    }
}
