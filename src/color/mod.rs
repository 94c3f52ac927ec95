//! Indicator color vocabulary, image sampling and classification
//!
//! Images become an [`RgbSample`] in [`sampler`], which [`classifier`] maps to
//! an [`IndicatorColor`].

pub mod indicator;
pub mod sampler;
pub mod classifier;

pub use indicator::{IndicatorColor, RgbSample};
pub use sampler::sample_image;
pub use classifier::classify;
