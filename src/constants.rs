//! Sampling, classification and risk-mapping constants
//!
//! All tables here are process-wide, read-only data. The classifier thresholds
//! and pH bands reproduce the reference indicator heuristic exactly and must not
//! be tuned.

/// Image sampling parameters
pub mod sampling {
    /// Edge length of the square grid every image is resampled to
    pub const GRID_SIZE: u32 = 100;

    /// Default ceiling on submitted image size (10 MiB)
    pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

    /// Default ceiling on decoded width and height
    pub const DEFAULT_MAX_IMAGE_DIMENSION: u32 = 8192;
}

/// Classifier thresholds, expressed on channels normalized to 0-100
pub mod thresholds {
    /// Full scale of a normalized channel
    pub const NORMALIZED_SCALE: f64 = 100.0;

    pub const YELLOW_MIN_RED: u8 = 80;
    pub const YELLOW_MIN_GREEN: u8 = 60;
    pub const YELLOW_MAX_BLUE: u8 = 40;

    pub const GREEN_MAX_RED: u8 = 60;
    pub const GREEN_MIN_GREEN: u8 = 80;
    pub const GREEN_MAX_BLUE: u8 = 80;

    pub const BLUE_MAX_RED: u8 = 60;
    pub const BLUE_MAX_GREEN: u8 = 80;
    pub const BLUE_MIN_BLUE: u8 = 80;

    pub const DARK_BLUE_MAX_RED: u8 = 50;
    pub const DARK_BLUE_MAX_GREEN: u8 = 50;
    /// Never exceeded by a normalized channel; kept for parity with the reference heuristic
    pub const DARK_BLUE_MIN_BLUE: u8 = 100;
}

/// pH bands of the indicator pad, inclusive on both ends
pub mod ph {
    pub const YELLOW_BAND: (f64, f64) = (5.5, 6.5);
    pub const GREEN_BAND: (f64, f64) = (6.6, 7.2);
    pub const BLUE_BAND: (f64, f64) = (7.3, 8.0);
    pub const DARK_BLUE_BAND: (f64, f64) = (8.1, 14.0);

    /// Lowest pH with a defined infection level
    pub const OBSERVABLE_MIN: f64 = YELLOW_BAND.0;
    /// Highest pH with a defined infection level
    pub const OBSERVABLE_MAX: f64 = DARK_BLUE_BAND.1;

    /// Full pH scale bounds for a stored estimate
    pub const SCALE_MIN: f64 = 0.0;
    pub const SCALE_MAX: f64 = 14.0;
}
