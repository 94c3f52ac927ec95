//! Representative color sampling from raw image bytes
//!
//! Every image is decoded, cover-scaled onto a fixed square grid (aspect
//! filling, center crop, no letterboxing) and averaged channel by channel.
//! Cropping to the centered square before resampling keeps the cost bounded
//! by the decoded size, never by the aspect ratio.
//!
//! The decoded buffer never leaves [`sample_image`]; it is dropped on every
//! exit path, including the error ones.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, Limits};
use tracing::debug;

use crate::color::RgbSample;
use crate::config::SamplerConfig;
use crate::constants::sampling::GRID_SIZE;
use crate::{Result, ScanError};

/// Decode `bytes` and return the mean color of the sampling grid.
///
/// # Errors
///
/// Returns `ScanError::ImageDecode` if:
/// - the payload exceeds `max_image_bytes`
/// - the container format is not recognized or not accepted
/// - decoding fails or exceeds `max_image_dimension`
/// - the decoded image has no pixels
pub fn sample_image(bytes: &[u8], config: &SamplerConfig) -> Result<RgbSample> {
    if bytes.len() > config.max_image_bytes {
        return Err(ScanError::ImageDecode {
            message: format!(
                "image is {} bytes (limit {} bytes)",
                bytes.len(),
                config.max_image_bytes
            ),
            source: None,
        });
    }

    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ScanError::image_decode("Failed to read image header", e))?;

    let format = reader.format().ok_or_else(|| ScanError::ImageDecode {
        message: "unrecognized image format".to_string(),
        source: None,
    })?;

    if !config.accepts(format) {
        return Err(ScanError::ImageDecode {
            message: format!("{:?} images are not accepted", format),
            source: None,
        });
    }

    let mut limits = Limits::default();
    limits.max_image_width = Some(config.max_image_dimension);
    limits.max_image_height = Some(config.max_image_dimension);
    reader.limits(limits);

    let decoded = reader
        .decode()
        .map_err(|e| ScanError::image_decode(format!("Failed to decode {:?} image", format), e))?;

    debug!(
        format = ?format,
        width = decoded.width(),
        height = decoded.height(),
        "decoded image for sampling"
    );

    average_color(&decoded)
}

/// Mean color of an already decoded image after cover-scaling to the grid.
pub fn average_color(image: &DynamicImage) -> Result<RgbSample> {
    if image.width() == 0 || image.height() == 0 {
        return Err(zero_pixels());
    }

    // Center square first: resampling never produces more than the grid,
    // whatever the aspect ratio
    let (width, height) = (image.width(), image.height());
    let side = width.min(height);
    let square = image.crop_imm((width - side) / 2, (height - side) / 2, side, side);

    // Alpha is dropped before resampling so it cannot weight the color channels
    let opaque = DynamicImage::ImageRgb8(square.to_rgb8());
    let grid = opaque
        .resize_exact(GRID_SIZE, GRID_SIZE, FilterType::Triangle)
        .to_rgb8();

    let count = u64::from(grid.width()) * u64::from(grid.height());
    if count == 0 {
        return Err(zero_pixels());
    }

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for pixel in grid.pixels() {
        r += u64::from(pixel[0]);
        g += u64::from(pixel[1]);
        b += u64::from(pixel[2]);
    }

    let sample = RgbSample::new(
        rounded_mean(r, count),
        rounded_mean(g, count),
        rounded_mean(b, count),
    );
    debug!(rgb = %sample.hex(), pixels = count, "sampled average color");
    Ok(sample)
}

fn zero_pixels() -> ScanError {
    ScanError::ImageDecode {
        message: "image has no samplable pixels".to_string(),
        source: None,
    }
}

/// Integer mean rounded half up; `count` is non-zero and every summand is <= 255
fn rounded_mean(sum: u64, count: u64) -> u8 {
    ((sum + count / 2) / count) as u8
}
