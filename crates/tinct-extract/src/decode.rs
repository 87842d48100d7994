//! Image decoding
//!
//! Wraps the `image` crate behind two entry points, one for files and
//! one for in-memory bytes. Both return RGBA buffers, and both shrink
//! oversized images before handing them to the sampler so that the
//! pixel count stays near the sampling budget.

use std::path::Path;

use image::{DynamicImage, GenericImageView, RgbaImage, imageops::FilterType};

use crate::error::ExtractResult;

/// Pixel count above which a decoded image is downscaled, 4x the
/// default sampling budget.
pub const MAX_DECODE_PIXELS: u64 = 40_000;

/// Decode an image file into an RGBA buffer.
///
/// Any format the `image` crate recognizes is accepted.
///
/// # Errors
///
/// Returns [`ExtractError::Io`](crate::ExtractError::Io) if the file
/// cannot be read, or [`ExtractError::Decode`](crate::ExtractError::Decode)
/// if its contents are not a decodable image.
pub fn load_rgba(path: impl AsRef<Path>) -> ExtractResult<RgbaImage> {
    let img = image::open(path)?;
    Ok(shrink_to_budget(img))
}

/// Decode in-memory image bytes into an RGBA buffer.
///
/// The format is guessed from the content.
///
/// # Errors
///
/// Returns [`ExtractError::Decode`](crate::ExtractError::Decode) if the
/// bytes are not a decodable image.
pub fn load_rgba_from_bytes(bytes: &[u8]) -> ExtractResult<RgbaImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(shrink_to_budget(img))
}

/// Downscale (nearest neighbor) so the pixel count lands on the
/// [`MAX_DECODE_PIXELS`] budget. Extraction only looks at color
/// frequency, so nearest keeps the original colors unblended.
fn shrink_to_budget(img: DynamicImage) -> RgbaImage {
    let (width, height) = img.dimensions();
    let pixels = u64::from(width) * u64::from(height);
    if pixels <= MAX_DECODE_PIXELS {
        return img.to_rgba8();
    }

    let scale = (MAX_DECODE_PIXELS as f64 / pixels as f64).sqrt();
    let new_width = ((f64::from(width) * scale).round() as u32).max(1);
    let new_height = ((f64::from(height) * scale).round() as u32).max(1);
    img.resize_exact(new_width, new_height, FilterType::Nearest)
        .to_rgba8()
}
