//! Downscaling arbitrary images to fit the encoder's 100x100 limit.
//!
//! The encoder itself never resizes. These helpers take an in-memory image of
//! any size, shrink it with the `image` crate when needed, and hash the result.

use tracing::debug;

use crate::encode::encode;
use crate::types::{EncodeError, BYTES_PER_PIXEL, MAX_DIMENSION};

pub use image::imageops::FilterType;

/// Filter used when the caller has no preference.
pub const DEFAULT_FILTER: FilterType = FilterType::Triangle;

/// Hash an image of any size.
///
/// Images with an edge longer than 100 pixels are scaled down, preserving
/// aspect ratio, before encoding. Smaller images are never upscaled.
///
/// # Errors
///
/// Returns `EncodeError::InvalidResizeTarget` if the image has no pixels.
pub fn thumbhash_from_image(
    image: &image::DynamicImage,
    filter: FilterType,
) -> Result<Vec<u8>, EncodeError> {
    let rgba = image.to_rgba8();
    hash_rgba_image(&rgba, filter)
}

/// Hash a raw RGBA buffer of any size.
///
/// # Errors
///
/// * `EncodeError::InvalidResizeTarget` if either edge is zero
/// * `EncodeError::BufferSizeMismatch` if `pixels` isn't `width * height * 4` bytes
pub fn thumbhash_from_rgba(
    width: u32,
    height: u32,
    pixels: &[u8],
    filter: FilterType,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidResizeTarget);
    }

    let expected = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
    if pixels.len() != expected {
        return Err(EncodeError::BufferSizeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    // Fast path: already small enough, no copy needed
    if width <= MAX_DIMENSION && height <= MAX_DIMENSION {
        return encode(width, height, pixels);
    }

    let rgba = image::RgbaImage::from_raw(width, height, pixels.to_vec()).ok_or(
        EncodeError::BufferSizeMismatch {
            expected,
            actual: pixels.len(),
        },
    )?;
    hash_rgba_image(&rgba, filter)
}

fn hash_rgba_image(rgba: &image::RgbaImage, filter: FilterType) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidResizeTarget);
    }

    if width <= MAX_DIMENSION && height <= MAX_DIMENSION {
        return encode(width, height, rgba.as_raw());
    }

    let (new_width, new_height) = fit_dimensions(width, height, MAX_DIMENSION);
    debug!(width, height, new_width, new_height, "downscaling image for thumbhash");

    let resized = image::imageops::resize(rgba, new_width, new_height, filter);
    encode(new_width, new_height, resized.as_raw())
}

/// Shrink `(width, height)` so the longer edge is at most `max_edge`.
///
/// Both edges are scaled by the same factor and rounded, never below 1.
/// Shapes that already fit come back unchanged.
pub fn fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    let longest = width.max(height);
    if longest <= max_edge {
        return (width, height);
    }

    let factor = f64::from(max_edge) / f64::from(longest);
    let shrink = |edge: u32| ((f64::from(edge) * factor).round() as u32).clamp(1, max_edge);
    (shrink(width), shrink(height))
}
