//! Core types for ThumbHash encoding.

use thiserror::Error;

/// Largest accepted edge length, in pixels, for the encoder input.
pub const MAX_DIMENSION: u32 = 100;

/// Bytes per pixel in the RGBA input buffer.
pub const BYTES_PER_PIXEL: usize = 4;

/// Error types for ThumbHash encoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Width or height is zero or exceeds [`MAX_DIMENSION`].
    #[error("Invalid dimensions: {width}x{height} (each edge must be between 1 and 100)")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length doesn't match width * height * 4.
    #[error("Buffer size mismatch: expected {expected} bytes (width * height * 4), got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// The source image for the downscale helper has no pixels.
    #[error("Cannot prepare an empty image for hashing")]
    InvalidResizeTarget,
}

/// Check that both edges are within `1..=MAX_DIMENSION`.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// A borrowed, validated RGBA image.
///
/// Pixels are row-major, 4 bytes per pixel, not premultiplied.
#[derive(Debug, Clone, Copy)]
pub struct RgbaView<'a> {
    width: u32,
    height: u32,
    pixels: &'a [u8],
}

impl<'a> RgbaView<'a> {
    /// Wrap a caller buffer after checking dimensions and length.
    ///
    /// Dimensions are checked first, so an oversized image reports
    /// `InvalidDimensions` even when its buffer is also the wrong length.
    pub fn new(width: u32, height: u32, pixels: &'a [u8]) -> Result<Self, EncodeError> {
        validate_dimensions(width, height)?;

        let expected = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(EncodeError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Iterate over pixels as `[r, g, b, a]` slices.
    pub fn rgba_pixels(&self) -> impl Iterator<Item = &'a [u8]> {
        self.pixels.chunks_exact(BYTES_PER_PIXEL)
    }
}
