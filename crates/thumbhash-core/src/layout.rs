//! Hash layout: grid sizes and byte counts derived from dimensions alone.
//!
//! The encoder takes its grid bounds from [`HashLayout`], so the predicted
//! length always equals the length of the encoded hash.

use serde::Serialize;

use crate::dct::ac_count;
use crate::types::{validate_dimensions, EncodeError};

/// Luminance grid limit along the longer edge for opaque images.
pub const LUMA_LIMIT_OPAQUE: usize = 7;

/// Luminance grid limit along the longer edge when alpha is encoded.
pub const LUMA_LIMIT_ALPHA: usize = 5;

/// Smallest luminance grid edge actually used for the DCT.
pub const LUMA_MIN_GRID: usize = 3;

/// Grid edge for the P and Q chrominance channels.
pub const CHROMA_GRID: usize = 3;

/// Grid edge for the alpha channel.
pub const ALPHA_GRID: usize = 5;

/// Header length without the alpha byte.
pub const BASE_HEADER_LEN: usize = 5;

/// Size and structure of the hash for a given image shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HashLayout {
    pub width: u32,
    pub height: u32,
    pub has_alpha: bool,
    /// Wider than tall.
    pub is_landscape: bool,
    /// Luminance resolution along x, stored in the header for portrait images.
    pub lx: usize,
    /// Luminance resolution along y, stored in the header for landscape images.
    pub ly: usize,
    pub luminance_ac: usize,
    /// AC count of each chrominance channel (P and Q are equal).
    pub chroma_ac: usize,
    pub alpha_ac: usize,
    pub header_len: usize,
    pub ac_bytes: usize,
    pub total_len: usize,
}

impl HashLayout {
    /// Compute the layout for an image of the given shape.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError::InvalidDimensions` if either edge is zero or
    /// larger than 100.
    pub fn new(width: u32, height: u32, has_alpha: bool) -> Result<Self, EncodeError> {
        validate_dimensions(width, height)?;

        let (lx, ly) = luminance_resolution(width, height, has_alpha);
        let luminance_ac = ac_count(lx.max(LUMA_MIN_GRID), ly.max(LUMA_MIN_GRID));
        let chroma_ac = ac_count(CHROMA_GRID, CHROMA_GRID);
        let alpha_ac = if has_alpha {
            ac_count(ALPHA_GRID, ALPHA_GRID)
        } else {
            0
        };

        let mut layout = Self {
            width,
            height,
            has_alpha,
            is_landscape: width > height,
            lx,
            ly,
            luminance_ac,
            chroma_ac,
            alpha_ac,
            header_len: BASE_HEADER_LEN + usize::from(has_alpha),
            ac_bytes: 0,
            total_len: 0,
        };
        // Two nibbles per byte; an odd count leaves the last high nibble zero
        layout.ac_bytes = layout.ac_total().div_ceil(2);
        layout.total_len = layout.header_len + layout.ac_bytes;

        Ok(layout)
    }

    /// DCT grid bounds for the L channel.
    pub fn luminance_grid(&self) -> (usize, usize) {
        (self.lx.max(LUMA_MIN_GRID), self.ly.max(LUMA_MIN_GRID))
    }

    /// DCT grid bounds for the A channel, if one is encoded.
    pub fn alpha_grid(&self) -> Option<(usize, usize)> {
        self.has_alpha.then_some((ALPHA_GRID, ALPHA_GRID))
    }

    /// The resolution value stored in the header's size field.
    pub fn header_size_field(&self) -> usize {
        if self.is_landscape {
            self.ly
        } else {
            self.lx
        }
    }

    /// Total number of AC nibbles across all channels.
    pub fn ac_total(&self) -> usize {
        self.luminance_ac + 2 * self.chroma_ac + self.alpha_ac
    }
}

/// Luminance resolution `(lx, ly)` scaled to the aspect ratio.
///
/// The longer edge gets the full limit (7, or 5 with alpha); the shorter edge
/// is scaled down proportionally, never below 1.
pub fn luminance_resolution(width: u32, height: u32, has_alpha: bool) -> (usize, usize) {
    let limit = if has_alpha {
        LUMA_LIMIT_ALPHA
    } else {
        LUMA_LIMIT_OPAQUE
    };
    let longest = (width as f32).max(height as f32);

    let scaled = |edge: u32| -> usize {
        let value = ((limit * edge as usize) as f32 / longest).round() as usize;
        value.max(1)
    };

    (scaled(width), scaled(height))
}
