//! ThumbHash Core - compact image placeholder encoder
//!
//! This crate turns a small RGBA image (at most 100x100) into a ThumbHash:
//! a fingerprint of roughly 20 bytes describing its dominant colors and coarse structure,
//! enough to paint a blurred placeholder before the real image loads.
//!
//! # Pipeline
//!
//! 1. [`average`] - alpha-weighted average color
//! 2. [`color`] - RGBA to LPQA, composited over the average color
//! 3. [`dct`] - truncated forward DCT per channel
//! 4. [`quantize`] - header fields, rounded half away from zero
//! 5. [`pack`] - AC coefficients as 4-bit nibbles, L, P, Q then A
//!
//! Only the encode direction is implemented.
//!
//! # Examples
//!
//! ```ignore
//! use thumbhash_core::{encode, HashLayout};
//!
//! let pixels = vec![128u8; 32 * 24 * 4];
//! let hash = encode(32, 24, &pixels).unwrap();
//! assert_eq!(hash.len(), HashLayout::new(32, 24, false).unwrap().total_len);
//! ```

pub mod average;
pub mod color;
pub mod dct;
pub mod encode;
pub mod layout;
pub mod pack;
pub mod quantize;
pub mod resize;
pub mod types;

pub use encode::{encode, encode_view};
pub use layout::HashLayout;
pub use resize::{
    fit_dimensions, thumbhash_from_image, thumbhash_from_rgba, FilterType, DEFAULT_FILTER,
};
pub use types::{EncodeError, RgbaView, MAX_DIMENSION};
