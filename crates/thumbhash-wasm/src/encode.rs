//! Hash encoding WASM bindings.
//!
//! # Functions
//!
//! - [`rgba_to_thumbhash`] - Hash RGBA pixel data up to 100x100
//! - [`rgba_to_thumbhash_fit`] - Hash RGBA pixel data of any size
//!
//! # Example
//!
//! ```typescript
//! import { rgba_to_thumbhash, rgba_to_thumbhash_fit } from '@thumbhash/wasm';
//!
//! // Pixels already scaled to fit 100x100
//! const hash = rgba_to_thumbhash(width, height, pixels);
//!
//! // Full-size canvas data, downscaled inside WASM
//! const hash = rgba_to_thumbhash_fit(canvas.width, canvas.height, pixels);
//! ```

use thumbhash_core::{encode, thumbhash_from_rgba, DEFAULT_FILTER};
use wasm_bindgen::prelude::*;

/// Encode RGBA pixel data to ThumbHash bytes.
///
/// # Arguments
///
/// * `width` - Image width in pixels (1-100)
/// * `height` - Image height in pixels (1-100)
/// * `rgba` - RGBA pixel data as a `Uint8Array` (4 bytes per pixel, row-major order)
///
/// # Errors
///
/// Returns an error string if either edge is 0 or larger than 100, or if
/// the pixel data length doesn't match width * height * 4.
#[wasm_bindgen]
pub fn rgba_to_thumbhash(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, JsValue> {
    encode(width, height, rgba).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode RGBA pixel data of any size to ThumbHash bytes.
///
/// Larger images are downscaled with bilinear filtering to fit 100x100 first.
#[wasm_bindgen]
pub fn rgba_to_thumbhash_fit(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, JsValue> {
    thumbhash_from_rgba(width, height, rgba, DEFAULT_FILTER)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
