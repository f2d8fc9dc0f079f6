//! ThumbHash WASM - WebAssembly bindings for the ThumbHash encoder
//!
//! This crate exposes the thumbhash-core encoder to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `encode` - Hash bindings for RGBA pixel data
//! - `layout` - Hash size prediction without pixel data
//!
//! # Usage
//!
//! ```typescript
//! import init, { rgba_to_thumbhash } from '@thumbhash/wasm';
//!
//! await init();
//!
//! const { data, width, height } = ctx.getImageData(0, 0, 100, 75);
//! const hash = rgba_to_thumbhash(width, height, new Uint8Array(data.buffer));
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod layout;

pub use encode::{rgba_to_thumbhash, rgba_to_thumbhash_fit};
pub use layout::hash_layout;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
