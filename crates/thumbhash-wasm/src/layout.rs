//! Hash layout WASM bindings.

use thumbhash_core::HashLayout;
use wasm_bindgen::prelude::*;

/// Predict the hash layout for an image shape.
///
/// Returns a plain object with `lx`, `ly`, per-channel AC counts,
/// `header_len`, `ac_bytes` and `total_len`. Useful for sizing storage
/// columns before any pixels are available.
///
/// # Example (TypeScript)
/// ```typescript
/// const layout = hash_layout(100, 75, false);
/// console.log(layout.total_len); // 21
/// ```
#[wasm_bindgen]
pub fn hash_layout(width: u32, height: u32, has_alpha: bool) -> Result<JsValue, JsValue> {
    let layout = HashLayout::new(width, height, has_alpha)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&layout).map_err(|e| JsValue::from_str(&e.to_string()))
}
