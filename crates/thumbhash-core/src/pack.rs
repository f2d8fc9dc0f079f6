//! Nibble packing for AC coefficients.

use crate::quantize::quantize_ac;

/// Packs 4-bit values two per byte into an output buffer.
///
/// The first value of each pair goes in the low nibble of a fresh byte, the
/// second in the high nibble of that same byte. Parity carries across calls,
/// so consecutive channels share bytes at their boundaries.
#[derive(Debug)]
pub struct NibblePacker<'a> {
    out: &'a mut Vec<u8>,
    odd: bool,
}

impl<'a> NibblePacker<'a> {
    /// Start packing at the end of `out`.
    pub fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, odd: false }
    }

    /// Append one 4-bit value.
    pub fn push(&mut self, nibble: u8) {
        debug_assert!(nibble <= 0x0F, "nibble out of range: {}", nibble);

        match self.out.last_mut() {
            Some(last) if self.odd => *last |= nibble << 4,
            _ => self.out.push(nibble),
        }
        self.odd = !self.odd;
    }

    /// Quantize and append a channel's normalized AC coefficients.
    pub fn push_coefficients(&mut self, ac: &[f32]) {
        for &value in ac {
            self.push(quantize_ac(value));
        }
    }

    /// True when the last byte has an empty high nibble waiting.
    pub fn is_odd(&self) -> bool {
        self.odd
    }
}
