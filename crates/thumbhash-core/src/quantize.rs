//! Quantization and header packing.
//!
//! Header layout, all little-endian:
//!
//! | bits  | 24-bit word        | 16-bit word            |
//! |-------|--------------------|------------------------|
//! | 0-5   | L dc (6 bits)      | 0-2: lx or ly (3 bits) |
//! | 6-11  | P dc (6 bits)      | 3-8: P scale (6 bits)  |
//! | 12-17 | Q dc (6 bits)      | 9-14: Q scale (6 bits) |
//! | 18-22 | L scale (5 bits)   | 15: landscape flag     |
//! | 23    | alpha flag         |                        |
//!
//! With alpha, one more byte follows: A dc in the low nibble, A scale in the
//! high nibble.

use crate::dct::ChannelEncoding;

/// Round `value` half away from zero and convert to an unsigned integer.
///
/// `f32::round` already rounds ties away from zero (2.5 -> 3, -2.5 -> -3),
/// which the hash format depends on. Negative results saturate to 0.
#[inline]
pub fn quantize(value: f32) -> u32 {
    value.round() as u32
}

/// Quantize a normalized AC coefficient to a 4-bit value.
#[inline]
pub fn quantize_ac(value: f32) -> u8 {
    quantize(15.0 * value) as u8
}

/// Everything the fixed-size header records about an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Header {
    pub l_dc: f32,
    pub p_dc: f32,
    pub q_dc: f32,
    pub l_scale: f32,
    pub p_scale: f32,
    pub q_scale: f32,
    /// `(dc, scale)` of the alpha channel, present only when alpha is encoded.
    pub alpha: Option<(f32, f32)>,
    pub is_landscape: bool,
    /// lx for portrait or square images, ly for landscape ones.
    pub size: usize,
}

impl Header {
    /// Assemble a header from the per-channel encodings.
    pub fn new(
        l: &ChannelEncoding,
        p: &ChannelEncoding,
        q: &ChannelEncoding,
        a: Option<&ChannelEncoding>,
        is_landscape: bool,
        size: usize,
    ) -> Self {
        Self {
            l_dc: l.dc,
            p_dc: p.dc,
            q_dc: q.dc,
            l_scale: l.scale,
            p_scale: p.scale,
            q_scale: q.scale,
            alpha: a.map(|a| (a.dc, a.scale)),
            is_landscape,
            size,
        }
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Header length in bytes.
    pub fn byte_len(&self) -> usize {
        if self.has_alpha() {
            6
        } else {
            5
        }
    }

    /// The low 24-bit header word.
    pub fn word24(&self) -> u32 {
        let mut word = quantize(63.0 * self.l_dc)
            | (quantize(31.5 + 31.5 * self.p_dc) << 6)
            | (quantize(31.5 + 31.5 * self.q_dc) << 12)
            | (quantize(31.0 * self.l_scale) << 18);
        if self.has_alpha() {
            word |= 1 << 23;
        }
        word
    }

    /// The 16-bit header word.
    pub fn word16(&self) -> u16 {
        let mut word = self.size as u32
            | (quantize(63.0 * self.p_scale) << 3)
            | (quantize(63.0 * self.q_scale) << 9);
        if self.is_landscape {
            word |= 1 << 15;
        }
        word as u16
    }

    /// The optional alpha byte.
    pub fn alpha_byte(&self) -> Option<u8> {
        self.alpha
            .map(|(dc, scale)| (quantize(15.0 * dc) | (quantize(15.0 * scale) << 4)) as u8)
    }

    /// Append the header bytes to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        let word24 = self.word24();
        let word16 = self.word16();

        out.push((word24 & 0xFF) as u8);
        out.push(((word24 >> 8) & 0xFF) as u8);
        out.push((word24 >> 16) as u8);
        out.extend_from_slice(&word16.to_le_bytes());

        if let Some(byte) = self.alpha_byte() {
            out.push(byte);
        }
    }
}
