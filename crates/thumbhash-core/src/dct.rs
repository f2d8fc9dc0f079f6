//! Truncated 2-D forward DCT over a triangular low-frequency grid.
//!
//! Only coefficients with `cx * ny < nx * (ny - cy)` are computed. For a 7x7
//! grid that is 28 terms instead of 49, which drops the highest diagonal
//! frequencies the placeholder can't show anyway.

use std::f64::consts::PI;

/// Result of encoding one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelEncoding {
    /// Zero-frequency term (the channel mean).
    pub dc: f32,
    /// AC terms in triangular row-major order.
    ///
    /// Normalized to 0.0..=1.0 around 0.5 when `scale > 0`. With a zero scale
    /// every raw term is zero and is left as is.
    pub ac: Vec<f32>,
    /// Largest absolute AC magnitude before normalization.
    pub scale: f32,
}

impl ChannelEncoding {
    /// Placeholder alpha channel for a fully opaque image.
    pub fn opaque_alpha() -> Self {
        Self {
            dc: 1.0,
            ac: Vec::new(),
            scale: 1.0,
        }
    }
}

/// Iterate the `(cx, cy)` frequency pairs of an `nx` by `ny` triangular grid.
///
/// The first pair is always `(0, 0)`, the DC term.
pub fn frequencies(nx: usize, ny: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..ny).flat_map(move |cy| {
        (0..)
            .take_while(move |&cx| cx * ny < nx * (ny - cy))
            .map(move |cx| (cx, cy))
    })
}

/// Number of AC terms produced for an `nx` by `ny` grid.
pub fn ac_count(nx: usize, ny: usize) -> usize {
    frequencies(nx, ny).count().saturating_sub(1)
}

/// Encode one channel of a `width` by `height` image.
///
/// # Arguments
/// * `channel` - Row-major samples, `width * height` long
/// * `nx`, `ny` - Frequency grid bounds
pub fn encode_channel(
    channel: &[f32],
    width: usize,
    height: usize,
    nx: usize,
    ny: usize,
) -> ChannelEncoding {
    debug_assert_eq!(channel.len(), width * height);

    let mut dc = 0.0f32;
    let mut ac = Vec::with_capacity(nx * ny / 2);
    let mut scale = 0.0f32;
    let mut fx = vec![0.0f32; width];
    let area = (width * height) as f32;

    for (cx, cy) in frequencies(nx, ny) {
        for (x, slot) in fx.iter_mut().enumerate() {
            *slot = basis(width, cx, x);
        }

        let mut f = 0.0f32;
        for (y, row) in channel.chunks_exact(width).enumerate() {
            let fy = basis(height, cy, y);
            for (sample, fx) in row.iter().zip(&fx) {
                f += sample * fx * fy;
            }
        }
        f /= area;

        if cx > 0 || cy > 0 {
            ac.push(f);
            scale = scale.max(f.abs());
        } else {
            dc = f;
        }
    }

    if scale > 0.0 {
        for value in &mut ac {
            *value = 0.5 + 0.5 / scale * *value;
        }
    }

    ChannelEncoding { dc, ac, scale }
}

/// DCT-II basis value for frequency `k` at sample `i` of `n`.
#[inline]
fn basis(n: usize, k: usize, i: usize) -> f32 {
    (PI / n as f64 * k as f64 * (i as f64 + 0.5)).cos() as f32
}
