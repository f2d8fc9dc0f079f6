//! RGBA to LPQA color transform.
//!
//! L is luminance, P and Q are two chrominance axes (yellow-blue and
//! red-green), A is alpha. Each pixel is composited over the average color
//! first, so transparent pixels carry the image's dominant color instead of
//! their stored RGB.

use crate::average::AverageColor;
use crate::types::RgbaView;

/// The four decorrelated channels of an image, row-major.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LpqaChannels {
    /// Luminance, 0.0..=1.0.
    pub l: Vec<f32>,
    /// Yellow-blue chrominance, -1.0..=1.0.
    pub p: Vec<f32>,
    /// Red-green chrominance, -1.0..=1.0.
    pub q: Vec<f32>,
    /// Alpha, 0.0..=1.0.
    pub a: Vec<f32>,
}

impl LpqaChannels {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            l: Vec::with_capacity(capacity),
            p: Vec::with_capacity(capacity),
            q: Vec::with_capacity(capacity),
            a: Vec::with_capacity(capacity),
        }
    }
}

/// Convert normalized RGB to `(l, p, q)`.
#[inline]
pub fn rgb_to_lpq(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    ((r + g + b) / 3.0, (r + g) / 2.0 - b, r - g)
}

/// Split an image into LPQA channels, compositing over `avg`.
pub fn to_lpqa(image: &RgbaView<'_>, avg: &AverageColor) -> LpqaChannels {
    let mut channels = LpqaChannels::with_capacity(image.pixel_count());

    for px in image.rgba_pixels() {
        let alpha = px[3] as f32 / 255.0;
        let r = avg.r * (1.0 - alpha) + alpha / 255.0 * px[0] as f32;
        let g = avg.g * (1.0 - alpha) + alpha / 255.0 * px[1] as f32;
        let b = avg.b * (1.0 - alpha) + alpha / 255.0 * px[2] as f32;

        let (l, p, q) = rgb_to_lpq(r, g, b);
        channels.l.push(l);
        channels.p.push(p);
        channels.q.push(q);
        channels.a.push(alpha);
    }

    channels
}
