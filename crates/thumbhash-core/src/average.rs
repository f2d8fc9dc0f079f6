//! Alpha-weighted average color extraction.
//!
//! The average color is what transparent pixels get composited over before
//! the color transform, so fully transparent regions don't pull the chroma
//! toward black.

use crate::types::RgbaView;

/// Alpha-weighted mean color of an image.
///
/// `r`, `g` and `b` are normalized to 0.0..=1.0. `a` is the summed alpha
/// over all pixels, so it ranges from 0.0 to the pixel count.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AverageColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl AverageColor {
    /// True unless every pixel is fully opaque.
    #[inline]
    pub fn has_alpha(&self, pixel_count: usize) -> bool {
        self.a < pixel_count as f32
    }
}

/// Compute the alpha-weighted average color of an image.
///
/// Each channel contributes `alpha / 255 * value`, where alpha is already
/// scaled to 0.0..=1.0. The extra division by 255 puts the weighted sums in
/// the same units as the total alpha, so dividing by it yields a normalized
/// average. An image with zero total alpha keeps an all-zero color.
pub fn average_color(image: &RgbaView<'_>) -> AverageColor {
    let mut avg = AverageColor::default();

    for px in image.rgba_pixels() {
        let alpha = px[3] as f32 / 255.0;
        avg.r += alpha / 255.0 * px[0] as f32;
        avg.g += alpha / 255.0 * px[1] as f32;
        avg.b += alpha / 255.0 * px[2] as f32;
        avg.a += alpha;
    }

    if avg.a > 0.0 {
        avg.r /= avg.a;
        avg.g /= avg.a;
        avg.b /= avg.a;
    }

    avg
}
