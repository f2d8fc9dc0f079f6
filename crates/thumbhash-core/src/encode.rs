//! The ThumbHash encoding pipeline.
//!
//! average color -> LPQA transform -> per-channel DCT -> header -> AC nibbles.
//! Each stage feeds the next; nothing is cached between calls.

use tracing::{debug, trace, warn};

use crate::average::average_color;
use crate::color::to_lpqa;
use crate::dct::{encode_channel, ChannelEncoding};
use crate::layout::{HashLayout, CHROMA_GRID};
use crate::pack::NibblePacker;
use crate::quantize::Header;
use crate::types::{EncodeError, RgbaView};

/// Encode an RGBA image into a ThumbHash.
///
/// # Arguments
///
/// * `width` - Image width in pixels (1-100)
/// * `height` - Image height in pixels (1-100)
/// * `rgba` - Row-major RGBA pixel data, `width * height * 4` bytes
///
/// # Returns
///
/// The hash bytes: a 5-byte header (6 with alpha) followed by the packed AC
/// coefficients. The length depends on the aspect ratio and on whether any
/// pixel is translucent; [`HashLayout`] predicts it.
///
/// # Errors
///
/// * `EncodeError::InvalidDimensions` if an edge is 0 or larger than 100
/// * `EncodeError::BufferSizeMismatch` if `rgba` has the wrong length
///
/// # Example
///
/// ```
/// use thumbhash_core::encode;
///
/// let pixels = vec![255u8; 8 * 8 * 4]; // Opaque white
/// let hash = encode(8, 8, &pixels).unwrap();
/// assert_eq!(hash.len(), 24);
/// ```
pub fn encode(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let image = RgbaView::new(width, height, rgba).inspect_err(|err| {
        warn!(width, height, len = rgba.len(), %err, "rejected thumbhash input");
    })?;
    encode_view(&image)
}

/// Encode an already validated image view.
pub fn encode_view(image: &RgbaView<'_>) -> Result<Vec<u8>, EncodeError> {
    let width = image.width() as usize;
    let height = image.height() as usize;

    let avg = average_color(image);
    let has_alpha = avg.has_alpha(image.pixel_count());
    let layout = HashLayout::new(image.width(), image.height(), has_alpha)?;

    let channels = to_lpqa(image, &avg);

    let (lnx, lny) = layout.luminance_grid();
    let l = encode_channel(&channels.l, width, height, lnx, lny);
    let p = encode_channel(&channels.p, width, height, CHROMA_GRID, CHROMA_GRID);
    let q = encode_channel(&channels.q, width, height, CHROMA_GRID, CHROMA_GRID);
    let a = match layout.alpha_grid() {
        Some((anx, any)) => encode_channel(&channels.a, width, height, anx, any),
        None => ChannelEncoding::opaque_alpha(),
    };
    trace!(
        l_ac = l.ac.len(),
        p_ac = p.ac.len(),
        q_ac = q.ac.len(),
        a_ac = a.ac.len(),
        "encoded channels"
    );

    let header = Header::new(
        &l,
        &p,
        &q,
        has_alpha.then_some(&a),
        layout.is_landscape,
        layout.header_size_field(),
    );

    debug_assert_eq!(header.byte_len(), layout.header_len);

    let mut hash = Vec::with_capacity(layout.total_len);
    header.write_to(&mut hash);

    // Channel order is fixed: L, P, Q, then A
    let mut packer = NibblePacker::new(&mut hash);
    for ac in [&l.ac, &p.ac, &q.ac] {
        packer.push_coefficients(ac);
    }
    if has_alpha {
        packer.push_coefficients(&a.ac);
    }
    debug_assert_eq!(packer.is_odd(), layout.ac_total() % 2 == 1);

    debug!(
        width,
        height,
        has_alpha,
        lx = layout.lx,
        ly = layout.ly,
        len = hash.len(),
        "encoded thumbhash"
    );
    debug_assert_eq!(hash.len(), layout.total_len);

    Ok(hash)
}
