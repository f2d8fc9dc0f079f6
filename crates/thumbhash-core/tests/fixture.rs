//! Regression tests against known hash vectors.

use std::path::Path;

use thumbhash_core::{encode, EncodeError, HashLayout};
use tracing_subscriber::EnvFilter;

const FIXTURES: &str = "tests/fixtures";

/// Hash of `tests/fixtures/img.png`, the reference sample image.
const SAMPLE_HASH: [u8; 24] = [
    0x2C, 0xF7, 0x05, 0x1F, 0x88, 0xF7, 0xB8, 0x77, 0x77, 0x66, 0xA9, 0x8D, 0x65, 0xC7, 0x67, 0xBA,
    0x87, 0x84, 0x79, 0x80, 0x28, 0x08, 0x88, 0x02,
];

/// Route encoder logs to the test output, filtered by `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
#[ignore = "requires tests/fixtures/img.png"]
fn sample_image_reproduces_reference_hash() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let path = Path::new(FIXTURES).join("img.png");
    let img = image::open(&path)?.to_rgba8();
    let (width, height) = img.dimensions();
    let hash = encode(width, height, img.as_raw())?;

    assert_eq!(hash, SAMPLE_HASH, "unexpected hash: {:02x?}", hash);
    Ok(())
}

#[test]
fn reference_hash_header_is_consistent() {
    // Opaque landscape with ly = 7, so the reference image is near square
    let word24 = u32::from(SAMPLE_HASH[0])
        | u32::from(SAMPLE_HASH[1]) << 8
        | u32::from(SAMPLE_HASH[2]) << 16;
    let word16 = u16::from_le_bytes([SAMPLE_HASH[3], SAMPLE_HASH[4]]);

    assert_eq!(word24 >> 23, 0);
    assert_eq!(word16 >> 15, 1);
    assert_eq!(word16 & 0x7, 7);

    let layout = HashLayout::new(100, 95, false).unwrap();
    assert_eq!(layout.total_len, SAMPLE_HASH.len());
}

/// Deterministic test pattern: every channel varies with both x and y.
fn pattern(width: u32, height: u32, translucent: bool) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let alpha = if translucent {
                255 - ((x + y) * 37) % 200
            } else {
                255
            };
            pixels.extend_from_slice(&[
                ((x * 53 + y * 17) % 256) as u8,
                ((x * 29 + y * 71 + 40) % 256) as u8,
                ((x * x * 13 + y * 97) % 256) as u8,
                alpha as u8,
            ]);
        }
    }
    pixels
}

#[test]
fn opaque_landscape_pattern() {
    init_tracing();
    let hash = encode(8, 5, &pattern(8, 5, false)).unwrap();

    assert_eq!(
        hash,
        [
            0xDE, 0xD7, 0x05, 0x14, 0x88, 0x14, 0xB0, 0x5A, 0x54, 0x66, 0x3B, 0x27, 0x94, 0x26,
            0xA7, 0xFB, 0x6E, 0x50, 0x47,
        ]
    );
}

#[test]
fn opaque_portrait_pattern() {
    let hash = encode(6, 8, &pattern(6, 8, false)).unwrap();

    assert_eq!(
        hash,
        [
            0x9E, 0xE7, 0x05, 0x15, 0x0E, 0x07, 0x68, 0x45, 0xC3, 0x46, 0x95, 0x86, 0x65, 0x15,
            0x29, 0xA9, 0x08, 0x7D, 0x7A, 0x60, 0x94,
        ]
    );
}

#[test]
fn translucent_landscape_pattern() {
    let hash = encode(9, 4, &pattern(9, 4, true)).unwrap();

    assert_eq!(
        hash,
        [
            0xDD, 0xE7, 0x85, 0x1A, 0x86, 0x19, 0x52, 0x70, 0x52, 0x73, 0x18, 0xF7, 0xB8, 0x1C,
            0x60, 0x38, 0xB9, 0xAF, 0xBC, 0xAE, 0x7A, 0x7A, 0x89,
        ]
    );
}

#[test]
fn translucent_portrait_pattern() {
    // lx = 1, so the size field is 1 and L uses a 3x5 grid
    let hash = encode(2, 8, &pattern(2, 8, true)).unwrap();

    assert_eq!(
        hash,
        [
            0x9B, 0xA7, 0x89, 0x09, 0x08, 0xAA, 0x84, 0x80, 0x38, 0x56, 0x16, 0x86, 0x5D, 0x2F,
            0x08, 0xE6, 0x88, 0x07, 0x88, 0x78, 0x89, 0x88, 0x77,
        ]
    );
}

#[test]
fn translucent_square_pattern() {
    let hash = encode(7, 7, &pattern(7, 7, true)).unwrap();

    assert_eq!(
        hash,
        [
            0xDE, 0xD7, 0x85, 0x15, 0x08, 0x19, 0x07, 0xB3, 0x31, 0x84, 0x53, 0xA7, 0x41, 0x6D,
            0x93, 0x4F, 0x60, 0x78, 0xD8, 0x85, 0x98, 0xAB, 0xBD, 0x5F, 0x8A,
        ]
    );
}

#[test]
fn opaque_black_pixel() {
    init_tracing();
    let hash = encode(1, 1, &[0, 0, 0, 255]).unwrap();

    let mut expected = vec![0x00, 0x08, 0x02, 0x07, 0x00];
    expected.resize(24, 0);
    assert_eq!(hash, expected);
}

#[test]
fn transparent_pixel() {
    let hash = encode(1, 1, &[0, 0, 0, 0]).unwrap();

    let mut expected = vec![0x00, 0x08, 0x82, 0x05, 0x00, 0x00];
    expected.resize(25, 0);
    assert_eq!(hash, expected);
}

#[test]
fn solid_color_pixel_dc_terms() {
    // L = (r + g + b) / 3, P = (r + g) / 2 - b, Q = r - g
    let (r, g, b) = (200u8, 100u8, 50u8);
    let hash = encode(1, 1, &[r, g, b, 255]).unwrap();
    let word24 = u32::from(hash[0]) | u32::from(hash[1]) << 8 | u32::from(hash[2]) << 16;

    let unit = |v: u8| 1.0f32 / 255.0 * v as f32;
    let (r, g, b) = (unit(r), unit(g), unit(b));
    let l = (r + g + b) / 3.0;
    let p = (r + g) / 2.0 - b;
    let q = r - g;

    assert_eq!(word24 & 0x3F, (63.0 * l).round() as u32);
    assert_eq!((word24 >> 6) & 0x3F, (31.5 + 31.5 * p).round() as u32);
    assert_eq!((word24 >> 12) & 0x3F, (31.5 + 31.5 * q).round() as u32);
    assert_eq!(word24 >> 23, 0);
}

#[test]
fn width_101_is_rejected() {
    for height in [1u32, 50, 100] {
        let pixels = vec![0u8; 101 * height as usize * 4];
        assert!(matches!(
            encode(101, height, &pixels),
            Err(EncodeError::InvalidDimensions { width: 101, .. })
        ));
    }
}

#[test]
fn short_buffer_is_rejected() {
    let pixels = vec![0u8; 10 * 10 * 4 - 1];
    assert_eq!(
        encode(10, 10, &pixels),
        Err(EncodeError::BufferSizeMismatch {
            expected: 400,
            actual: 399
        })
    );
}
