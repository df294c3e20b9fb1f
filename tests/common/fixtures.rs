//! Synthetic source images for pipeline tests.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, GrayImage, ImageEncoder, Luma};

/// Encode a grayscale image built from a per-pixel function as PNG bytes.
pub fn gray_png(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> Vec<u8> {
    let img = GrayImage::from_fn(width, height, |x, y| Luma([f(x, y)]));
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(img.as_raw(), width, height, ExtendedColorType::L8)
        .expect("failed to encode test PNG");
    buf
}

/// Left 45% black, rest white. Downscales cleanly (no mid-gray mush except
/// at the single transition column), so the dark-cell ratio lands inside
/// the accepted band at the default threshold.
pub fn split_png(width: u32, height: u32) -> Vec<u8> {
    let split = width * 45 / 100;
    gray_png(width, height, move |x, _| if x < split { 0 } else { 255 })
}

/// Uniform luminance everywhere.
pub fn solid_png(width: u32, height: u32, luma: u8) -> Vec<u8> {
    gray_png(width, height, move |_, _| luma)
}

/// One pixel per prospective grid cell, alternating dark/light.
pub fn checkerboard_png(width: u32, height: u32) -> Vec<u8> {
    gray_png(width, height, |x, y| if (x + y) % 2 == 0 { 0 } else { 255 })
}
