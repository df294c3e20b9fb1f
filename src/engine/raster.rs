//! Raster image engine backed by the `image` crate.
//!
//! Implements the resize / binarize / sample contract the threshold search
//! drives. Binarization reproduces the classic negate-threshold-negate
//! recipe: a pixel counts as dark when its luminance falls at or below
//! `255 - round(255 * percent / 100)`, so raising the percentage strictly
//! shrinks the dark set. That monotonicity is what the search's step
//! direction relies on.

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Luma};
use nonogram_core::{EngineError, ImageEngine, PixelSample};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("binarization percentage {0} outside [0, 100]")]
    PercentOutOfRange(i32),
}

/// Image engine for in-memory raster images.
#[derive(Debug, Default, Clone)]
pub struct RasterEngine;

impl RasterEngine {
    pub fn new() -> Self {
        Self
    }
}

/// Luminance value at or below which a pixel is dark for `percent`.
fn dark_cutoff(percent: i32) -> i32 {
    255 - (255 * percent + 50) / 100
}

impl ImageEngine for RasterEngine {
    type Image = DynamicImage;

    fn resize(
        &self,
        image: &DynamicImage,
        width: u32,
        height: u32,
    ) -> Result<DynamicImage, EngineError> {
        // Exact dimensions: the sampler must see one pixel per grid cell.
        Ok(image.resize_exact(width, height, FilterType::Lanczos3))
    }

    fn binarize(&self, image: &DynamicImage, percent: i32) -> Result<DynamicImage, EngineError> {
        if !(0..=100).contains(&percent) {
            return Err(Box::new(RasterError::PercentOutOfRange(percent)));
        }

        let cutoff = dark_cutoff(percent);
        let gray = image.to_luma8();
        let binary = GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
            if i32::from(gray.get_pixel(x, y)[0]) <= cutoff {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        });

        Ok(DynamicImage::ImageLuma8(binary))
    }

    fn sample_pixels(&self, image: &DynamicImage) -> Result<Vec<PixelSample>, EngineError> {
        let gray = image.to_luma8();
        Ok(gray
            .enumerate_pixels()
            .map(|(x, y, pixel)| PixelSample {
                x,
                y,
                dark: pixel[0] < 128,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_image(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| Luma([f(x, y)])))
    }

    #[test]
    fn cutoff_matches_the_negate_threshold_negate_chain() {
        // At 66%, dark means luminance <= 255 - 168 = 87.
        assert_eq!(dark_cutoff(66), 87);
        assert_eq!(dark_cutoff(0), 255);
        assert_eq!(dark_cutoff(100), 0);
    }

    #[test]
    fn raising_the_percentage_shrinks_the_dark_set() {
        let engine = RasterEngine::new();
        let image = gray_image(16, 16, |x, _| (x * 17) as u8);

        let mut previous = usize::MAX;
        for percent in [0, 25, 50, 75, 100] {
            let binary = engine.binarize(&image, percent).unwrap();
            let dark = engine
                .sample_pixels(&binary)
                .unwrap()
                .iter()
                .filter(|s| s.dark)
                .count();
            assert!(dark <= previous, "dark set grew at {percent}%");
            previous = dark;
        }
    }

    #[test]
    fn out_of_range_percent_is_rejected() {
        let engine = RasterEngine::new();
        let image = gray_image(2, 2, |_, _| 128);
        assert!(engine.binarize(&image, -1).is_err());
        assert!(engine.binarize(&image, 101).is_err());
    }

    #[test]
    fn resize_produces_exact_dimensions() {
        let engine = RasterEngine::new();
        let image = gray_image(300, 200, |x, y| ((x + y) % 256) as u8);
        let resized = engine.resize(&image, 23, 15).unwrap();
        assert_eq!((resized.width(), resized.height()), (23, 15));
    }

    #[test]
    fn sample_dump_covers_every_cell_once() {
        let engine = RasterEngine::new();
        let image = gray_image(5, 4, |x, _| if x < 2 { 0 } else { 255 });
        let binary = engine.binarize(&image, 66).unwrap();
        let samples = engine.sample_pixels(&binary).unwrap();

        assert_eq!(samples.len(), 20);
        let dark = samples.iter().filter(|s| s.dark).count();
        assert_eq!(dark, 8);
    }

    #[test]
    fn checkerboard_binarizes_to_a_checkerboard() {
        let engine = RasterEngine::new();
        let image = gray_image(23, 15, |x, y| if (x + y) % 2 == 0 { 0 } else { 255 });
        let binary = engine.binarize(&image, 66).unwrap();
        let samples = engine.sample_pixels(&binary).unwrap();

        for sample in &samples {
            assert_eq!(sample.dark, (sample.x + sample.y) % 2 == 0);
        }
    }
}
