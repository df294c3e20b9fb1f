//! Puzzle grid sizing.
//!
//! A raw image size (say 4032x3024) has to become a grid a person can
//! actually solve. The rules, applied in order: reduce by GCD, re-simplify
//! large reduced pairs toward a small canonical ratio, nudge oversized grids
//! down while steering the ratio toward 1.5, and scale undersized grids up
//! to the minimum side length.

use crate::error::DimensionError;
use crate::ratio::{self, Fraction};

/// Smallest acceptable grid side. Grids below `MINIMUM_SIZE^2` cells are
/// scaled up; grids above `3 * MINIMUM_SIZE^2` cells are shrunk.
pub const MINIMUM_SIZE: u32 = 15;

/// Denominator bound handed to the ratio simplifier.
const RATIO_LIMIT: u32 = 50;

/// Cap on the nudge-and-resimplify loop. The loop is heuristic and extreme
/// aspect ratios never settle; exhausting the cap reports the input as
/// degenerate instead of spinning.
const MAX_SHRINK_STEPS: u32 = 1000;

/// A width/height pair: either a source image's pixel size or a resolved
/// puzzle grid size. Both sides are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Resolve the puzzle grid size for a source image.
///
/// ```
/// use nonogram_core::dimensions::resolve;
///
/// let dims = resolve(300, 200).unwrap();
/// assert_eq!((dims.width, dims.height), (23, 15));
/// ```
///
/// # Errors
///
/// [`DimensionError::Degenerate`] when a side is zero, when ratio
/// simplification collapses a side to zero (extreme aspect ratios), or when
/// the shrink loop fails to settle.
pub fn resolve(image_width: u32, image_height: u32) -> Result<Dimensions, DimensionError> {
    let degenerate = || DimensionError::Degenerate {
        width: image_width,
        height: image_height,
    };

    if image_width == 0 || image_height == 0 {
        return Err(degenerate());
    }

    let divisor = gcd(image_width, image_height);
    let mut w = image_width / divisor;
    let mut h = image_height / divisor;

    let min_area = u64::from(MINIMUM_SIZE) * u64::from(MINIMUM_SIZE);

    // A reduced pair that is still large (common for photos, where the GCD
    // is small) gets replaced by the nearest small-integer ratio.
    if u64::from(w) * u64::from(h) > 2 * min_area {
        (w, h) = simplified(w, h).ok_or_else(degenerate)?;
    }

    // Shrink toward the area bound: nudge the width while steering the
    // ratio toward 1.5, then re-simplify so the pair stays in lowest terms.
    let mut steps = 0;
    while u64::from(w) * u64::from(h) > 3 * min_area {
        if steps == MAX_SHRINK_STEPS {
            return Err(degenerate());
        }
        steps += 1;

        let current = f64::from(w) / f64::from(h);
        if current > 1.0 {
            if current < 1.5 {
                w -= 1;
            } else {
                w += 1;
            }
        } else if current < 1.5 {
            w += 1;
        } else {
            w -= 1;
        }

        (w, h) = simplified(w, h).ok_or_else(degenerate)?;
    }

    // Scale tiny grids up so there is something to solve: the smaller side
    // becomes MINIMUM_SIZE and the other keeps the proportion.
    if u64::from(w) * u64::from(h) < min_area {
        if w <= h {
            let factor = f64::from(MINIMUM_SIZE) / f64::from(w);
            w = MINIMUM_SIZE;
            h = (f64::from(h) * factor + 0.5).trunc() as u32;
        } else {
            let factor = f64::from(MINIMUM_SIZE) / f64::from(h);
            h = MINIMUM_SIZE;
            w = (f64::from(w) * factor + 0.5).trunc() as u32;
        }
    }

    Ok(Dimensions::new(w, h))
}

/// Simplify `w/h` under the denominator bound; `None` when a side collapses
/// to zero.
fn simplified(w: u32, h: u32) -> Option<(u32, u32)> {
    let Fraction { numer, denom } = ratio::simplify(f64::from(w) / f64::from(h), RATIO_LIMIT);
    if numer == 0 || denom == 0 {
        return None;
    }
    Some((numer, denom))
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scenario_300x200() {
        // GCD 100 -> 3:2; area 6 skips re-simplification and shrink; the
        // up-scale sets height to 15 and width to trunc(3 * 7.5 + 0.5).
        assert_eq!(resolve(300, 200).unwrap(), Dimensions::new(23, 15));
    }

    #[test]
    fn hd_frame_resolves_to_27x15() {
        // 1920x1080 -> 16:9 -> up-scaled by 15/9.
        assert_eq!(resolve(1920, 1080).unwrap(), Dimensions::new(27, 15));
    }

    #[test]
    fn square_input_becomes_minimum_square() {
        assert_eq!(resolve(1000, 1000).unwrap(), Dimensions::new(15, 15));
    }

    #[test]
    fn already_puzzle_sized_input_is_untouched() {
        // 23x15 is coprime, inside [15^2, 3*15^2], no rule fires.
        assert_eq!(resolve(23, 15).unwrap(), Dimensions::new(23, 15));
    }

    #[test]
    fn portrait_orientation_is_preserved() {
        let dims = resolve(200, 300).unwrap();
        assert_eq!(dims, Dimensions::new(15, 23));
    }

    #[test]
    fn large_coprime_pair_is_resimplified() {
        // 1366x768 reduces to 683x384, far over the area bound, so the
        // ratio is replaced by a small-denominator approximation.
        let dims = resolve(1366, 768).unwrap();
        assert!(dims.width >= 1 && dims.height >= 1);
        assert!(dims.area() >= u64::from(MINIMUM_SIZE) * u64::from(MINIMUM_SIZE));
        assert!(dims.area() <= 3 * u64::from(MINIMUM_SIZE) * u64::from(MINIMUM_SIZE));
        let got = f64::from(dims.width) / f64::from(dims.height);
        let want = 1366.0 / 768.0;
        assert!((got - want).abs() / want < 0.15, "ratio drifted: {got} vs {want}");
    }

    #[test]
    fn zero_sides_are_degenerate() {
        assert!(matches!(
            resolve(0, 100),
            Err(DimensionError::Degenerate { .. })
        ));
        assert!(matches!(
            resolve(100, 0),
            Err(DimensionError::Degenerate { .. })
        ));
    }

    #[test]
    fn extreme_aspect_ratio_is_degenerate() {
        // 1:1000 simplifies to 0/1 under the denominator bound.
        assert!(matches!(
            resolve(1, 1000),
            Err(DimensionError::Degenerate { .. })
        ));
    }

    #[test]
    fn sides_are_always_positive_for_reasonable_inputs() {
        for (w, h) in [
            (640, 480),
            (800, 600),
            (1024, 768),
            (1280, 720),
            (2448, 3264),
            (4032, 3024),
            (30, 20),
            (1, 1),
        ] {
            let dims = resolve(w, h).unwrap_or_else(|e| panic!("{w}x{h}: {e}"));
            assert!(dims.width >= 1 && dims.height >= 1, "{w}x{h} -> {dims}");
            assert!(
                dims.area() >= u64::from(MINIMUM_SIZE) * u64::from(MINIMUM_SIZE),
                "{w}x{h} -> {dims} under minimum area"
            );
        }
    }
}
