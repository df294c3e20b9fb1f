//! Best rational approximation of an aspect ratio.
//!
//! Reducing an image's aspect ratio to a small integer fraction is the first
//! step toward a playable grid size: a 1366x683 photo should suggest a
//! 2:1-ish puzzle, not a 1366-column one. The search walks the Stern-Brocot
//! tree, tightening an enclosing fraction pair until the denominator bound
//! stops the descent.

/// A fraction produced by [`simplify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub numer: u32,
    pub denom: u32,
}

impl Fraction {
    pub const fn new(numer: u32, denom: u32) -> Self {
        Self { numer, denom }
    }

    /// The fraction's value. The search's upper sentinel `1/0` maps to
    /// infinity.
    pub fn value(&self) -> f64 {
        f64::from(self.numer) / f64::from(self.denom)
    }
}

/// Find a fraction approximating `ratio` with denominator at most `limit`.
///
/// Mediant search: keep an enclosing pair starting at `0/1` and `1/0`, and
/// repeatedly replace one endpoint with the pair's mediant (numerator sum
/// over denominator sum) on whichever side `ratio` falls. The first mediant
/// whose denominator would exceed `limit` ends the walk and the current
/// endpoint on `ratio`'s side is returned; an exact hit returns the mediant
/// itself when `limit` permits it, otherwise the endpoint with the smaller
/// denominator (ties favor the lower one).
///
/// The mediant denominator never decreases, so the walk terminates for any
/// finite positive `ratio`.
///
/// ```
/// use nonogram_core::ratio::{simplify, Fraction};
///
/// assert_eq!(simplify(16.0 / 9.0, 50), Fraction::new(16, 9));
/// assert_eq!(simplify(std::f64::consts::PI, 7), Fraction::new(22, 7));
/// ```
pub fn simplify(ratio: f64, limit: u32) -> Fraction {
    let mut lower = Fraction::new(0, 1);
    let mut upper = Fraction::new(1, 0);

    loop {
        let mediant = Fraction::new(lower.numer + upper.numer, lower.denom + upper.denom);
        let scaled = ratio * f64::from(mediant.denom);

        if scaled > f64::from(mediant.numer) {
            if mediant.denom > limit {
                return upper;
            }
            lower = mediant;
        } else if scaled == f64::from(mediant.numer) {
            if mediant.denom <= limit {
                return mediant;
            }
            return if lower.denom <= upper.denom { lower } else { upper };
        } else {
            if mediant.denom > limit {
                return lower;
            }
            upper = mediant;
        }
    }
}
