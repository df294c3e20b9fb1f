//! Error types for puzzle derivation.
//!
//! Three failure kinds cross the crate boundary: the external image engine
//! broke ([`PuzzleError::Engine`]), the sizing rules collapsed to an
//! unusable grid ([`DimensionError::Degenerate`]), or no threshold in
//! [0, 100] produced an acceptable puzzle ([`PuzzleError::NonConvergence`]).
//! Nothing is swallowed; every failure propagates to the caller.

use thiserror::Error;

/// Opaque failure from the external image engine.
///
/// The search does not retry or interpret engine errors; they abort the
/// derivation and surface unchanged.
pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure while resolving a puzzle grid size.
#[derive(Debug, Error)]
pub enum DimensionError {
    /// The input, or the sizing heuristics applied to it, collapsed to a
    /// grid with a zero side. Extreme aspect ratios (1:1000 and the like)
    /// land here.
    #[error("degenerate puzzle dimensions for {width}x{height} input")]
    Degenerate { width: u32, height: u32 },
}

/// Failure while assembling a grid from engine samples.
#[derive(Debug, Error)]
pub enum GridError {
    /// The engine's pixel dump did not contain one sample per cell.
    #[error("engine sample dump covered {actual} cells, expected {expected}")]
    CoverageMismatch { expected: usize, actual: usize },

    /// A sample pointed outside the grid.
    #[error("sample at ({x}, {y}) outside {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Failure of the threshold search.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The image engine could not resize, binarize, or sample.
    #[error("image engine failure: {0}")]
    Engine(#[source] EngineError),

    #[error(transparent)]
    Grid(#[from] GridError),

    /// No percentage in [0, 100] produced an on-ratio inside the accepted
    /// band before the iteration budget ran out. Distinct from [`Engine`]
    /// so callers can tell a broken engine from an unsatisfiable image.
    ///
    /// [`Engine`]: PuzzleError::Engine
    #[error(
        "threshold search did not converge after {iterations} iterations \
         (percent {percent}, on-ratio {on_ratio:.3})"
    )]
    NonConvergence {
        iterations: u32,
        percent: i32,
        on_ratio: f64,
    },
}
