//! Adaptive binarization-threshold search.
//!
//! Binarizing at a fixed percentage gives terrible puzzles: a dark photo
//! comes out nearly solid, a bright one nearly blank. The search binarizes
//! at a candidate percentage, measures the fraction of dark cells in the
//! resulting grid, and walks the percentage one point at a time until that
//! ratio lands inside the accepted band.

use crate::dimensions::Dimensions;
use crate::error::{EngineError, PuzzleError};
use crate::grid::{Grid, PixelSample};
use crate::rle;

/// The external image engine the search drives.
///
/// Implementations are black boxes to the search: any failure aborts the
/// derivation as [`PuzzleError::Engine`]. `sample_pixels` must report
/// exactly one sample per cell of the binarized image.
pub trait ImageEngine {
    type Image;

    /// Resize to exact target dimensions.
    fn resize(&self, image: &Self::Image, width: u32, height: u32)
        -> Result<Self::Image, EngineError>;

    /// Threshold into a dark/light binary image. `percent` is the cut
    /// applied to pixel intensity; raising it must shrink the dark set.
    /// Implementations may reject percentages outside [0, 100], though the
    /// search never passes one.
    fn binarize(&self, image: &Self::Image, percent: i32) -> Result<Self::Image, EngineError>;

    /// Dump one `(x, y, dark)` sample per pixel of a binarized image.
    fn sample_pixels(&self, image: &Self::Image) -> Result<Vec<PixelSample>, EngineError>;
}

/// Tuning knobs for [`ThresholdSearch`].
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Starting threshold percentage.
    pub initial_percent: i32,
    /// Lower edge of the accepted dark-cell ratio band.
    pub min_on_ratio: f64,
    /// Upper edge of the accepted dark-cell ratio band.
    pub max_on_ratio: f64,
    /// Iteration budget. The default comfortably covers walking the whole
    /// percentage range from any starting point.
    pub max_iterations: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            initial_percent: 66,
            min_on_ratio: 0.35,
            max_on_ratio: 0.75,
            max_iterations: 128,
        }
    }
}

/// The finished puzzle: grid, clues, and the percentage that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    pub width: u32,
    pub height: u32,
    pub grid: Grid,
    /// Per-row clue sequences, top to bottom.
    pub row_clues: Vec<Vec<usize>>,
    /// Per-column clue sequences, left to right.
    pub column_clues: Vec<Vec<usize>>,
    /// The converged threshold percentage.
    pub final_percent: i32,
}

/// The adaptive loop. Owns the current percentage, which carries over
/// between [`derive`] calls: a second puzzle generated in the same run
/// starts from the previous one's converged threshold.
///
/// [`derive`]: ThresholdSearch::derive
#[derive(Debug)]
pub struct ThresholdSearch {
    options: SearchOptions,
    percent: i32,
}

impl ThresholdSearch {
    pub fn new(options: SearchOptions) -> Self {
        let percent = options.initial_percent;
        Self { options, percent }
    }

    /// The current threshold percentage.
    pub fn percent(&self) -> i32 {
        self.percent
    }

    /// Derive a puzzle from `image` at the resolved grid size.
    ///
    /// The image is resized once; each iteration re-binarizes at the
    /// current percentage, samples the result, and measures the grid's
    /// dark-cell ratio. Too solid raises the percentage, too blank lowers
    /// it, in band converges.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::Engine`] on any engine failure,
    /// [`PuzzleError::Grid`] when the engine's sample dump is malformed, and
    /// [`PuzzleError::NonConvergence`] when the percentage would leave
    /// [0, 100] or the iteration budget runs out.
    pub fn derive<E: ImageEngine>(
        &mut self,
        engine: &E,
        image: &E::Image,
        dims: Dimensions,
    ) -> Result<PuzzleState, PuzzleError> {
        let resized = engine
            .resize(image, dims.width, dims.height)
            .map_err(PuzzleError::Engine)?;
        let total_cells = dims.area() as f64;

        let mut last_ratio = f64::NAN;
        for iteration in 0..self.options.max_iterations {
            let binarized = engine
                .binarize(&resized, self.percent)
                .map_err(PuzzleError::Engine)?;
            let samples = engine
                .sample_pixels(&binarized)
                .map_err(PuzzleError::Engine)?;
            let grid = Grid::from_samples(&samples, dims.width, dims.height)?;

            let row_clues: Vec<Vec<usize>> = grid
                .rows()
                .map(|row| rle::clue_sequence(&rle::encode_run(row)))
                .collect();
            let column_clues: Vec<Vec<usize>> = (0..dims.width)
                .map(|x| rle::clue_sequence(&rle::encode_run(&grid.column(x))))
                .collect();

            let on_cells: usize = row_clues.iter().flatten().sum();
            let on_ratio = on_cells as f64 / total_cells;
            last_ratio = on_ratio;

            let next = if on_ratio > self.options.max_on_ratio {
                self.percent + 1
            } else if on_ratio < self.options.min_on_ratio {
                self.percent - 1
            } else {
                return Ok(PuzzleState {
                    width: dims.width,
                    height: dims.height,
                    grid,
                    row_clues,
                    column_clues,
                    final_percent: self.percent,
                });
            };

            if !(0..=100).contains(&next) {
                return Err(PuzzleError::NonConvergence {
                    iterations: iteration + 1,
                    percent: self.percent,
                    on_ratio,
                });
            }
            self.percent = next;
        }

        Err(PuzzleError::NonConvergence {
            iterations: self.options.max_iterations,
            percent: self.percent,
            on_ratio: last_ratio,
        })
    }
}
