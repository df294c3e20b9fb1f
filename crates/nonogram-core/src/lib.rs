//! nonogram-core: derive a solvable black-and-white nonogram from an image.
//!
//! The pipeline has four pure stages plus one adaptive loop:
//!
//! 1. [`ratio`] reduces an aspect ratio to a small integer fraction
//!    (Stern-Brocot mediant search under a denominator bound).
//! 2. [`dimensions`] picks the puzzle grid size from the source image size
//!    using GCD reduction, ratio simplification, and min/max area rules.
//! 3. [`grid`] reshapes the image engine's per-pixel samples into a binary
//!    grid.
//! 4. [`rle`] run-length encodes grid rows and columns and reduces the
//!    encodings to nonogram clue sequences.
//! 5. [`search`] drives an external [`ImageEngine`] through
//!    binarize-and-measure iterations, walking the threshold percentage one
//!    point at a time until the dark-cell ratio lands in the accepted band.
//!
//! The image engine itself (decode, resize, thresholding) lives outside this
//! crate; anything that implements [`ImageEngine`] can feed the search.
//!
//! # Quick Start
//!
//! ```
//! use nonogram_core::{dimensions, rle};
//!
//! // A 300x200 photo becomes a 23x15 puzzle grid.
//! let dims = dimensions::resolve(300, 200).unwrap();
//! assert_eq!((dims.width, dims.height), (23, 15));
//!
//! // Rows and columns are clued by the lengths of their dark runs.
//! let runs = rle::encode_run(&[0, 0, 1, 1, 1, 0]);
//! assert_eq!(rle::clue_sequence(&runs), vec![3]);
//! ```

pub mod dimensions;
pub mod error;
pub mod grid;
pub mod ratio;
pub mod rle;
pub mod search;

pub use dimensions::{Dimensions, MINIMUM_SIZE};
pub use error::{DimensionError, EngineError, GridError, PuzzleError};
pub use grid::{Grid, PixelSample};
pub use ratio::Fraction;
pub use rle::Run;
pub use search::{ImageEngine, PuzzleState, SearchOptions, ThresholdSearch};
