pub mod raster;

pub use raster::{RasterEngine, RasterError};
