//! nonogen - turns raster images into playable nonogram puzzles.
//!
//! This library exposes modules for integration testing.

pub mod assets;
pub mod engine;
pub mod models;
pub mod services;
