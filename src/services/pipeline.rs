//! Image → puzzle → page orchestration.

use nonogram_core::{dimensions, PuzzleState, ThresholdSearch};

use crate::engine::RasterEngine;
use crate::models::GeneratorConfig;
use crate::services::image_source::{FetchedImage, ImageOrigin};
use crate::services::page_renderer::{PageRenderer, RenderError};

/// Result of one generation: the page plus the puzzle it shows.
#[derive(Debug)]
pub struct GeneratedPuzzle {
    pub html: String,
    pub puzzle: PuzzleState,
    pub origin: ImageOrigin,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to decode source image: {0}")]
    Decode(#[from] image::ImageError),

    #[error(transparent)]
    Dimensions(#[from] nonogram_core::DimensionError),

    #[error(transparent)]
    Puzzle(#[from] nonogram_core::PuzzleError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Orchestrates decode → resolve → threshold search → page render,
/// strictly in that order; each stage's output feeds the next.
///
/// Owns the threshold search, so the tuned percentage carries over when one
/// process generates several puzzles.
pub struct PuzzlePipeline {
    engine: RasterEngine,
    search: ThresholdSearch,
    renderer: PageRenderer,
}

impl PuzzlePipeline {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            engine: RasterEngine::new(),
            search: ThresholdSearch::new(config.search_options()),
            renderer: PageRenderer::new(config.output.template.clone()),
        }
    }

    /// Generate a playable puzzle page from fetched image bytes.
    pub fn generate(&mut self, fetched: &FetchedImage) -> Result<GeneratedPuzzle, PipelineError> {
        let image = image::load_from_memory(&fetched.bytes)?;
        let dims = dimensions::resolve(image.width(), image.height())?;
        tracing::info!(
            source_width = image.width(),
            source_height = image.height(),
            grid_width = dims.width,
            grid_height = dims.height,
            "Resolved puzzle grid"
        );

        let puzzle = self.search.derive(&self.engine, &image, dims)?;
        tracing::info!(percent = puzzle.final_percent, "Threshold search converged");

        let html = self.renderer.render(&puzzle, &fetched.origin, &fetched.bytes)?;
        tracing::debug!(html_len = html.len(), "Puzzle page rendered");

        Ok(GeneratedPuzzle {
            html,
            puzzle,
            origin: fetched.origin.clone(),
        })
    }
}
