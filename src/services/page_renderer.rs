//! Playable-page rendering.
//!
//! Pure templating over the computed puzzle: clue tables, an interactive
//! grid, the source image embedded as a base64 data URI behind a reveal
//! control, and a credit line naming where the image came from. Nothing is
//! re-derived here.

use base64::Engine as _;
use nonogram_core::PuzzleState;
use serde_json::json;
use tera::{Context, Tera};

use crate::assets;
use crate::services::image_source::ImageOrigin;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("failed to load template: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders the playable HTML page for a finished puzzle.
pub struct PageRenderer {
    template_override: Option<std::path::PathBuf>,
}

impl PageRenderer {
    pub fn new(template_override: Option<std::path::PathBuf>) -> Self {
        Self { template_override }
    }

    /// Render the puzzle page. The template is loaded fresh on every call
    /// so an external template can be edited between runs.
    pub fn render(
        &self,
        puzzle: &PuzzleState,
        origin: &ImageOrigin,
        image_bytes: &[u8],
    ) -> Result<String, RenderError> {
        let template =
            assets::load_template(assets::PUZZLE_TEMPLATE, self.template_override.as_deref())?;

        let mut tera = Tera::default();
        tera.add_raw_template(assets::PUZZLE_TEMPLATE, &template)?;

        let data = json!({
            "width": puzzle.width,
            "height": puzzle.height,
            "row_clues": puzzle.row_clues,
            "column_clues": puzzle.column_clues,
            "final_percent": puzzle.final_percent,
            "image_data_uri": data_uri(image_bytes),
            "credit": credit_line(origin),
            "generated_at": chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
        });

        let context = Context::from_serialize(data)?;
        let html = tera.render(assets::PUZZLE_TEMPLATE, &context)?;
        Ok(html)
    }
}

/// Embed the source image verbatim as a data URI.
fn data_uri(bytes: &[u8]) -> String {
    let mime = image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream");
    format!(
        "data:{mime};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

fn credit_line(origin: &ImageOrigin) -> String {
    match origin {
        ImageOrigin::File(path) => format!("Source image: {}", path.display()),
        ImageOrigin::Web { page, image } => {
            format!("Source image: {image} (found via {page})")
        }
    }
}
