pub mod image_source;
pub mod page_renderer;
pub mod pipeline;

pub use image_source::{FetchedImage, ImageOrigin, ImageSource, SourceError};
pub use page_renderer::{PageRenderer, RenderError};
pub use pipeline::{GeneratedPuzzle, PipelineError, PuzzlePipeline};
