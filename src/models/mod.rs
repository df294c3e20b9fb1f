pub mod config;

pub use config::{FetchConfig, GeneratorConfig, OutputConfig, SearchConfig};
