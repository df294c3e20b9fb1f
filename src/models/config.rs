//! Generator configuration loaded from an optional YAML file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration. Every section has working defaults; a missing
/// or malformed file logs a warning and falls back to them.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Threshold search tuning.
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Starting binarization threshold percentage.
    #[serde(default = "default_initial_percent")]
    pub initial_percent: i32,

    /// Lower edge of the accepted dark-cell ratio band.
    #[serde(default = "default_min_on_ratio")]
    pub min_on_ratio: f64,

    /// Upper edge of the accepted dark-cell ratio band.
    #[serde(default = "default_max_on_ratio")]
    pub max_on_ratio: f64,

    /// Iteration budget before the search gives up.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

fn default_initial_percent() -> i32 {
    66
}

fn default_min_on_ratio() -> f64 {
    0.35
}

fn default_max_on_ratio() -> f64 {
    0.75
}

fn default_max_iterations() -> u32 {
    128
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            initial_percent: default_initial_percent(),
            min_on_ratio: default_min_on_ratio(),
            max_on_ratio: default_max_on_ratio(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// Remote image source settings.
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// Listing page scraped when no local file is given. The default serves
    /// a different random file on every request.
    #[serde(default = "default_listing_url")]
    pub listing_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_listing_url() -> String {
    "https://commons.wikimedia.org/wiki/Special:Random/File".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("nonogen/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Output rendering settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    /// Replacement for the embedded puzzle page template.
    #[serde(default)]
    pub template: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file is missing or malformed.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// The search options this configuration describes.
    pub fn search_options(&self) -> nonogram_core::SearchOptions {
        nonogram_core::SearchOptions {
            initial_percent: self.search.initial_percent,
            min_on_ratio: self.search.min_on_ratio,
            max_on_ratio: self.search.max_on_ratio,
            max_iterations: self.search.max_iterations,
        }
    }
}
