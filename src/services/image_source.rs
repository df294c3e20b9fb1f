//! Source image acquisition: local files and remote listing pages.
//!
//! The remote path fetches a listing page, scrapes it for the first image
//! link, and downloads that image. Provenance is recorded either way so the
//! rendered puzzle can credit where its picture came from.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use scraper::{Html, Selector};

use crate::models::FetchConfig;

/// File extensions accepted when falling back to anchor links.
const RASTER_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Where a source image came from; rendered as the puzzle's credit line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOrigin {
    File(PathBuf),
    Web { page: String, image: String },
}

/// Raw image bytes plus their provenance.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub origin: ImageOrigin,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no image link found on {0}")]
    NoImageLink(String),
}

/// Fetches source images over HTTP.
pub struct ImageSource {
    client: Client,
    listing_url: String,
}

impl ImageSource {
    pub fn new(config: &FetchConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            listing_url: config.listing_url.clone(),
        })
    }

    /// Read a local image file.
    pub fn from_file(path: &Path) -> Result<FetchedImage, SourceError> {
        let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(FetchedImage {
            bytes,
            origin: ImageOrigin::File(path.to_path_buf()),
        })
    }

    /// Fetch a listing page and download the first image linked from it.
    /// `listing_url` overrides the configured default.
    pub fn from_listing(&self, listing_url: Option<&str>) -> Result<FetchedImage, SourceError> {
        let page_url = listing_url.unwrap_or(&self.listing_url);
        tracing::info!(url = page_url, "Fetching image listing");

        let response = self.client.get(page_url).send()?.error_for_status()?;
        // Redirects are followed; relative links resolve against the page
        // we actually landed on.
        let landed_url = response.url().clone();
        let body = response.text()?;

        let image_url = first_image_link(&body, &landed_url)
            .ok_or_else(|| SourceError::NoImageLink(page_url.to_string()))?;

        tracing::info!(url = %image_url, "Downloading image");
        let bytes = self
            .client
            .get(image_url.clone())
            .send()?
            .error_for_status()?
            .bytes()?
            .to_vec();

        tracing::debug!(len = bytes.len(), "Image downloaded");
        Ok(FetchedImage {
            bytes,
            origin: ImageOrigin::Web {
                page: page_url.to_string(),
                image: image_url.to_string(),
            },
        })
    }
}

/// First usable image link in a listing page: `<img src>` wins, then any
/// anchor pointing at a raster file.
fn first_image_link(body: &str, base: &Url) -> Option<Url> {
    let document = Html::parse_document(body);

    let img_selector = Selector::parse("img[src]").unwrap();
    for element in document.select(&img_selector) {
        if let Some(src) = element.value().attr("src") {
            if let Ok(url) = base.join(src) {
                return Some(url);
            }
        }
    }

    let anchor_selector = Selector::parse("a[href]").unwrap();
    for element in document.select(&anchor_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if is_raster_link(href) {
            if let Ok(url) = base.join(href) {
                return Some(url);
            }
        }
    }

    None
}

fn is_raster_link(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    // Ignore query string and fragment when checking the extension.
    let path = lower
        .split(['?', '#'])
        .next()
        .unwrap_or(lower.as_str());
    RASTER_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(&format!(".{ext}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/gallery/page.html").unwrap()
    }

    #[test]
    fn img_tag_wins_over_anchors() {
        let body = r#"<html><body>
            <a href="/files/linked.png">link</a>
            <img src="/images/first.png"/>
            <img src="/images/second.png"/>
        </body></html>"#;

        let url = first_image_link(body, &base()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/images/first.png");
    }

    #[test]
    fn relative_src_resolves_against_the_page() {
        let body = r#"<img src="thumbs/cat.jpg">"#;
        let url = first_image_link(body, &base()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/gallery/thumbs/cat.jpg");
    }

    #[test]
    fn anchor_fallback_requires_a_raster_extension() {
        let body = r#"<html><body>
            <a href="/about.html">about</a>
            <a href="/files/photo.jpeg?download=1">photo</a>
        </body></html>"#;

        let url = first_image_link(body, &base()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/files/photo.jpeg?download=1"
        );
    }

    #[test]
    fn page_without_images_yields_nothing() {
        let body = r#"<html><body><p>words only</p><a href="/x.html">x</a></body></html>"#;
        assert!(first_image_link(body, &base()).is_none());
    }

    #[test]
    fn raster_link_check_ignores_query_and_fragment() {
        assert!(is_raster_link("/a/b.PNG"));
        assert!(is_raster_link("pic.webp#section"));
        assert!(!is_raster_link("/a/b.html"));
        assert!(!is_raster_link("image.png.html"));
    }
}
