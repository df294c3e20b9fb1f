//! Embedded page template with filesystem override.
//!
//! The default puzzle template ships inside the binary so the tool works
//! from a bare install; a config-supplied path replaces it for
//! customization.

use rust_embed::RustEmbed;
use std::io;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
struct EmbeddedTemplates;

/// Name of the playable puzzle page template.
pub const PUZZLE_TEMPLATE: &str = "puzzle.html";

/// Load a template by name, preferring `override_path` when given.
pub fn load_template(name: &str, override_path: Option<&Path>) -> io::Result<String> {
    if let Some(path) = override_path {
        return std::fs::read_to_string(path);
    }

    let file = EmbeddedTemplates::get(name).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("embedded template not found: {name}"),
        )
    })?;

    String::from_utf8(file.data.into_owned())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_puzzle_template_is_present() {
        let template = load_template(PUZZLE_TEMPLATE, None).unwrap();
        assert!(template.contains("row_clues"));
    }

    #[test]
    fn unknown_template_is_not_found() {
        let err = load_template("nope.html", None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
