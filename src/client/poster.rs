//! Poster URL resolution against a manifest of known poster filenames.
//!
//! The asset host offers no lookup API; the client derives a candidate
//! filename from the title and falls back to the default artwork when the
//! manifest has no match. Missing posters are never surfaced as errors.

use std::collections::HashSet;

use crate::config::Config;

/// Filename served when a title has no poster in the manifest.
pub const DEFAULT_POSTER: &str = "default.jpg";

#[derive(Debug, Clone)]
pub struct PosterResolver {
    base_url: String,
    manifest: HashSet<String>,
}

impl PosterResolver {
    /// `manifest` holds the plain filenames ("Test Movie.jpg") known to
    /// exist on the asset host.
    pub fn new(base_url: impl Into<String>, manifest: impl IntoIterator<Item = String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            manifest: manifest.into_iter().collect(),
        }
    }

    /// Build a resolver against the configured asset host. The manifest
    /// still comes from the caller; the host offers no listing API.
    pub fn from_config(config: &Config, manifest: impl IntoIterator<Item = String>) -> Self {
        Self::new(config.poster_base_url.clone(), manifest)
    }

    /// Strip everything but letters, digits, and spaces from a title.
    fn sanitize(title: &str) -> String {
        title
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Full poster URL for a title, or the default artwork URL when no
    /// manifest entry matches (or the title is absent entirely).
    pub fn resolve(&self, title: Option<&str>) -> String {
        let filename = title
            .map(Self::sanitize)
            .filter(|s| !s.is_empty())
            .map(|s| format!("{}.jpg", s))
            .filter(|f| self.manifest.contains(f))
            .unwrap_or_else(|| DEFAULT_POSTER.to_string());

        format!("{}/{}", self.base_url, urlencoding::encode(&filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> PosterResolver {
        PosterResolver::new(
            "https://posters.example.com/posters/",
            ["Test Movie.jpg".to_string(), "Up.jpg".to_string()],
        )
    }

    #[test]
    fn test_known_title_resolves_to_manifest_entry() {
        assert_eq!(
            resolver().resolve(Some("Test Movie")),
            "https://posters.example.com/posters/Test%20Movie.jpg"
        );
    }

    #[test]
    fn test_punctuation_is_stripped_before_lookup() {
        // "Test: Movie!" sanitizes to "Test Movie", which is in the manifest.
        assert_eq!(
            resolver().resolve(Some("Test: Movie!")),
            "https://posters.example.com/posters/Test%20Movie.jpg"
        );
    }

    #[test]
    fn test_unknown_title_falls_back_to_default() {
        assert_eq!(
            resolver().resolve(Some("Nope")),
            "https://posters.example.com/posters/default.jpg"
        );
    }

    #[test]
    fn test_missing_title_falls_back_to_default() {
        assert_eq!(
            resolver().resolve(None),
            "https://posters.example.com/posters/default.jpg"
        );
    }
}
