//! Media references and CMS origin handling.
//!
//! The CMS serves uploads under relative paths (`/api/media/file/...`).
//! Pages are rendered on a different origin, so every media URL is
//! rewritten against the configured CMS base URL before rendering.

use std::fmt;

use serde::Deserialize;

use crate::error::CoreError;
use crate::nullable;

/// Origin of the content service, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Parse a base URL, trimming any trailing `/`.
    ///
    /// Only `http://` and `https://` origins are accepted.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"));

        match host {
            Some(h) if !h.is_empty() => Ok(Self(trimmed.to_string())),
            _ => Err(CoreError::InvalidBaseUrl(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a CMS path onto this origin.
    pub fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rewrite a media path into an absolute URL.
///
/// Paths that already carry a scheme or are protocol-relative (uploads
/// served from external storage) are returned unchanged.
///
/// ```
/// use sope_core::media::{absolute_url, BaseUrl};
///
/// let base = BaseUrl::parse("https://cms.example.org/").unwrap();
/// assert_eq!(
///     absolute_url(&base, "/api/media/file/hero.jpg"),
///     "https://cms.example.org/api/media/file/hero.jpg"
/// );
/// ```
pub fn absolute_url(base: &BaseUrl, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        path.to_string()
    } else {
        base.join(path)
    }
}

/// An uploaded image as returned by the CMS (`url` + `alt`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Media {
    pub url: String,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub alt: String,
}

impl Media {
    pub fn absolutize(&mut self, base: &BaseUrl) {
        self.url = absolute_url(base, &self.url);
    }
}

/// Absolutize an optional image in place.
pub fn absolutize_opt(media: &mut Option<Media>, base: &BaseUrl) {
    if let Some(m) = media {
        m.absolutize(base);
    }
}
