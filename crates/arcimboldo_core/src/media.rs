//! Media source types for image payloads.

use serde::{Deserialize, Serialize};

/// Where media content is sourced from.
///
/// A `Url` source must be resolved to bytes before a request can be
/// assembled; `Base64` and `Binary` sources are already inline.
///
/// # Examples
///
/// ```
/// use arcimboldo_core::MediaSource;
///
/// let url = MediaSource::Url("https://example.com/scan.png".to_string());
/// let inline = MediaSource::Binary(vec![0x89, 0x50]);
///
/// assert!(!url.is_inline());
/// assert!(inline.is_inline());
/// assert_eq!(url.kind(), "url");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaSource {
    /// URL to fetch the content from
    Url(String),
    /// Base64-encoded content
    Base64(String),
    /// Raw binary data
    Binary(Vec<u8>),
}

impl MediaSource {
    /// Returns true when the content is already carried inline.
    pub fn is_inline(&self) -> bool {
        !matches!(self, MediaSource::Url(_))
    }

    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            MediaSource::Url(_) => "url",
            MediaSource::Base64(_) => "base64",
            MediaSource::Binary(_) => "binary",
        }
    }
}
