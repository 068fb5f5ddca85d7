//! Extraction payload types.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// The input handed to one extraction call.
///
/// # Examples
///
/// ```
/// use arcimboldo_core::{MediaSource, Payload};
///
/// let text = Payload::text("Invoice #4512, total $318.40");
///
/// let image = Payload::Image {
///     mime: Some("image/png".to_string()),
///     source: MediaSource::Base64("iVBORw0KGgo...".to_string()),
/// };
///
/// assert!(text.is_text());
/// assert!(!image.is_text());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Payload {
    /// Plain text input.
    Text(String),

    /// Image input (PNG, JPEG, WebP, GIF, etc.).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: Option<String>,
        /// Media source (URL, base64, or raw bytes)
        source: MediaSource,
    },
}

impl Payload {
    /// Creates a text payload.
    pub fn text(text: impl Into<String>) -> Self {
        Payload::Text(text.into())
    }

    /// Creates an image payload.
    pub fn image(mime: Option<String>, source: MediaSource) -> Self {
        Payload::Image { mime, source }
    }

    /// Returns true for text payloads.
    pub fn is_text(&self) -> bool {
        matches!(self, Payload::Text(_))
    }
}
