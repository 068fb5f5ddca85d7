//! Byte sources for media payloads.

use arcimboldo_core::{MediaSource, Payload};
use arcimboldo_error::{ArcimboldoResult, ExtractionError, ExtractionErrorKind, HttpError};
use async_trait::async_trait;
use derive_getters::Getters;
use std::path::Path;

/// Resolves a path or URL to raw bytes plus a MIME type.
#[async_trait]
pub trait ByteSource: Send + Sync {
    /// Fetches the bytes behind `location`.
    async fn resolve(&self, location: &str) -> ArcimboldoResult<ResolvedBytes>;
}

/// Raw bytes with the MIME type they were served as.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ResolvedBytes {
    /// The content bytes
    bytes: Vec<u8>,
    /// MIME type, e.g., "image/png"
    mime: String,
}

impl ResolvedBytes {
    /// Creates a new resolved byte bundle.
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
        }
    }

    /// Consumes the bundle into its parts.
    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.bytes, self.mime)
    }
}

/// Reads local files, sniffing the MIME type from the extension.
#[derive(Debug, Clone, Default)]
pub struct FileByteSource;

#[async_trait]
impl ByteSource for FileByteSource {
    #[tracing::instrument(skip(self))]
    async fn resolve(&self, location: &str) -> ArcimboldoResult<ResolvedBytes> {
        let bytes = tokio::fs::read(location).await.map_err(|e| {
            ExtractionError::new(ExtractionErrorKind::Payload(format!(
                "Failed to read '{}': {}",
                location, e
            )))
        })?;
        Ok(ResolvedBytes::new(bytes, mime_for_path(location)))
    }
}

/// Fetches over HTTP, preferring the served Content-Type.
#[derive(Debug, Clone)]
pub struct HttpByteSource {
    client: reqwest::Client,
}

impl HttpByteSource {
    /// Creates an HTTP byte source.
    pub fn new() -> ArcimboldoResult<Self> {
        use std::time::Duration;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| HttpError::new(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ByteSource for HttpByteSource {
    #[tracing::instrument(skip(self))]
    async fn resolve(&self, location: &str) -> ArcimboldoResult<ResolvedBytes> {
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        if !response.status().is_success() {
            return Err(HttpError::new(format!(
                "GET {} returned status {}",
                location,
                response.status()
            ))
            .into());
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| mime_for_path(location));

        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        Ok(ResolvedBytes::new(bytes.to_vec(), mime))
    }
}

/// Replaces a URL-sourced image payload with fetched inline bytes.
///
/// Non-URL payloads pass through unchanged. An explicit MIME type on the
/// payload wins over the one the source reports.
pub async fn resolve_payload<S: ByteSource>(
    source: &S,
    payload: Payload,
) -> ArcimboldoResult<Payload> {
    match payload {
        Payload::Image {
            mime,
            source: MediaSource::Url(url),
        } => {
            let resolved = source.resolve(&url).await?;
            let (bytes, served_mime) = resolved.into_parts();
            Ok(Payload::Image {
                mime: mime.or(Some(served_mime)),
                source: MediaSource::Binary(bytes),
            })
        }
        other => Ok(other),
    }
}

fn mime_for_path(location: &str) -> String {
    let extension = Path::new(location)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
    .to_string()
}
