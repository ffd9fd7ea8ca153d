use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::engine::error::EngineError;

/// Upload limit: 4 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 4 * 1024 * 1024;

/// MIME types accepted from file uploads.
pub const ALLOWED_MIME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// An encoded captured frame.
///
/// Held only long enough to preview and submit; never written to durable
/// storage by this crate. Trace events record `fingerprint()` instead of the
/// bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub mime: String,

    /// Standard base64 of the image bytes
    pub data: String,
}

impl ImagePayload {
    pub fn new(mime: &str, bytes: &[u8]) -> Self {
        Self {
            mime: mime.to_string(),
            data: BASE64.encode(bytes),
        }
    }

    pub fn from_base64(mime: &str, data: &str) -> Self {
        Self {
            mime: mime.to_string(),
            data: data.to_string(),
        }
    }

    /// Self-describing form: `data:<mime>;base64,<data>`.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data)
    }

    /// Parse a data URI, with or without the `data:` scheme prefix.
    pub fn from_data_uri(uri: &str) -> Result<Self, EngineError> {
        let stripped = uri.strip_prefix("data:").unwrap_or(uri);
        let (mime, data) = stripped.split_once(";base64,").ok_or_else(|| {
            EngineError::InvalidPayload("missing ';base64,' separator".into())
        })?;
        if mime.is_empty() {
            return Err(EngineError::InvalidPayload("empty mime type".into()));
        }
        Ok(Self {
            mime: mime.to_string(),
            data: data.to_string(),
        })
    }

    pub fn decode(&self) -> Result<Vec<u8>, EngineError> {
        BASE64
            .decode(&self.data)
            .map_err(|e| EngineError::InvalidPayload(format!("invalid base64: {}", e)))
    }

    /// sha1 hex of the encoded payload. Lets diagnostics correlate captures
    /// without image bytes ever reaching the trace file.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha1::new();
        hasher.update(self.data.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

/// Identify PNG/JPEG/WEBP content from magic bytes.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }
    if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    None
}
