use std::path::Path;

use crate::capture::image::{ALLOWED_MIME_TYPES, ImagePayload, MAX_UPLOAD_BYTES, sniff_mime};
use crate::engine::error::EngineError;

// ============================================================================
// File upload source
// ============================================================================

/// Map a file extension to a MIME type, for files whose magic bytes are not
/// recognized.
fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Validate and load an uploaded image file.
///
/// Both gates run before any model call: size first (from metadata, so an
/// oversized file is never read), then content type from magic bytes with an
/// extension fallback. Anything outside PNG/JPEG/WEBP is rejected.
pub fn load_upload(path: &Path) -> Result<ImagePayload, EngineError> {
    let metadata = std::fs::metadata(path).map_err(|e| EngineError::Io {
        context: format!("stat {}", path.display()),
        source: e,
    })?;

    if metadata.len() > MAX_UPLOAD_BYTES {
        return Err(EngineError::FileTooLarge {
            size: metadata.len(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| EngineError::Io {
        context: format!("read {}", path.display()),
        source: e,
    })?;

    let mime = sniff_mime(&bytes)
        .or_else(|| mime_from_extension(path))
        .unwrap_or("application/octet-stream");

    if !ALLOWED_MIME_TYPES.contains(&mime) {
        return Err(EngineError::UnsupportedFormat {
            mime: mime.to_string(),
        });
    }

    Ok(ImagePayload::new(mime, &bytes))
}
