use std::path::PathBuf;

use accessipilot::capture::camera::{FrameRequest, FrameResponse};
use accessipilot::capture::image::{
    ALLOWED_MIME_TYPES, ImagePayload, MAX_UPLOAD_BYTES, sniff_mime,
};
use accessipilot::capture::upload::load_upload;
use accessipilot::engine::error::EngineError;

// =========================================================================
// Helpers
// =========================================================================

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("accessipilot_test_{}", name));
    std::fs::write(&path, bytes).expect("failed to write temp fixture");
    path
}

fn png_bytes(total_len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; total_len];
    bytes[..PNG_MAGIC.len()].copy_from_slice(&PNG_MAGIC);
    bytes
}

// =========================================================================
// 1. Data URI round trip
// =========================================================================

#[test]
fn data_uri_round_trips() {
    let payload = ImagePayload::new("image/jpeg", b"frame bytes");
    let uri = payload.to_data_uri();

    assert!(uri.starts_with("data:image/jpeg;base64,"));
    assert_eq!(ImagePayload::from_data_uri(&uri).unwrap(), payload);
}

#[test]
fn data_uri_without_scheme_prefix_parses() {
    let parsed = ImagePayload::from_data_uri("image/png;base64,AAAA").unwrap();

    assert_eq!(parsed.mime, "image/png");
    assert_eq!(parsed.data, "AAAA");
}

#[test]
fn malformed_data_uri_is_rejected() {
    let err = ImagePayload::from_data_uri("image/png:AAAA").unwrap_err();
    assert!(matches!(err, EngineError::InvalidPayload(_)));
}

#[test]
fn decode_round_trips_bytes() {
    let payload = ImagePayload::new("image/webp", b"\x00\x01\x02\xff");
    assert_eq!(payload.decode().unwrap(), b"\x00\x01\x02\xff");
}

// =========================================================================
// 2. Magic byte sniffing
// =========================================================================

#[test]
fn sniffs_known_formats() {
    assert_eq!(sniff_mime(&png_bytes(64)), Some("image/png"));
    assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]), Some("image/jpeg"));

    let mut webp = Vec::from(*b"RIFF\x00\x00\x00\x00WEBP");
    webp.extend_from_slice(&[0u8; 8]);
    assert_eq!(sniff_mime(&webp), Some("image/webp"));
}

#[test]
fn unknown_bytes_sniff_to_none() {
    assert_eq!(sniff_mime(b"GIF89a trailer"), None);
    assert_eq!(sniff_mime(b""), None);
}

// =========================================================================
// 3. Upload validation — size gate
// =========================================================================

#[test]
fn oversized_upload_is_rejected() {
    let path = temp_file("oversized.png", &png_bytes(MAX_UPLOAD_BYTES as usize + 1));

    let err = load_upload(&path).unwrap_err();
    assert!(matches!(err, EngineError::FileTooLarge { .. }));

    let _ = std::fs::remove_file(path);
}

#[test]
fn upload_at_exactly_the_limit_is_accepted() {
    let path = temp_file("at_limit.png", &png_bytes(MAX_UPLOAD_BYTES as usize));

    let payload = load_upload(&path).unwrap();
    assert_eq!(payload.mime, "image/png");

    let _ = std::fs::remove_file(path);
}

// =========================================================================
// 4. Upload validation — format gate
// =========================================================================

#[test]
fn unsupported_content_is_rejected() {
    let path = temp_file("notes.txt", b"plain text, not an image");

    let err = load_upload(&path).unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedFormat { .. }));

    let _ = std::fs::remove_file(path);
}

#[test]
fn gif_content_is_rejected() {
    let path = temp_file("anim.gif", b"GIF89a............");

    let err = load_upload(&path).unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedFormat { .. }));

    let _ = std::fs::remove_file(path);
}

#[test]
fn jpeg_upload_is_accepted() {
    let path = temp_file("shot.jpg", &[0xFF, 0xD8, 0xFF, 0xE0, 0x10, 0x4A, 0x46]);

    let payload = load_upload(&path).unwrap();
    assert_eq!(payload.mime, "image/jpeg");
    assert!(ALLOWED_MIME_TYPES.contains(&payload.mime.as_str()));

    let _ = std::fs::remove_file(path);
}

#[test]
fn extension_fallback_applies_when_magic_bytes_are_unknown() {
    // Content the sniffer cannot place, but a .png extension: the declared
    // type is trusted when magic bytes say nothing
    let path = temp_file("declared.png", b"no recognizable magic here");

    let payload = load_upload(&path).unwrap();
    assert_eq!(payload.mime, "image/png");

    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_upload(&std::env::temp_dir().join("accessipilot_test_nonexistent.png"))
        .unwrap_err();
    assert!(matches!(err, EngineError::Io { .. }));
}

// =========================================================================
// 5. Fingerprints
// =========================================================================

#[test]
fn fingerprint_is_stable_and_content_sensitive() {
    let a = ImagePayload::new("image/png", b"frame a");
    let b = ImagePayload::new("image/png", b"frame b");

    assert_eq!(a.fingerprint(), a.fingerprint());
    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.fingerprint().len(), 40);
}

// =========================================================================
// 6. Camera helper protocol shapes
// =========================================================================

#[test]
fn grab_request_carries_the_frame_quality() {
    let json = serde_json::to_string(&FrameRequest::grab()).unwrap();
    assert_eq!(json, r#"{"cmd":"grab","quality":0.8}"#);
}

#[test]
fn quit_request_shape() {
    let json = serde_json::to_string(&FrameRequest::quit()).unwrap();
    assert_eq!(json, r#"{"cmd":"quit"}"#);
}

#[test]
fn ready_and_frame_responses_parse() {
    let ready: FrameResponse = serde_json::from_str(r#"{"ok":true,"ready":true}"#).unwrap();
    assert!(ready.ok);
    assert_eq!(ready.ready, Some(true));

    let frame: FrameResponse =
        serde_json::from_str(r#"{"ok":true,"data":"AAECAw=="}"#).unwrap();
    assert_eq!(frame.data.as_deref(), Some("AAECAw=="));

    let denied: FrameResponse =
        serde_json::from_str(r#"{"ok":false,"error":"permission denied"}"#).unwrap();
    assert!(!denied.ok);
    assert_eq!(denied.error.as_deref(), Some("permission denied"));
}
