use accessipilot::capture::image::ImagePayload;

/// A well-formed model response covering every field of the wire format.
pub const FULL_RESPONSE: &str = "NARATION: This button has insufficient contrast for readability today.\nALT_TEXT: logo: site logo\nISSUE: Low contrast\nWCAG: 1.4.3\nFIX: Increase foreground/background ratio\nCOMMAND: accessipilot-adjust: property=\"filter\" ; value=\"contrast(120%)\" ; target=\"body\"";

/// A tiny fake frame, good enough for anything that never decodes it.
pub fn sample_frame() -> ImagePayload {
    ImagePayload::new("image/jpeg", b"not really a jpeg")
}
