use std::fmt;
use std::process::ExitStatus;

#[derive(Debug)]
pub enum EngineError {
    /// Vision API key not present in the environment
    MissingApiKey { env: String },

    /// HTTP transport failure (request never completed or body unreadable)
    Http { context: String, source: reqwest::Error },

    /// Vision provider answered with a non-success status
    Provider { status: u16, body: String },

    /// Vision provider answered, but with no usable text
    EmptyResponse,

    /// JSON parsing failed (provider body, helper output, or serde)
    JsonParse { context: String, source: serde_json::Error },

    /// Frame-grabber helper failed to spawn
    SubprocessSpawn { command: String, source: std::io::Error },

    /// Frame-grabber helper exited with a non-zero status
    SubprocessFailed { command: String, status: ExitStatus, stderr: String },

    /// Camera device refused access (permission failure at launch)
    CameraAccess(String),

    /// Pipe I/O with the frame-grabber helper failed
    SessionIO(String),

    /// Uploaded file is not a supported image format
    UnsupportedFormat { mime: String },

    /// Uploaded file exceeds the size limit
    FileTooLarge { size: u64 },

    /// Filesystem access failed
    Io { context: String, source: std::io::Error },

    /// Narration service answered with a non-success status
    Service { status: u16, body: String },

    /// Image payload or data URI is malformed
    InvalidPayload(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::MissingApiKey { env } => {
                write!(f, "API key is missing: set the {} environment variable", env)
            }
            EngineError::Http { context, source } => {
                write!(f, "HTTP error ({}): {}", context, source)
            }
            EngineError::Provider { status, body } => {
                write!(f, "Vision provider returned status {}: {}", status, body)
            }
            EngineError::EmptyResponse => {
                write!(f, "Vision provider returned no text")
            }
            EngineError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            EngineError::SubprocessSpawn { command, source } => {
                write!(f, "Failed to spawn '{}': {}", command, source)
            }
            EngineError::SubprocessFailed { command, status, stderr } => {
                write!(f, "'{}' exited with {}: {}", command, status, stderr)
            }
            EngineError::CameraAccess(msg) => {
                write!(f, "Camera access denied: {}", msg)
            }
            EngineError::SessionIO(msg) => {
                write!(f, "Camera session I/O failed: {}", msg)
            }
            EngineError::UnsupportedFormat { mime } => {
                write!(f, "Unsupported image format: {}", mime)
            }
            EngineError::FileTooLarge { size } => {
                write!(f, "File too large: {} bytes", size)
            }
            EngineError::Io { context, source } => {
                write!(f, "I/O error ({}): {}", context, source)
            }
            EngineError::Service { status, body } => {
                write!(f, "Narration service returned status {}: {}", status, body)
            }
            EngineError::InvalidPayload(msg) => {
                write!(f, "Invalid image payload: {}", msg)
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Http { source, .. } => Some(source),
            EngineError::JsonParse { source, .. } => Some(source),
            EngineError::SubprocessSpawn { source, .. } => Some(source),
            EngineError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
