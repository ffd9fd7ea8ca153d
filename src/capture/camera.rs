use std::io::{BufRead, BufReader, Write};
use std::process::{Child, Command, Stdio};

use serde::{Deserialize, Serialize};

use crate::capture::image::ImagePayload;
use crate::engine::error::EngineError;

// ============================================================================
// Camera source — external frame-grabber helper over NDJSON
// ============================================================================

/// JPEG quality requested for camera frames.
pub const FRAME_QUALITY: f32 = 0.8;

/// Request sent to the frame-grabber helper over stdin (one JSON line).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FrameRequest {
    Grab { cmd: &'static str, quality: f32 },
    Quit { cmd: &'static str },
}

impl FrameRequest {
    pub fn grab() -> Self {
        FrameRequest::Grab {
            cmd: "grab",
            quality: FRAME_QUALITY,
        }
    }

    pub fn quit() -> Self {
        FrameRequest::Quit { cmd: "quit" }
    }
}

/// Response received from the helper over stdout (one JSON line).
#[derive(Debug, Deserialize)]
pub struct FrameResponse {
    pub ok: bool,
    #[serde(default)]
    pub ready: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
    /// base64 JPEG frame
    #[serde(default)]
    pub data: Option<String>,
}

/// A live camera session backed by an external frame-grabber helper.
///
/// The helper owns the device. The device must be freed on every exit path,
/// so `release()` is idempotent and also invoked from `Drop` as a
/// best-effort fallback.
pub struct CameraSession {
    child: Child,
    stdin: std::process::ChildStdin,
    reader: BufReader<std::process::ChildStdout>,
    released: bool,
}

impl CameraSession {
    /// Launch the configured helper and wait for its ready signal.
    ///
    /// A ready line reporting failure means the device refused access; that
    /// maps to the camera-access descriptor upstream.
    pub fn launch(command: &str) -> Result<Self, EngineError> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or_else(|| {
            EngineError::CameraAccess("no camera helper command configured".into())
        })?;

        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| EngineError::SubprocessSpawn {
                command: command.to_string(),
                source: e,
            })?;

        let stdin = child.stdin.take().ok_or_else(|| {
            EngineError::SessionIO("failed to capture stdin of camera helper".into())
        })?;
        let stdout = child.stdout.take().ok_or_else(|| {
            EngineError::SessionIO("failed to capture stdout of camera helper".into())
        })?;

        let mut reader = BufReader::new(stdout);

        let mut line = String::new();
        reader.read_line(&mut line).map_err(|e| {
            EngineError::SessionIO(format!("failed to read camera ready signal: {}", e))
        })?;

        let response: FrameResponse =
            serde_json::from_str(line.trim()).map_err(|e| EngineError::JsonParse {
                context: "camera helper ready signal".into(),
                source: e,
            })?;

        if !response.ok || response.ready != Some(true) {
            return Err(EngineError::CameraAccess(
                response
                    .error
                    .unwrap_or_else(|| "camera helper did not become ready".into()),
            ));
        }

        Ok(CameraSession {
            child,
            stdin,
            reader,
            released: false,
        })
    }

    /// Send a request and read the response line.
    fn send(&mut self, request: &FrameRequest) -> Result<FrameResponse, EngineError> {
        let json = serde_json::to_string(request).map_err(|e| EngineError::JsonParse {
            context: "FrameRequest".into(),
            source: e,
        })?;

        writeln!(self.stdin, "{}", json).map_err(|e| {
            EngineError::SessionIO(format!("failed to write to camera helper: {}", e))
        })?;
        self.stdin.flush().map_err(|e| {
            EngineError::SessionIO(format!("failed to flush camera helper stdin: {}", e))
        })?;

        let mut line = String::new();
        self.reader.read_line(&mut line).map_err(|e| {
            EngineError::SessionIO(format!("failed to read from camera helper: {}", e))
        })?;

        if line.trim().is_empty() {
            // A dead helper gives EOF; report its exit status when we have it
            if let Ok(Some(status)) = self.child.try_wait() {
                return Err(EngineError::SubprocessFailed {
                    command: "camera helper".into(),
                    status,
                    stderr: String::new(),
                });
            }
            return Err(EngineError::SessionIO(
                "empty response from camera helper".into(),
            ));
        }

        serde_json::from_str(line.trim()).map_err(|e| EngineError::JsonParse {
            context: "camera helper response".into(),
            source: e,
        })
    }

    /// Grab a single frame as a JPEG payload.
    pub fn grab(&mut self) -> Result<ImagePayload, EngineError> {
        let response = self.send(&FrameRequest::grab())?;
        if !response.ok {
            return Err(EngineError::SessionIO(
                response
                    .error
                    .unwrap_or_else(|| "camera helper reported failure".into()),
            ));
        }
        let data = response.data.ok_or_else(|| {
            EngineError::SessionIO("no frame data in camera helper response".into())
        })?;
        Ok(ImagePayload::from_base64("image/jpeg", &data))
    }

    /// Stop the helper and free the device. Idempotent, best effort.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let _ = self.send(&FrameRequest::quit());
        let _ = self.child.wait();
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.release();
    }
}
