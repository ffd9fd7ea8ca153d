use std::{fs::OpenOptions, io::Write, sync::Mutex};

use crate::trace::audit::AuditEvent;

/// Appends audit events as JSONL.
///
/// Diagnostic-only: every failure in here degrades to a stderr warning,
/// never an error surfaced to the caller.
pub struct TraceLogger {
    file: Option<Mutex<std::fs::File>>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Self {
                file: Some(Mutex::new(f)),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self { file: None }
            }
        }
    }

    /// A logger that drops every event (used by tests).
    pub fn disabled() -> Self {
        Self { file: None }
    }

    pub fn log(&self, event: &AuditEvent) {
        let Some(file_mutex) = &self.file else {
            return;
        };

        let json = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Warning: failed to serialize audit event: {}", e);
                return;
            }
        };

        match file_mutex.lock() {
            Ok(mut file) => {
                if let Err(e) = writeln!(file, "{}", json) {
                    eprintln!("Warning: failed to write audit event: {}", e);
                }
            }
            Err(e) => eprintln!("Warning: audit trace lock poisoned: {}", e),
        }
    }
}
