use std::path::Path;

use crate::capture::camera::CameraSession;
use crate::capture::upload::load_upload;
use crate::cli::config::AppConfig;
use crate::engine::descriptor::{ErrorDescriptor, descriptor_for};
use crate::engine::orchestrator::AuditEngine;
use crate::engine::vision::{
    DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL, GeminiBackend,
    MockVisionBackend, VisionBackend,
};
use crate::narrate::client::NarrationClient;
use crate::report::console::{format_error, format_report};
use crate::state::analysis::AnalysisState;
use crate::trace::logger::TraceLogger;

// ============================================================================
// Engine wiring
// ============================================================================

/// Canned response for the mock backend, in the wire format. Lets the full
/// pipeline run offline.
const MOCK_RESPONSE: &str = "NARATION: A login form with a username field, a password field, and a blue submit button on a white card.\nALT_TEXT: logo: company logo, hero: product screenshot\nISSUE: Low contrast on the submit button label\nWCAG: 1.4.3 Contrast (Minimum)\nFIX: Raise the button label contrast ratio to at least 4.5:1\nCOMMAND: accessipilot-adjust: property=\"filter\" ; value=\"contrast(120%)\" ; target=\"body\"";

/// Build a vision backend by name, resolving Gemini settings
/// CLI > config > defaults.
pub fn build_backend(
    name: &str,
    config: &AppConfig,
    endpoint: Option<&str>,
    model: Option<&str>,
) -> Box<dyn VisionBackend> {
    match name {
        "mock" => Box::new(MockVisionBackend::new(MOCK_RESPONSE)),
        _ => {
            let endpoint = endpoint
                .or(config.gemini.endpoint.as_deref())
                .unwrap_or(DEFAULT_GEMINI_ENDPOINT);
            let model = model
                .or(config.gemini.model.as_deref())
                .unwrap_or(DEFAULT_GEMINI_MODEL);
            let api_key_env = config
                .gemini
                .api_key_env
                .as_deref()
                .unwrap_or(DEFAULT_API_KEY_ENV);
            Box::new(GeminiBackend::new(endpoint, model, api_key_env))
        }
    }
}

fn build_engine(
    backend: &str,
    config: &AppConfig,
    endpoint: Option<&str>,
    model: Option<&str>,
) -> AuditEngine {
    AuditEngine::new(
        build_backend(backend, config, endpoint, model),
        TraceLogger::new(&config.trace.path),
    )
}

fn service_client(config: &AppConfig) -> Result<NarrationClient, Box<dyn std::error::Error>> {
    let token = std::env::var(&config.service.token_env).map_err(|_| {
        format!(
            "set {} to your narration service token",
            config.service.token_env
        )
    })?;
    Ok(NarrationClient::new(&config.service.base_url, &token))
}

/// Print the terminal state and optionally persist the narration.
/// Returns whether a report was produced.
fn finish_analysis(
    state: &AnalysisState,
    narrate: bool,
    voice: Option<&str>,
    config: &AppConfig,
) -> Result<bool, Box<dyn std::error::Error>> {
    if let Some(report) = &state.report {
        print!("{}", format_report(report));

        if narrate {
            let client = service_client(config)?;
            let record = client.create(&report.narration, voice)?;
            println!("\nNarration stored ({})", record.id);
        }
        return Ok(true);
    }

    if let Some(error) = &state.error {
        print!("{}", format_error(error));
    }
    Ok(false)
}

// ============================================================================
// audit subcommand
// ============================================================================

/// Audit an image file and print the report. Returns whether a report was
/// produced (false for every user-facing error state).
pub fn cmd_audit(
    file: &str,
    backend: &str,
    narrate: bool,
    voice: Option<&str>,
    config: &AppConfig,
    endpoint: Option<&str>,
    model: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut state = AnalysisState::new();

    let payload = match load_upload(Path::new(file)) {
        Ok(payload) => payload,
        Err(err) => {
            // Rejected before the engine: the analyzing flag never goes up
            if verbose > 0 {
                eprintln!("Upload rejected: {}", err);
            }
            state.reject(descriptor_for(&err));
            if let Some(error) = &state.error {
                print!("{}", format_error(error));
            }
            return Ok(false);
        }
    };

    if verbose > 0 {
        eprintln!("Analyzing {} ({})...", file, payload.mime);
    }

    let engine = build_engine(backend, config, endpoint, model);
    engine.analyze(&mut state, payload);

    finish_analysis(&state, narrate, voice, config)
}

// ============================================================================
// camera subcommand
// ============================================================================

/// Grab one frame from the camera helper and audit it. The device is
/// released on every exit path.
pub fn cmd_camera(
    grab_command: Option<&str>,
    backend: &str,
    narrate: bool,
    voice: Option<&str>,
    config: &AppConfig,
    endpoint: Option<&str>,
    model: Option<&str>,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let command = grab_command.unwrap_or(config.camera.command.as_str());
    let mut state = AnalysisState::new();

    let mut session = match CameraSession::launch(command) {
        Ok(session) => session,
        Err(err) => {
            // Launch-time failure means the device never opened
            if verbose > 0 {
                eprintln!("Camera launch failed: {}", err);
            }
            state.reject(ErrorDescriptor::camera_access());
            if let Some(error) = &state.error {
                print!("{}", format_error(error));
            }
            return Ok(false);
        }
    };

    let frame = match session.grab() {
        Ok(frame) => frame,
        Err(err) => {
            session.release();
            if verbose > 0 {
                eprintln!("Frame grab failed: {}", err);
            }
            state.reject(descriptor_for(&err));
            if let Some(error) = &state.error {
                print!("{}", format_error(error));
            }
            return Ok(false);
        }
    };

    let engine = build_engine(backend, config, endpoint, model);
    engine.analyze(&mut state, frame);
    session.release();

    finish_analysis(&state, narrate, voice, config)
}

// ============================================================================
// narration service subcommands
// ============================================================================

pub fn cmd_narrate(
    text: &str,
    voice: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = service_client(config)?;
    let record = client.create(text, voice)?;
    println!(
        "Stored narration {} ({} words)",
        record.id,
        record.word_count.unwrap_or(0)
    );
    Ok(())
}

pub fn cmd_narrations(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = service_client(config)?;
    let records = client.list()?;

    if records.is_empty() {
        println!("No stored narrations.");
        return Ok(());
    }

    for record in &records {
        println!(
            "[{}] {} — {}",
            record.id,
            record.created_at.as_deref().unwrap_or("unknown time"),
            record.text
        );
    }
    Ok(())
}

pub fn cmd_delete(id: &str, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = service_client(config)?;
    let ack = client.delete(id)?;
    println!("Deleted narration {}", ack.id);
    Ok(())
}

pub fn cmd_health(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Health needs no token, so don't demand one from the environment
    let client = NarrationClient::new(&config.service.base_url, "");
    let health = client.health()?;
    println!("{}: {} at {}", health.service, health.status, health.timestamp);
    Ok(())
}
