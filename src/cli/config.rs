use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "accessipilot",
    version,
    about = "AI-powered accessibility auditing engine"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Gemini API endpoint
    #[arg(long, global = true)]
    pub gemini_endpoint: Option<String>,

    /// Gemini model name
    #[arg(long, global = true)]
    pub gemini_model: Option<String>,

    /// Path to config file (default: accessipilot.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit a screenshot file
    Audit {
        /// Path to a PNG, JPG, or WEBP image (max 4 MiB)
        #[arg(long)]
        file: String,

        /// Vision backend: gemini or mock
        #[arg(long, default_value = "gemini")]
        backend: String,

        /// Persist the narration to the narration service on success
        #[arg(long)]
        narrate: bool,

        /// Voice id to store with the narration
        #[arg(long)]
        voice: Option<String>,
    },

    /// Grab one camera frame and audit it
    Camera {
        /// Frame-grabber helper command (overrides config)
        #[arg(long)]
        grab_command: Option<String>,

        /// Vision backend: gemini or mock
        #[arg(long, default_value = "gemini")]
        backend: String,

        /// Persist the narration to the narration service on success
        #[arg(long)]
        narrate: bool,

        /// Voice id to store with the narration
        #[arg(long)]
        voice: Option<String>,
    },

    /// Store a narration with the narration service
    Narrate {
        /// Narration text to store
        #[arg(long)]
        text: String,

        /// Voice id to store with the narration
        #[arg(long)]
        voice: Option<String>,
    },

    /// List stored narrations (newest first, up to 50)
    Narrations,

    /// Delete a stored narration by id
    Delete {
        #[arg(long)]
        id: String,
    },

    /// Check narration service health
    Health,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `accessipilot.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeminiConfig {
    pub endpoint: Option<String>,
    pub model: Option<String>,

    /// Environment variable holding the API key (default: GEMINI_API_KEY)
    pub api_key_env: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Frame-grabber helper command
    #[serde(default = "default_grab_command")]
    pub command: String,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            command: default_grab_command(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_url")]
    pub base_url: String,

    /// Environment variable holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_service_url(),
            token_env: default_token_env(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    #[serde(default = "default_trace_path")]
    pub path: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            path: default_trace_path(),
        }
    }
}

// Serde default helpers
fn default_grab_command() -> String { "accessipilot-grab".to_string() }
fn default_service_url() -> String { "http://localhost:5001/accessipilot/api".to_string() }
fn default_token_env() -> String { "ACCESSIPILOT_TOKEN".to_string() }
fn default_trace_path() -> String { "audit_trace.jsonl".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("accessipilot.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
