use serde::{Deserialize, Serialize};

use crate::capture::image::ImagePayload;
use crate::engine::error::EngineError;

// ============================================================================
// VisionBackend trait — the model capability consumed by the engine
// ============================================================================

/// Submit an image and a prompt, receive raw text following the line-prefix
/// protocol. Implementations own transport and credentials; the engine never
/// sees either.
pub trait VisionBackend {
    fn describe(&self, image: &ImagePayload, prompt: &str) -> Result<String, EngineError>;
}

// ============================================================================
// Gemini backend
// ============================================================================

pub const DEFAULT_GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

pub struct GeminiBackend {
    pub endpoint: String,
    pub model: String,
    pub api_key_env: String,
}

impl Default for GeminiBackend {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl GeminiBackend {
    pub fn new(endpoint: &str, model: &str, api_key_env: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            model: model.to_string(),
            api_key_env: api_key_env.to_string(),
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart {
    Inline { inline_data: InlineData },
    Text { text: String },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl VisionBackend for GeminiBackend {
    fn describe(&self, image: &ImagePayload, prompt: &str) -> Result<String, EngineError> {
        // The key is resolved per call so a missing credential surfaces
        // through the same failure path as a transport error.
        let api_key = std::env::var(&self.api_key_env).map_err(|_| {
            EngineError::MissingApiKey {
                env: self.api_key_env.clone(),
            }
        })?;

        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![
                    RequestPart::Inline {
                        inline_data: InlineData {
                            mime_type: image.mime.clone(),
                            data: image.data.clone(),
                        },
                    },
                    RequestPart::Text {
                        text: prompt.to_string(),
                    },
                ],
            }],
        };

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.endpoint, self.model, api_key
        );

        let client = reqwest::blocking::Client::new();
        let response = client.post(&url).json(&request).send().map_err(|e| {
            EngineError::Http {
                context: "generateContent request".into(),
                source: e,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Provider {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let body: GenerateResponse = response.json().map_err(|e| EngineError::Http {
            context: "generateContent response".into(),
            source: e,
        })?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(EngineError::EmptyResponse);
        }

        Ok(text)
    }
}

// ============================================================================
// Mock backend (for tests and offline runs)
// ============================================================================

pub struct MockVisionBackend {
    pub response: String,
}

impl MockVisionBackend {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

impl VisionBackend for MockVisionBackend {
    fn describe(&self, _image: &ImagePayload, _prompt: &str) -> Result<String, EngineError> {
        Ok(self.response.clone())
    }
}
