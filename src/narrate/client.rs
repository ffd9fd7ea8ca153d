use crate::engine::error::EngineError;
use crate::narrate::narrate_model::{DeleteAck, HealthStatus, NarrationRecord, NarrationRequest};

// ============================================================================
// Narration persistence client
// ============================================================================

/// Client for the narration persistence service.
///
/// The service uses the bearer token directly as the user id, with no
/// signature verification. That is a known gap of the external service, not
/// something this client can compensate for; scope tokens accordingly.
pub struct NarrationClient {
    base_url: String,
    token: String,
    http: reqwest::blocking::Client,
}

impl NarrationClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    fn check(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, EngineError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(EngineError::Service {
            status: status.as_u16(),
            body: response.text().unwrap_or_default(),
        })
    }

    /// GET /health. No auth required.
    pub fn health(&self) -> Result<HealthStatus, EngineError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .map_err(|e| EngineError::Http {
                context: "GET /health".into(),
                source: e,
            })?;
        Self::check(response)?.json().map_err(|e| EngineError::Http {
            context: "GET /health body".into(),
            source: e,
        })
    }

    /// POST /narrate: store one narration for the token's user.
    ///
    /// The service answers 401 without a token and 400 for empty text.
    pub fn create(
        &self,
        text: &str,
        voice_id: Option<&str>,
    ) -> Result<NarrationRecord, EngineError> {
        let body = NarrationRequest {
            text: text.to_string(),
            voice_id: voice_id.map(|v| v.to_string()),
        };
        let response = self
            .http
            .post(format!("{}/narrate", self.base_url))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .map_err(|e| EngineError::Http {
                context: "POST /narrate".into(),
                source: e,
            })?;
        Self::check(response)?.json().map_err(|e| EngineError::Http {
            context: "POST /narrate body".into(),
            source: e,
        })
    }

    /// GET /narrations: up to the 50 most recent records for the token's
    /// user, newest first. The cap and ordering are server-side.
    pub fn list(&self) -> Result<Vec<NarrationRecord>, EngineError> {
        let response = self
            .http
            .get(format!("{}/narrations", self.base_url))
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| EngineError::Http {
                context: "GET /narrations".into(),
                source: e,
            })?;
        Self::check(response)?.json().map_err(|e| EngineError::Http {
            context: "GET /narrations body".into(),
            source: e,
        })
    }

    /// DELETE /narrations/:id: only records owned by the token's user; the
    /// service answers 403 otherwise.
    pub fn delete(&self, id: &str) -> Result<DeleteAck, EngineError> {
        let response = self
            .http
            .delete(format!("{}/narrations/{}", self.base_url, id))
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| EngineError::Http {
                context: "DELETE /narrations/:id".into(),
                source: e,
            })?;
        Self::check(response)?.json().map_err(|e| EngineError::Http {
            context: "DELETE /narrations/:id body".into(),
            source: e,
        })
    }
}
