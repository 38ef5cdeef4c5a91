//! Blocking client for the generative-language API.
//!
//! Model selection mirrors the model listing endpoint: the first entry that
//! supports `generateContent` wins, with a fixed fallback when the listing is
//! empty. Calls are synchronous; the merge path never depends on a live
//! connection, so a failed call leaves any previously obtained draft usable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{GenAiConfig, FALLBACK_MODEL};

const GENERATE_METHOD: &str = "generateContent";

/// Errors from the text-generation collaborator, classified so the caller can
/// tell the user whether to retry, reconfigure, or edit manually.
#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("generation quota exceeded (HTTP 429); retry later or switch model")]
    QuotaExceeded,

    #[error("model {0} not found or not supported for generation")]
    ModelNotFound(String),

    #[error("generative-language API returned HTTP {0}")]
    Api(u16),

    #[error("network error reaching the generation API: {0}")]
    Transport(ureq::Error),

    #[error("model returned no usable text")]
    EmptyResponse,
}

impl GenAiError {
    /// Transient failures may succeed on retry; the rest need a config or
    /// input change.
    pub fn is_transient(&self) -> bool {
        match self {
            GenAiError::QuotaExceeded | GenAiError::Transport(_) => true,
            GenAiError::Api(status) => *status >= 500,
            GenAiError::ModelNotFound(_) | GenAiError::EmptyResponse => false,
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

/// One entry from the model listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn supports_generation(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|method| method == GENERATE_METHOD)
    }
}

/// Synchronous client over a resolved [`GenAiConfig`].
pub struct GenAiClient {
    agent: ureq::Agent,
    config: GenAiConfig,
}

impl GenAiClient {
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            agent: ureq::Agent::new_with_defaults(),
            config,
        }
    }

    pub fn list_models(&self) -> Result<Vec<ModelInfo>, GenAiError> {
        let url = format!("{}/models?key={}", self.config.api_base, self.config.api_key);
        let mut response = self
            .agent
            .get(url.as_str())
            .call()
            .map_err(|err| classify(err, None))?;
        let list: ModelList = response
            .body_mut()
            .read_json()
            .map_err(|err| classify(err, None))?;
        Ok(list.models)
    }

    /// Explicit override if configured, otherwise the first listed model that
    /// supports generation, otherwise the fallback.
    pub fn resolve_model(&self) -> Result<String, GenAiError> {
        if let Some(model) = &self.config.model {
            return Ok(model.clone());
        }
        let models = self.list_models()?;
        let model = pick_model(&models).unwrap_or(FALLBACK_MODEL).to_string();
        tracing::debug!(%model, scanned = models.len(), "resolved generation model");
        Ok(model)
    }

    pub fn generate(&self, model: &str, prompt: &str) -> Result<String, GenAiError> {
        let url = format!(
            "{}/{}:{}?key={}",
            self.config.api_base, model, GENERATE_METHOD, self.config.api_key
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };
        tracing::debug!(%model, prompt_bytes = prompt.len(), "calling generateContent");
        let mut response = self
            .agent
            .post(url.as_str())
            .send_json(&request)
            .map_err(|err| classify(err, Some(model)))?;
        let body: GenerateResponse = response
            .body_mut()
            .read_json()
            .map_err(|err| classify(err, Some(model)))?;
        extract_text(body)
    }
}

fn classify(err: ureq::Error, model: Option<&str>) -> GenAiError {
    match err {
        ureq::Error::StatusCode(429) => GenAiError::QuotaExceeded,
        ureq::Error::StatusCode(404) => match model {
            Some(model) => GenAiError::ModelNotFound(model.to_string()),
            None => GenAiError::Api(404),
        },
        ureq::Error::StatusCode(status) => GenAiError::Api(status),
        other => GenAiError::Transport(other),
    }
}

fn pick_model(models: &[ModelInfo]) -> Option<&str> {
    models
        .iter()
        .find(|model| model.supports_generation())
        .map(|model| model.name.as_str())
}

/// Text of the first candidate, parts joined in order.
fn extract_text(response: GenerateResponse) -> Result<String, GenAiError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();
    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(GenAiError::EmptyResponse);
    }
    Ok(text)
}
