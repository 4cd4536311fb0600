//! Gemini-backed text assistant.
//!
//! # Responsibility
//! - Implement the `TextAssistant` port against the Gemini generateContent
//!   endpoint.
//!
//! # Invariants
//! - Request/response shapes stay private to this module.
//! - Missing-key and blank-input short circuits mirror the port contract.

use super::{AiError, AiResult, TextAssistant};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .map(|part| part.text.as_str())
            .next()
    }
}

/// Blocking HTTP client for the Gemini text service.
pub struct GeminiClient {
    client: reqwest::blocking::Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    /// Builds a client; `api_key = None` keeps the assistant in degraded
    /// (pass-through) mode rather than failing construction.
    pub fn new(api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        Self {
            client: reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                // Builder only fails on TLS backend misconfiguration.
                .unwrap_or_else(|_| reqwest::blocking::Client::new()),
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the model name (builder pattern).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn generate(&self, key: &str, prompt: String) -> AiResult<String> {
        let url = format!(
            "{API_BASE}/models/{}:generateContent?key={key}",
            self.model
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self.client.post(&url).json(&request).send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            warn!(
                "event=ai_call module=ai status=error http_status={}",
                status.as_u16()
            );
            return Err(AiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json()?;
        let text = body
            .first_text()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(AiError::EmptyResponse)?;

        info!("event=ai_call module=ai status=ok chars={}", text.len());
        Ok(text)
    }
}

impl TextAssistant for GeminiClient {
    fn polish(&self, text: &str) -> AiResult<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        let Some(key) = self.api_key.as_deref() else {
            warn!("event=ai_call module=ai status=skipped reason=no_api_key");
            return Ok(text.to_string());
        };

        let prompt = format!(
            "You are a vintage typewriter editor. \
             Please fix the grammar and improve the flow of the following text, \
             keeping it concise and elegant. \
             Maintain the original language (if Chinese, keep Chinese). \
             Return ONLY the polished text, no explanations.\n\nText: {text}"
        );
        match self.generate(key, prompt) {
            // An empty model answer falls back to the user's text unchanged.
            Err(AiError::EmptyResponse) => Ok(text.to_string()),
            other => other,
        }
    }

    fn continue_thought(&self, text: &str) -> AiResult<String> {
        if text.is_empty() {
            return Ok(String::new());
        }
        let Some(key) = self.api_key.as_deref() else {
            warn!("event=ai_call module=ai status=skipped reason=no_api_key");
            return Ok(String::new());
        };

        let prompt = format!(
            "You are a helpful writing assistant. \
             Continue the following thought or paragraph in a style consistent \
             with the input. Keep it brief (max 2-3 sentences).\n\nInput: {text}"
        );
        match self.generate(key, prompt) {
            Err(AiError::EmptyResponse) => Ok(String::new()),
            other => other,
        }
    }
}
