//! External text-assistant port.
//!
//! # Responsibility
//! - Define the seam between note use-cases and the generative text service.
//!
//! # Invariants
//! - Blank input never reaches the network.
//! - A missing API key degrades to the input text, it does not error.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod gemini;

pub use gemini::GeminiClient;

pub type AiResult<T> = Result<T, AiError>;

/// Assistant call failure modes.
#[derive(Debug)]
pub enum AiError {
    /// Transport failure talking to the service.
    Http(reqwest::Error),
    /// Service answered with a non-success status.
    Api { status: u16, message: String },
    /// Service answered but produced no usable text.
    EmptyResponse,
}

impl Display for AiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(err) => write!(f, "{err}"),
            Self::Api { status, message } => {
                write!(f, "assistant API error (status {status}): {message}")
            }
            Self::EmptyResponse => write!(f, "assistant returned no text"),
        }
    }
}

impl Error for AiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

/// Generative text operations consumed by the editor.
pub trait TextAssistant {
    /// Fixes grammar and flow while keeping the input's language; returns
    /// only the polished text.
    fn polish(&self, text: &str) -> AiResult<String>;

    /// Continues the thought in a consistent style, kept brief.
    fn continue_thought(&self, text: &str) -> AiResult<String>;
}
