//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and filter calls into use-case level APIs.
//! - Keep UI layers decoupled from storage and serialization details.

pub mod export_service;
pub mod note_service;
