//! Repository layer over the key-value port.
//!
//! # Responsibility
//! - Map whole-blob JSON persistence onto typed note/settings access.
//! - Keep serialization details away from service orchestration.
//!
//! # Invariants
//! - The note collection is read and written as one blob under its fixed key.
//! - Repositories return semantic errors (`Corrupt`) in addition to storage
//!   transport errors; they never silently drop persisted data.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod note_repo;
pub mod settings_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for blob persistence and decoding.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    /// The stored blob under `key` is not valid JSON for its type.
    Corrupt { key: &'static str, message: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Corrupt { key, message } => {
                write!(f, "corrupt blob under key `{key}`: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Corrupt { .. } => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
