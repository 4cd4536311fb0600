//! Key-value persistence port.
//!
//! # Responsibility
//! - Define the storage contract the application wires at startup.
//! - Keep concrete adapters (SQLite file/in-memory, plain memory) behind one
//!   trait so repos never see storage details.
//!
//! # Invariants
//! - Each entity is serialized as one whole blob under a fixed key and
//!   overwritten on every change; there is no partial update path.
//! - Adapters must not invent data: a missing key loads as `None`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

/// Fixed key for the persisted note collection blob.
pub const NOTES_KEY: &str = "retro_notes_data";
/// Fixed key for the persisted settings blob.
pub const SETTINGS_KEY: &str = "retro_notes_settings";

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level storage error shared by all adapters.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Storage contract injected into the repository layer.
///
/// `load` returns `None` when the key was never written. `save` overwrites
/// unconditionally.
pub trait KvStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> StoreResult<()>;
}
