//! Settings persistence.
//!
//! # Invariants
//! - Missing or undecodable settings resolve to `AppSettings::default()`
//!   with a warn log; note data has stricter corruption handling, settings
//!   do not.

use super::RepoResult;
use crate::model::settings::AppSettings;
use crate::store::{KvStore, SETTINGS_KEY};
use log::warn;

/// Settings repository over an injected store.
pub struct SettingsRepository<S: KvStore> {
    store: S,
}

impl<S: KvStore> SettingsRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads settings, falling back to defaults on missing or bad data.
    pub fn load(&self) -> RepoResult<AppSettings> {
        let Some(blob) = self.store.load(SETTINGS_KEY)? else {
            return Ok(AppSettings::default());
        };
        match serde_json::from_str(&blob) {
            Ok(settings) => Ok(settings),
            Err(err) => {
                warn!(
                    "event=settings_load module=repo status=fallback error={}",
                    err
                );
                Ok(AppSettings::default())
            }
        }
    }

    /// Overwrites the settings blob.
    pub fn save(&mut self, settings: AppSettings) -> RepoResult<()> {
        // Serializing a two-field struct cannot fail; keep the error path
        // anyway so the signature matches the note repository.
        let blob = serde_json::to_string(&settings).unwrap_or_else(|_| "{}".to_string());
        self.store.save(SETTINGS_KEY, &blob)?;
        Ok(())
    }

    /// Releases the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}
