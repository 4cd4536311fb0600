//! SQLite-backed key-value adapter.
//!
//! # Responsibility
//! - Open file or in-memory SQLite stores and bring the schema up to date.
//! - Implement the `KvStore` contract over one `kv` table.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version` and only moves
//!   forward; a store written by a newer build is rejected, not mangled.
//! - Returned stores have all pending migrations applied.

use super::{KvStore, StoreError, StoreResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: "CREATE TABLE IF NOT EXISTS kv (
              key        TEXT PRIMARY KEY,
              value      TEXT NOT NULL,
              updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
          );",
}];

fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Embedded key-value store on a SQLite connection.
#[derive(Debug)]
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Opens a file-backed store and applies pending migrations.
    ///
    /// # Side effects
    /// - Emits `store_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=store status=start mode=file");

        let conn = match Connection::open(path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=store_open module=store status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match Self::bootstrap(conn) {
            Ok(store) => {
                info!(
                    "event=store_open module=store status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(store)
            }
            Err(err) => {
                error!(
                    "event=store_open module=store status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Opens an in-memory store; used by tests and throwaway sessions.
    pub fn open_in_memory() -> StoreResult<Self> {
        info!("event=store_open module=store status=start mode=memory");
        let store = Self::bootstrap(Connection::open_in_memory()?)?;
        info!("event=store_open module=store status=ok mode=memory");
        Ok(store)
    }

    fn bootstrap(mut conn: Connection) -> StoreResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }
}

impl KvStore for SqliteKvStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

fn apply_migrations(conn: &mut Connection) -> StoreResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(StoreError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    Ok(())
}

fn current_user_version(conn: &Connection) -> StoreResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::{current_user_version, latest_version, SqliteKvStore};
    use crate::store::{KvStore, StoreError};

    #[test]
    fn missing_key_loads_as_none() {
        let store = SqliteKvStore::open_in_memory().unwrap();
        assert_eq!(store.load("absent").unwrap(), None);
    }

    #[test]
    fn save_overwrites_previous_value() {
        let mut store = SqliteKvStore::open_in_memory().unwrap();
        store.save("k", "first").unwrap();
        store.save("k", "second").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn open_sets_user_version_to_latest() {
        let store = SqliteKvStore::open_in_memory().unwrap();
        assert_eq!(current_user_version(&store.conn).unwrap(), latest_version());
    }

    #[test]
    fn newer_schema_version_is_rejected() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA user_version = 999;").unwrap();
        let err = SqliteKvStore::bootstrap(conn).unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnsupportedSchemaVersion {
                db_version: 999,
                ..
            }
        ));
    }
}
