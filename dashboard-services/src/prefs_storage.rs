//! Durable key-value storage for user preferences
//!
//! SQLite-backed get/set over a single `prefs` table. The dashboard only
//! persists one key (the wallet list), but the table is generic.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use dashboard_core::{DashboardError, DashboardResult};

/// Preference storage backed by SQLite
pub struct PrefsStorage {
    conn: Mutex<Connection>,
}

impl PrefsStorage {
    /// Open (creating if needed) the preferences database at `db_path`
    pub fn new<P: AsRef<Path>>(db_path: P) -> DashboardResult<Self> {
        if let Some(parent) = db_path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DashboardError::storage(format!("Failed to create storage directory: {e}"))
            })?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| DashboardError::storage(format!("Failed to open database: {e}")))?;

        let storage = Self {
            conn: Mutex::new(conn),
        };
        storage.init_schema()?;
        Ok(storage)
    }

    /// Create an in-memory store (useful for testing)
    pub fn new_in_memory() -> DashboardResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DashboardError::storage(format!("Failed to open database: {e}")))?;

        let storage = Self {
            conn: Mutex::new(conn),
        };
        storage.init_schema()?;
        Ok(storage)
    }

    fn init_schema(&self) -> DashboardResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS prefs (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| DashboardError::storage(format!("Failed to initialize schema: {e}")))?;
        Ok(())
    }

    /// Read one key; `None` when the key has never been written
    pub fn get(&self, key: &str) -> DashboardResult<Option<String>> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT value FROM prefs WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| DashboardError::storage(format!("Failed to read key '{key}': {e}")))
    }

    /// Write one key, replacing any previous value
    pub fn set(&self, key: &str, value: &str) -> DashboardResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO prefs (key, value) VALUES (?1, ?2)",
            params![key, value],
        )
        .map_err(|e| DashboardError::storage(format!("Failed to write key '{key}': {e}")))?;
        Ok(())
    }

    fn lock(&self) -> DashboardResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| DashboardError::storage("Preferences lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let storage = PrefsStorage::new_in_memory().unwrap();
        assert_eq!(storage.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let storage = PrefsStorage::new_in_memory().unwrap();
        storage.set("wallets", r#"[{"address":"0xabc","name":"a"}]"#).unwrap();
        assert_eq!(
            storage.get("wallets").unwrap().as_deref(),
            Some(r#"[{"address":"0xabc","name":"a"}]"#)
        );
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let storage = PrefsStorage::new_in_memory().unwrap();
        storage.set("k", "one").unwrap();
        storage.set("k", "two").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));
    }
}
