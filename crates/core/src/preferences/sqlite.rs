//! SQLite-backed preference store implementation.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection};

use super::{PreferenceStore, PreferencesError};

/// SQLite-backed key-value preference store.
pub struct SqlitePreferenceStore {
    conn: Mutex<Connection>,
}

impl SqlitePreferenceStore {
    /// Create a new store, creating the database file and table if needed.
    pub fn new(path: &Path) -> Result<Self, PreferencesError> {
        let conn = Connection::open(path).map_err(|e| PreferencesError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, PreferencesError> {
        let conn =
            Connection::open_in_memory().map_err(|e| PreferencesError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), PreferencesError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )
        .map_err(|e| PreferencesError::Database(e.to_string()))?;

        Ok(())
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferencesError> {
        let conn = self.conn.lock().unwrap();

        match conn.query_row(
            "SELECT value FROM preferences WHERE key = ?",
            params![key],
            |row| row.get(0),
        ) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(PreferencesError::Database(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferencesError> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .map_err(|e| PreferencesError::Database(e.to_string()))?;

        Ok(())
    }
}
