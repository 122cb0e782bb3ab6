//! SQLite-backed key-value storage.
//!
//! Each value is a JSON blob stored under a string key in the `kv` table.
//! Writes go straight to disk; there is no caching layer.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    store::KeyValueStore,
};

mod migrations;

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Reads the blob stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value")
    }

    /// Replaces the blob stored under `key`.
    pub fn put(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, now])
            .db_context("Failed to write value")?;
        Ok(())
    }
}

impl KeyValueStore for Database {
    fn load_raw(&self, key: &str) -> Result<Option<String>> {
        self.get(key)
    }

    fn save_raw(&mut self, key: &str, value: &str) -> Result<()> {
        self.put(key, value)
    }
}
