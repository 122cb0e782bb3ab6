//! Persistent key-value store contract and typed access to the two records
//! the application keeps: the briefing log and the settings.

use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::{BriefError, Result},
    models::{Briefing, Settings},
};

/// Key under which the briefing log is stored.
pub const BRIEFINGS_KEY: &str = "briefings";

/// Key under which the settings record is stored.
pub const SETTINGS_KEY: &str = "adminSettings";

/// Durable storage of string blobs by key.
///
/// Implementations must make a successful `save_raw` durable before
/// returning.
pub trait KeyValueStore: Send {
    /// Reads the blob under `key`, `None` when the key was never written.
    fn load_raw(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the blob under `key`.
    fn save_raw(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Typed JSON access on top of a [`KeyValueStore`].
pub struct Store {
    inner: Box<dyn KeyValueStore>,
}

impl Store {
    pub fn new(inner: impl KeyValueStore + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    pub fn from_boxed(inner: Box<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// Loads and decodes the value under `key`, or returns `default` when the
    /// key is missing.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T> {
        match self.inner.load_raw(key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(default),
        }
    }

    /// Encodes and writes `value` under `key`.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.inner.save_raw(key, &raw)
    }

    /// The briefing log in submission order.
    pub fn briefings(&self) -> Result<Vec<Briefing>> {
        self.load(BRIEFINGS_KEY, Vec::new())
    }

    /// Appends one briefing to the log and returns the new log length.
    pub fn append_briefing(&mut self, briefing: &Briefing) -> Result<usize> {
        let mut log = self.briefings()?;
        log.push(briefing.clone());
        self.save(BRIEFINGS_KEY, &log)?;
        Ok(log.len())
    }

    /// Stored settings, or the defaults.
    pub fn settings(&self) -> Result<Settings> {
        self.load(SETTINGS_KEY, Settings::default())
    }

    /// Replaces the stored settings.
    pub fn save_settings(&mut self, settings: &Settings) -> Result<()> {
        self.save(SETTINGS_KEY, settings)
    }
}

/// Process-local store, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, as a full or unavailable disk would.
    pub fn read_only() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save_raw(&mut self, key: &str, value: &str) -> Result<()> {
        if self.reject_writes {
            return Err(BriefError::Storage {
                message: format!("write to '{key}' rejected"),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
