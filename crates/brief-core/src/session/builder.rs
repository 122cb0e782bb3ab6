//! Builder for creating and configuring BriefingSession instances.

use std::path::{Path, PathBuf};

use super::BriefingSession;
use crate::{
    db::Database,
    error::{BriefError, Result},
    schema::FormSchema,
    store::{KeyValueStore, Store},
    wizard::Wizard,
};

/// Where the session keeps its records.
enum Storage {
    Default,
    Path(PathBuf),
    Custom(Box<dyn KeyValueStore>),
}

/// Builder for creating and configuring BriefingSession instances.
pub struct SessionBuilder {
    storage: Storage,
    schema: Option<FormSchema>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            storage: Storage::Default,
            schema: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/brief/brief.db` or `~/.local/share/brief/brief.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.storage = Storage::Path(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given store instead of a database file.
    pub fn with_store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.storage = Storage::Custom(Box::new(store));
        self
    }

    /// Replaces the built-in questionnaire.
    pub fn with_schema(mut self, schema: FormSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Builds the session, loading settings and the briefing log.
    ///
    /// # Errors
    ///
    /// Returns `BriefError::FileSystem` if the database directory cannot be
    /// created, `BriefError::Database` if it cannot be opened, and
    /// `BriefError::Serialization` if a stored record is unreadable.
    pub fn build(self) -> Result<BriefingSession> {
        let store = match self.storage {
            Storage::Custom(inner) => Store::from_boxed(inner),
            Storage::Path(path) => Store::new(open_database(&path)?),
            Storage::Default => Store::new(open_database(&default_database_path()?)?),
        };

        let settings = store.settings()?;
        let last_id = store.briefings()?.iter().map(|b| b.id).max().unwrap_or(0);
        let wizard = Wizard::new(self.schema.unwrap_or_default());

        Ok(BriefingSession::new(wizard, store, settings, last_id))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn open_database(path: &Path) -> Result<Database> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BriefError::FileSystem {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Database::new(path)
}

/// Returns the default database path following XDG Base Directory
/// specification.
fn default_database_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("brief")
        .place_data_file("brief.db")
        .map_err(|e| BriefError::XdgDirectory(e.to_string()))
}
