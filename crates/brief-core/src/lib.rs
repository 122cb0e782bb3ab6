//! Core library for the Brief client briefing wizard.
//!
//! This crate provides the schema-driven form engine, the wizard state
//! machine, and the submission pipeline that turns a finished questionnaire
//! into a persisted briefing, a best-effort remote save, a plain-text summary
//! and a messaging deep link.
//!
//! # Architecture
//!
//! - **Schema** ([`schema`]): Ordered sections of typed fields
//! - **Wizard** ([`wizard`]): Screen transitions and answer edits
//! - **Session** ([`session`]): Submission pipeline and admin queries
//! - **Storage** ([`store`], [`db`]): Key-value persistence, SQLite backed
//! - **Sync** ([`sync`]): HTTP client for the remote spreadsheet store
//! - **Display** ([`display`]): Summary text and markdown admin views
//!
//! # Quick Start
//!
//! ```rust
//! use brief_core::SessionBuilder;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::tempdir()?;
//! # let path = dir.path().join("brief.db");
//! let mut session = SessionBuilder::new()
//!     .with_database_path(Some(&path))
//!     .build()?;
//!
//! session.wizard_mut().start()?;
//! session.wizard_mut().set_text("projectName", "Shop")?;
//! session.wizard_mut().toggle_choice("features", "Shopping cart")?;
//!
//! let (section, total) = session.wizard().progress().unwrap_or_default();
//! println!("Section {section} of {total}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod dispatch;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod schema;
pub mod session;
pub mod store;
pub mod sync;
pub mod wizard;

// Re-export commonly used types
pub use db::Database;
pub use display::{Briefings, BriefingSummary, Dashboard, LocalDateTime, OperationStatus};
pub use error::{BriefError, Result};
pub use models::{AnswerRecord, AnswerValue, Briefing, IdentityField, Settings};
pub use params::SettingsUpdate;
pub use schema::{Field, FieldKind, FormSchema, Section};
pub use session::{BriefingSession, SessionBuilder, Submission, SyncTask};
pub use store::{KeyValueStore, MemoryStore, Store};
pub use sync::{SyncClient, SyncError, SyncOutcome};
pub use wizard::{Screen, Wizard};
