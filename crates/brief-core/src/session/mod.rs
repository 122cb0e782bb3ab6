//! The briefing session: wizard, persistence, sync and summary wired
//! together.
//!
//! ```text
//! ┌──────────────┐  confirm   ┌────────────────┐   append   ┌─────────┐
//! │    Wizard    │──────────▶│   Submission   │──────────▶│  Store  │
//! │ (navigation, │            │    pipeline    │            └─────────┘
//! │   edits)     │            │                │   spawn    ┌─────────┐
//! └──────────────┘            │                │ ─ ─ ─ ─ ─▶│  Sync   │
//!                             └────────────────┘            └─────────┘
//!                                    │ summary + link
//!                                    ▼
//!                               Submission
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`BriefingSession`] with storage selection
//! - [`submit`]: The submission pipeline and the sync task handle
//! - [`admin`]: Read-only views, settings edits and remote pulls
//!
//! # Example
//!
//! ```rust
//! use brief_core::{SessionBuilder, store::MemoryStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new().with_store(MemoryStore::new()).build()?;
//!
//! let wizard = session.wizard_mut();
//! wizard.start()?;
//! wizard.set_text("clientName", "Ana")?;
//! while wizard.current_section().is_some() {
//!     wizard.next()?;
//! }
//!
//! let submission = session.confirm_submit()?;
//! assert!(submission.dispatch_url.starts_with("https://wa.me/"));
//! assert_eq!(session.briefings()?.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod builder;
pub mod submit;

#[cfg(test)]
mod tests;

pub use builder::SessionBuilder;
pub use submit::{Submission, SyncTask};

use crate::{models::Settings, store::Store, sync::SyncClient, wizard::Wizard};

/// One interactive user session.
///
/// There is exactly one writer: every mutation goes through `&mut self`.
pub struct BriefingSession {
    pub(crate) wizard: Wizard,
    pub(crate) store: Store,
    pub(crate) settings: Settings,
    pub(crate) sync: SyncClient,
    pub(crate) last_id: u64,
}

impl BriefingSession {
    pub(crate) fn new(wizard: Wizard, store: Store, settings: Settings, last_id: u64) -> Self {
        let sync = SyncClient::new(&settings.sync_url);
        Self {
            wizard,
            store,
            settings,
            sync,
            last_id,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    /// Navigation and edits. Completing a submission is only possible
    /// through [`BriefingSession::confirm_submit`].
    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sync_client(&self) -> &SyncClient {
        &self.sync
    }
}
