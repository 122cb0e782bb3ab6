//! Display formatting for summaries, admin views and notices.
//!
//! Domain models implement [`std::fmt::Display`] here rather than next to
//! their definitions, and wrapper types format collections and aggregate
//! views. The summary is plain text meant for a chat message; the admin
//! views are markdown for the terminal renderer.
//!
//! ## Module Organization
//!
//! - [`summary`]: The briefing summary ([`BriefingSummary`])
//! - [`collections`]: Briefing lists and the dashboard
//! - [`models`]: Display for a single [`crate::models::Briefing`]
//! - [`status`]: One-line notices ([`OperationStatus`])
//! - [`datetime`]: Timestamp formatting ([`LocalDateTime`])

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;
pub mod summary;

pub use collections::{Briefings, Dashboard};
pub use datetime::LocalDateTime;
pub use status::OperationStatus;
pub use summary::{BriefingSummary, NOT_INFORMED};
