//! Data models for answers, briefings and settings.
//!
//! Display implementations for these models live in [`crate::display`] to
//! keep presentation separate from the data structures.
//!
//! # Serialization
//!
//! All models serialize to camelCase JSON. An [`AnswerRecord`] flattens into
//! a single object holding the identity keys next to every schema field key:
//!
//! ```rust
//! use brief_core::models::AnswerRecord;
//! use brief_core::schema::FormSchema;
//!
//! let record = AnswerRecord::for_schema(&FormSchema::briefing());
//! let json = serde_json::to_value(&record).unwrap();
//! assert_eq!(json["clientName"], "");
//! assert_eq!(json["features"], serde_json::json!([]));
//! ```

pub mod answers;
pub mod briefing;
pub mod settings;


pub use answers::{AnswerRecord, AnswerValue, IdentityField};
pub use briefing::Briefing;
pub use settings::Settings;
