//! Finalized submissions.

use serde::{Deserialize, Serialize};

use super::AnswerRecord;

/// An immutable, finalized submission.
///
/// Identity fields are duplicated out of `data` for list views. The
/// `submitted_at` stamp is a preformatted local time string because records
/// pulled from the remote store carry whatever format the sheet holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Briefing {
    /// Unique, time-derived identifier (milliseconds since the epoch, bumped
    /// to stay strictly increasing within a session)
    pub id: u64,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Submission time formatted as `YYYY-MM-DD HH:MM:SS TZ`
    #[serde(default)]
    pub submitted_at: String,
    /// Snapshot of the answers at submission time
    #[serde(default)]
    pub data: AnswerRecord,
}

impl Briefing {
    /// Builds a briefing from an owned snapshot of the answers.
    pub fn new(id: u64, submitted_at: String, data: AnswerRecord) -> Self {
        Self {
            id,
            client_name: data.client_name.clone(),
            project_name: data.project_name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            submitted_at,
            data,
        }
    }

    /// Project name for headers, preferring the snapshot.
    pub fn display_name(&self) -> &str {
        [self.data.project_name.as_str(), self.project_name.as_str()]
            .into_iter()
            .find(|name| !name.is_empty())
            .unwrap_or("Untitled project")
    }

    /// `YYYY-MM` prefix of the submission stamp, when it has one.
    pub fn submitted_month(&self) -> Option<&str> {
        let month = self.submitted_at.get(..7)?;
        let bytes = month.as_bytes();
        let well_formed = bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        well_formed.then_some(month)
    }
}
