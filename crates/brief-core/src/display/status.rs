//! Non-blocking notices for the user.

use std::fmt;

use crate::sync::SyncOutcome;

/// A one-line notice reporting success or failure of a side operation.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl From<&SyncOutcome> for OperationStatus {
    fn from(outcome: &SyncOutcome) -> Self {
        match outcome {
            SyncOutcome::Failed(_) => Self::failure(outcome.to_string()),
            SyncOutcome::Skipped | SyncOutcome::Delivered => Self::success(outcome.to_string()),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Warning:" },
            self.message
        )
    }
}
