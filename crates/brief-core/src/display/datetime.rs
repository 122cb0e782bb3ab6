//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM:SS TZ` in a chosen time zone.
///
/// Submission stamps and the summary's date line both go through this type,
/// which keeps their format in step and lets the dashboard recover the month
/// from the first seven characters.
pub struct LocalDateTime {
    at: Timestamp,
    zone: TimeZone,
}

impl LocalDateTime {
    /// Formats in the system time zone.
    pub fn system(at: Timestamp) -> Self {
        Self {
            at,
            zone: TimeZone::system(),
        }
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.at
                .to_zoned(self.zone.clone())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
