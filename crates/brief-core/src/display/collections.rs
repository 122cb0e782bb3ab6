//! Collection wrapper types for the admin views.

use std::fmt;

use crate::models::Briefing;

/// Newtype wrapper for displaying a list of briefings.
///
/// ```rust
/// use brief_core::display::Briefings;
///
/// assert_eq!(Briefings(vec![]).to_string(), "No briefings found.\n");
/// ```
pub struct Briefings(pub Vec<Briefing>);

impl Briefings {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Briefing> {
        self.0.iter()
    }
}

impl IntoIterator for Briefings {
    type Item = Briefing;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Briefings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No briefings found.")
        } else {
            for briefing in &self.0 {
                write!(f, "{briefing}")?;
            }
            Ok(())
        }
    }
}

/// Aggregate figures and the most recent briefings.
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Every briefing in the local log
    pub total: usize,
    /// Briefings stamped in the current calendar month
    pub this_month: usize,
    /// Most recent briefings, newest first
    pub recent: Vec<Briefing>,
}

impl Dashboard {
    /// Builds the dashboard from the log in submission order.
    ///
    /// `month` is the current `YYYY-MM`; the recent list is sliced from the
    /// end of the log at read time.
    pub fn from_log(log: &[Briefing], month: &str, recent: usize) -> Self {
        let this_month = log
            .iter()
            .filter(|b| b.submitted_month() == Some(month))
            .count();
        let start = log.len().saturating_sub(recent);
        Self {
            total: log.len(),
            this_month,
            recent: log[start..].iter().rev().cloned().collect(),
        }
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Dashboard")?;
        writeln!(f)?;
        writeln!(f, "- **Total briefings:** {}", self.total)?;
        writeln!(f, "- **This month:** {}", self.this_month)?;
        writeln!(f)?;
        writeln!(f, "## Recent Briefings")?;
        writeln!(f)?;
        if self.recent.is_empty() {
            writeln!(f, "No briefings received yet.")
        } else {
            self.recent.iter().try_for_each(|b| write!(f, "{b}"))
        }
    }
}
