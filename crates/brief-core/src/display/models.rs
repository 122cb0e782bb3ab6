//! Display implementations for briefings and settings in admin views.

use std::fmt;

use super::summary::NOT_INFORMED;
use crate::models::{Briefing, Settings};

fn or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        NOT_INFORMED
    } else {
        value
    }
}

impl fmt::Display for Briefing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.display_name())?;
        writeln!(f)?;
        writeln!(f, "- **Client:** {}", or_placeholder(&self.client_name))?;
        writeln!(f, "- **E-mail:** {}", or_placeholder(&self.email))?;
        writeln!(f, "- **Phone:** {}", or_placeholder(&self.phone))?;
        writeln!(f, "- **Submitted:** {}", or_placeholder(&self.submitted_at))?;
        writeln!(
            f,
            "- **Budget:** {}",
            or_placeholder(self.data.text("budgetRange"))
        )?;
        writeln!(
            f,
            "- **Urgency:** {}",
            or_placeholder(self.data.text("urgency"))
        )?;
        writeln!(
            f,
            "- **Features:** {} selected",
            self.data.selections("features").len()
        )?;
        writeln!(f)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Settings")?;
        writeln!(f)?;
        writeln!(f, "- **Developer:** {}", or_placeholder(&self.developer_name))?;
        writeln!(f, "- **Title:** {}", or_placeholder(&self.title))?;
        writeln!(f, "- **Subtitle:** {}", or_placeholder(&self.subtitle))?;
        writeln!(f, "- **Description:** {}", or_placeholder(&self.description))?;
        writeln!(f, "- **Time estimate:** {}", or_placeholder(&self.time_estimate))?;
        writeln!(
            f,
            "- **Messaging:** {} via {}",
            self.messaging_target, self.messaging_host
        )?;
        if self.sync_enabled() {
            writeln!(f, "- **Remote sync:** {}", self.sync_url.trim())
        } else {
            writeln!(f, "- **Remote sync:** disabled")
        }
    }
}
