//! Parameter structures for session operations.
//!
//! Interface layers wrap these with their own derives (clap on the CLI) and
//! convert with `.into()`, keeping the core free of framework attributes.

use serde::{Deserialize, Serialize};

use crate::models::Settings;

/// Partial settings edit; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub developer_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub subtitle: Option<String>,
    pub time_estimate: Option<String>,
    pub messaging_target: Option<String>,
    pub messaging_host: Option<String>,
    /// Empty string disables remote sync
    pub sync_url: Option<String>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_none())
    }

    /// Writes the provided fields into `settings` and returns the names of
    /// those whose value actually changed.
    pub fn apply(&self, settings: &mut Settings) -> Vec<&'static str> {
        let targets: [&mut String; 8] = [
            &mut settings.developer_name,
            &mut settings.title,
            &mut settings.description,
            &mut settings.subtitle,
            &mut settings.time_estimate,
            &mut settings.messaging_target,
            &mut settings.messaging_host,
            &mut settings.sync_url,
        ];

        let mut changed = Vec::new();
        for ((name, value), target) in self.fields().into_iter().zip(targets) {
            if let Some(value) = value {
                let value = value.trim();
                if target.as_str() != value {
                    *target = value.to_string();
                    changed.push(name);
                }
            }
        }
        changed
    }

    fn fields(&self) -> [(&'static str, Option<&String>); 8] {
        [
            ("developerName", self.developer_name.as_ref()),
            ("title", self.title.as_ref()),
            ("description", self.description.as_ref()),
            ("subtitle", self.subtitle.as_ref()),
            ("timeEstimate", self.time_estimate.as_ref()),
            ("messagingTarget", self.messaging_target.as_ref()),
            ("messagingHost", self.messaging_host.as_ref()),
            ("syncUrl", self.sync_url.as_ref()),
        ]
    }
}
