//! Application settings shared by the wizard and the admin surface.

use serde::{Deserialize, Serialize};

/// The single configuration record.
///
/// Persisted as one blob; every field falls back to its default so older or
/// partial blobs still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Name printed in the summary's closing attribution line
    pub developer_name: String,
    pub title: String,
    pub description: String,
    pub subtitle: String,
    /// Estimated time to fill the questionnaire, shown on the intro screen
    pub time_estimate: String,
    /// Recipient identifier of the messaging deep link
    pub messaging_target: String,
    /// Host of the messaging deep link
    pub messaging_host: String,
    /// Remote store endpoint; empty disables sync
    pub sync_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            developer_name: "Web Developer".to_string(),
            title: "Professional Briefing".to_string(),
            description: "Hi! This briefing helps us understand your project so we build exactly what you need.".to_string(),
            subtitle: "Just a few questions that will help us craft the right solution for your business.".to_string(),
            time_estimate: "5-10 minutes".to_string(),
            messaging_target: "5511999999999".to_string(),
            messaging_host: "wa.me".to_string(),
            sync_url: String::new(),
        }
    }
}

impl Settings {
    /// Whether remote sync is configured.
    pub fn sync_enabled(&self) -> bool {
        !self.sync_url.trim().is_empty()
    }
}
