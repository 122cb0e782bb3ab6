//! Administrative operations: log views, resending, settings and remote
//! pulls.

use jiff::{tz::TimeZone, Timestamp};
use log::info;
use reqwest::Url;

use super::BriefingSession;
use crate::{
    dispatch::settings_link,
    display::{Briefings, BriefingSummary, Dashboard},
    error::{BriefError, Result},
    models::{Briefing, Settings},
    params::SettingsUpdate,
    sync::SyncError,
};

/// How many briefings the dashboard lists.
pub const RECENT_BRIEFINGS: usize = 5;

impl BriefingSession {
    /// The whole local log in submission order.
    pub fn briefings(&self) -> Result<Briefings> {
        Ok(Briefings(self.store.briefings()?))
    }

    /// Totals for the log plus the [`RECENT_BRIEFINGS`] newest entries.
    pub fn dashboard(&self) -> Result<Dashboard> {
        let month = Timestamp::now()
            .to_zoned(TimeZone::system())
            .strftime("%Y-%m")
            .to_string();
        Ok(Dashboard::from_log(
            &self.store.briefings()?,
            &month,
            RECENT_BRIEFINGS,
        ))
    }

    /// Looks up one briefing of the local log.
    ///
    /// # Errors
    ///
    /// Returns `BriefError::BriefingNotFound` if no record has this id.
    pub fn briefing(&self, id: u64) -> Result<Briefing> {
        self.store
            .briefings()?
            .into_iter()
            .find(|b| b.id == id)
            .ok_or(BriefError::BriefingNotFound { id })
    }

    /// Regenerates the summary of a stored briefing with the current
    /// settings.
    pub fn summary_for(&self, briefing: &Briefing) -> String {
        BriefingSummary::new(
            self.wizard.schema(),
            &briefing.data,
            &self.settings,
            Timestamp::now(),
        )
        .to_string()
    }

    /// Messaging link to resend a stored briefing.
    pub fn resend_link(&self, id: u64) -> Result<String> {
        let briefing = self.briefing(id)?;
        Ok(settings_link(&self.settings, &self.summary_for(&briefing)))
    }

    /// Applies a partial settings edit.
    ///
    /// The new settings are persisted before they take effect; the sync
    /// client follows a changed endpoint immediately. Returns the names of
    /// the fields that changed.
    ///
    /// # Errors
    ///
    /// Returns `BriefError::InvalidInput` if the edit would leave the
    /// messaging target or host empty, `BriefError::Configuration` for a sync
    /// URL that does not parse, or the store's error if the write fails. The
    /// active settings are unchanged on any error.
    pub fn update_settings(&mut self, update: &SettingsUpdate) -> Result<Vec<&'static str>> {
        let mut settings = self.settings.clone();
        let changed = update.apply(&mut settings);
        if changed.is_empty() {
            return Ok(changed);
        }

        validate(&settings)?;
        self.store.save_settings(&settings)?;
        self.sync.configure(&settings.sync_url);
        self.settings = settings;
        info!("settings updated: {}", changed.join(", "));
        Ok(changed)
    }

    /// Fetches the remote store's briefings for display.
    ///
    /// The local log is left untouched.
    pub async fn pull_remote(&self) -> std::result::Result<Vec<Briefing>, SyncError> {
        let records = self.sync.fetch().await?;
        info!("pulled {} briefings from remote store", records.len());
        Ok(records)
    }
}

fn validate(settings: &Settings) -> Result<()> {
    let required = [
        ("messagingTarget", &settings.messaging_target),
        ("messagingHost", &settings.messaging_host),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(BriefError::InvalidInput {
            field: (*field).to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    if settings.sync_enabled() {
        Url::parse(&settings.sync_url).map_err(|e| BriefError::Configuration {
            message: format!("invalid sync URL '{}': {e}", settings.sync_url),
        })?;
    }
    Ok(())
}
