//! The submission pipeline.

use jiff::Timestamp;
use log::{debug, info, warn};
use tokio::{runtime::Handle, task::JoinHandle};

use super::BriefingSession;
use crate::{
    dispatch::settings_link,
    display::{BriefingSummary, LocalDateTime},
    error::Result,
    models::Briefing,
    sync::{SyncClient, SyncOutcome},
};

/// Everything the host needs after a confirmed submission.
#[derive(Debug)]
pub struct Submission {
    /// The record as appended to the local log
    pub briefing: Briefing,
    /// Human-readable summary of the submitted answers
    pub summary: String,
    /// Messaging deep link carrying `summary`
    pub dispatch_url: String,
    /// Background remote save, observable but never awaited by the pipeline
    pub sync: SyncTask,
}

/// Handle to the background remote save of one briefing.
#[derive(Debug)]
pub struct SyncTask {
    state: TaskState,
}

#[derive(Debug)]
enum TaskState {
    Ready(SyncOutcome),
    Running(JoinHandle<SyncOutcome>),
}

impl SyncTask {
    fn spawn(client: &SyncClient, briefing: &Briefing) -> Self {
        if !client.is_enabled() {
            debug!("remote sync disabled, briefing {} kept local", briefing.id);
            return Self::ready(SyncOutcome::Skipped);
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("no async runtime, briefing {} not synced", briefing.id);
            return Self::ready(SyncOutcome::Failed("no async runtime".to_string()));
        };

        let client = client.clone();
        let briefing = briefing.clone();
        let handle = runtime.spawn(push(client, briefing));
        Self {
            state: TaskState::Running(handle),
        }
    }

    fn ready(outcome: SyncOutcome) -> Self {
        Self {
            state: TaskState::Ready(outcome),
        }
    }

    /// Whether the outcome is available without waiting.
    pub fn is_finished(&self) -> bool {
        match &self.state {
            TaskState::Ready(_) => true,
            TaskState::Running(handle) => handle.is_finished(),
        }
    }

    /// Waits for the remote save to settle.
    pub async fn outcome(self) -> SyncOutcome {
        match self.state {
            TaskState::Ready(outcome) => outcome,
            TaskState::Running(handle) => handle
                .await
                .unwrap_or_else(|e| SyncOutcome::Failed(format!("sync task aborted: {e}"))),
        }
    }
}

async fn push(client: SyncClient, briefing: Briefing) -> SyncOutcome {
    match client.submit(&briefing).await {
        Ok(()) => {
            info!("briefing {} saved to remote store", briefing.id);
            SyncOutcome::Delivered
        }
        Err(e) => {
            warn!("briefing {} not saved to remote store: {e}", briefing.id);
            SyncOutcome::Failed(e.to_string())
        }
    }
}

impl BriefingSession {
    /// Submits the current answers.
    ///
    /// The answers are copied into a new [`Briefing`] and appended to the
    /// local log. Only then does the wizard move to the success screen and
    /// reset its answers. The remote save runs in the background and can
    /// neither block nor fail the submission.
    ///
    /// # Errors
    ///
    /// Returns `BriefError::InvalidTransition` outside the submit screen,
    /// which also rejects a repeated confirmation. Returns the store's error
    /// if the append fails; the wizard then stays on the submit screen with
    /// its answers intact.
    pub fn confirm_submit(&mut self) -> Result<Submission> {
        self.wizard.ensure_submittable()?;

        let now = Timestamp::now();
        let id = self.next_id(now);
        let briefing = Briefing::new(
            id,
            LocalDateTime::system(now).to_string(),
            self.wizard.answers().clone(),
        );

        let length = self.store.append_briefing(&briefing)?;
        self.last_id = id;
        info!("briefing {id} saved locally ({length} in log)");

        let sync = SyncTask::spawn(&self.sync, &briefing);

        let summary =
            BriefingSummary::new(self.wizard.schema(), &briefing.data, &self.settings, now)
                .to_string();
        let dispatch_url = settings_link(&self.settings, &summary);

        self.wizard.complete()?;

        Ok(Submission {
            briefing,
            summary,
            dispatch_url,
            sync,
        })
    }

    /// Summary of the answers as they stand, for review before confirming.
    pub fn preview(&self) -> String {
        BriefingSummary::new(
            self.wizard.schema(),
            self.wizard.answers(),
            &self.settings,
            Timestamp::now(),
        )
        .to_string()
    }

    /// Millisecond timestamp, bumped past the last issued id when the clock
    /// does not advance.
    fn next_id(&self, now: Timestamp) -> u64 {
        let millis = u64::try_from(now.as_millisecond()).unwrap_or(0);
        millis.max(self.last_id + 1)
    }
}
