//! Remote sync client for the spreadsheet-backed store.
//!
//! The endpoint is a single URL. Records are pushed with a JSON `POST`
//! (`{"action": "saveBriefing", "data": <briefing>}`) and pulled with
//! `GET ?action=getBriefings`, which answers either a bare JSON array of
//! briefings or an envelope `{"success": bool, "data": [...], "error": "..."}`.
//!
//! Every call is best-effort. Callers decide what a failure means; the
//! submission pipeline only logs it.

use std::{fmt, time::Duration};

use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};

use crate::models::Briefing;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const SAVE_ACTION: &str = "saveBriefing";
const LIST_ACTION: &str = "getBriefings";

/// Why a sync call did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("remote sync is not configured")]
    Disabled,

    #[error("invalid sync endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote store answered HTTP {status}")]
    Status { status: StatusCode },

    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("remote store rejected the request: {reason}")]
    Rejected { reason: String },
}

/// Outcome of a fire-and-forget sync attempt, for UI feedback only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Sync is disabled; nothing was sent
    Skipped,
    Delivered,
    Failed(String),
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOutcome::Skipped => write!(f, "remote sync disabled"),
            SyncOutcome::Delivered => write!(f, "saved to the remote store"),
            SyncOutcome::Failed(reason) => write!(f, "remote sync failed: {reason}"),
        }
    }
}

#[derive(Serialize)]
struct SaveRequest<'a> {
    action: &'static str,
    data: &'a Briefing,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListResponse {
    Records(Vec<Briefing>),
    Envelope(Envelope<Vec<Briefing>>),
}

#[derive(Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

impl<T> Envelope<T> {
    fn rejection(&self) -> Option<SyncError> {
        (!self.success).then(|| SyncError::Rejected {
            reason: self
                .error
                .clone()
                .unwrap_or_else(|| "no reason given".to_string()),
        })
    }
}

/// HTTP client bound to one configurable endpoint.
#[derive(Debug, Clone)]
pub struct SyncClient {
    http: Client,
    endpoint: String,
}

impl SyncClient {
    /// Creates a client for `endpoint`; an empty string disables sync.
    pub fn new(endpoint: &str) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            endpoint: endpoint.trim().to_string(),
        }
    }

    /// Replaces the active endpoint; an empty string disables sync.
    pub fn configure(&mut self, endpoint: &str) {
        self.endpoint = endpoint.trim().to_string();
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn is_enabled(&self) -> bool {
        !self.endpoint.is_empty()
    }

    /// Pushes one briefing to the remote store.
    ///
    /// Non-2xx statuses and `{"success": false}` envelopes are failures. A
    /// 2xx response whose body is not an envelope counts as delivered.
    pub async fn submit(&self, briefing: &Briefing) -> Result<(), SyncError> {
        let url = self.url()?;
        let response = self
            .http
            .post(url)
            .json(&SaveRequest {
                action: SAVE_ACTION,
                data: briefing,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status { status });
        }

        let body = response.text().await?;
        match serde_json::from_str::<Envelope<serde_json::Value>>(&body) {
            Ok(envelope) => envelope.rejection().map_or(Ok(()), Err),
            Err(_) => Ok(()),
        }
    }

    /// Pulls every briefing the remote store holds, in its order.
    ///
    /// Any transport, status or decoding problem fails the whole call; there
    /// are no partial results.
    pub async fn fetch(&self) -> Result<Vec<Briefing>, SyncError> {
        let mut url = self.url()?;
        url.query_pairs_mut().append_pair("action", LIST_ACTION);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Status { status });
        }

        let body = response.text().await?;
        match serde_json::from_str::<ListResponse>(&body)? {
            ListResponse::Records(records) => Ok(records),
            ListResponse::Envelope(envelope) => match envelope.rejection() {
                Some(err) => Err(err),
                None => Ok(envelope.data.unwrap_or_default()),
            },
        }
    }

    fn url(&self) -> Result<Url, SyncError> {
        if self.endpoint.is_empty() {
            return Err(SyncError::Disabled);
        }
        Url::parse(&self.endpoint).map_err(|e| SyncError::InvalidEndpoint {
            url: self.endpoint.clone(),
            reason: e.to_string(),
        })
    }
}
