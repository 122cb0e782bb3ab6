//! Messaging deep link carrying the summary text.

use crate::models::Settings;

/// Builds `https://<host>/<recipient>?text=<percent-encoded text>`.
///
/// A scheme or trailing slash on the configured host is tolerated.
///
/// ```rust
/// use brief_core::dispatch::message_link;
///
/// let url = message_link("wa.me", "5511999999999", "Hi there & bye");
/// assert_eq!(url, "https://wa.me/5511999999999?text=Hi%20there%20%26%20bye");
/// ```
pub fn message_link(host: &str, recipient: &str, text: &str) -> String {
    let host = host
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    format!(
        "https://{host}/{}?text={}",
        urlencoding::encode(recipient.trim()),
        urlencoding::encode(text)
    )
}

/// Builds the link for the configured host and recipient.
pub fn settings_link(settings: &Settings, text: &str) -> String {
    message_link(&settings.messaging_host, &settings.messaging_target, text)
}
