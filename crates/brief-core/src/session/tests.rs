//! Tests for the session module.

use super::*;
use crate::{
    error::BriefError,
    params::SettingsUpdate,
    store::MemoryStore,
    sync::{SyncError, SyncOutcome},
    wizard::Screen,
};

fn memory_session() -> BriefingSession {
    SessionBuilder::new()
        .with_store(MemoryStore::new())
        .build()
        .expect("Failed to build session")
}

fn fill_and_reach_submit(session: &mut BriefingSession) {
    let wizard = session.wizard_mut();
    wizard.start().unwrap();
    wizard.set_text("clientName", "Ana").unwrap();
    wizard.set_text("projectName", "Shop").unwrap();
    wizard.set_text("objective", "Sell handmade goods").unwrap();
    while wizard.current_section().is_some() {
        wizard.next().unwrap();
    }
    assert_eq!(wizard.screen(), Screen::Submit);
}

#[test]
fn test_confirm_outside_submit_is_rejected() {
    let mut session = memory_session();
    let err = session.confirm_submit().unwrap_err();
    assert!(matches!(err, BriefError::InvalidTransition { .. }));
    assert!(session.briefings().unwrap().is_empty());
}

#[test]
fn test_confirm_appends_snapshot_and_resets() {
    let mut session = memory_session();
    fill_and_reach_submit(&mut session);

    let submission = session.confirm_submit().expect("Failed to submit");

    assert_eq!(session.wizard().screen(), Screen::Success);
    assert_eq!(session.wizard().answers().text("objective"), "");
    assert_eq!(submission.briefing.client_name, "Ana");
    assert_eq!(submission.briefing.data.text("objective"), "Sell handmade goods");

    let log = session.briefings().unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log.0[0], submission.briefing);

    assert!(submission.summary.contains("• Name: Ana"));
    assert!(submission
        .dispatch_url
        .starts_with("https://wa.me/5511999999999?text="));
    assert!(submission.sync.is_finished());
}

#[test]
fn test_double_confirm_produces_one_briefing() {
    let mut session = memory_session();
    fill_and_reach_submit(&mut session);

    session.confirm_submit().unwrap();
    let err = session.confirm_submit().unwrap_err();

    assert!(matches!(err, BriefError::InvalidTransition { .. }));
    assert_eq!(session.briefings().unwrap().len(), 1);
}

#[test]
fn test_storage_failure_blocks_progression() {
    let mut session = SessionBuilder::new()
        .with_store(MemoryStore::read_only())
        .build()
        .unwrap();
    fill_and_reach_submit(&mut session);

    let err = session.confirm_submit().unwrap_err();

    assert!(matches!(err, BriefError::Storage { .. }));
    assert_eq!(session.wizard().screen(), Screen::Submit);
    assert_eq!(session.wizard().answers().client_name, "Ana");
}

#[test]
fn test_ids_increase_across_submissions() {
    let mut session = memory_session();
    let mut ids = Vec::new();
    for _ in 0..3 {
        fill_and_reach_submit(&mut session);
        ids.push(session.confirm_submit().unwrap().briefing.id);
        session.wizard_mut().start_new().unwrap();
    }
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn test_disabled_sync_is_skipped() {
    let mut session = memory_session();
    fill_and_reach_submit(&mut session);

    let submission = session.confirm_submit().unwrap();

    assert_eq!(submission.sync.outcome().await, SyncOutcome::Skipped);
}

#[test]
fn test_update_settings_persists_and_reconfigures_sync() {
    let mut session = memory_session();
    let update = SettingsUpdate {
        messaging_target: Some("5521988887777".to_string()),
        sync_url: Some("https://example.com/exec".to_string()),
        ..SettingsUpdate::default()
    };

    let changed = session.update_settings(&update).unwrap();

    assert_eq!(changed, vec!["messagingTarget", "syncUrl"]);
    assert_eq!(session.settings().messaging_target, "5521988887777");
    assert!(session.sync_client().is_enabled());
    assert_eq!(session.store.settings().unwrap(), *session.settings());
}

#[test]
fn test_update_settings_rejects_empty_target() {
    let mut session = memory_session();
    let update = SettingsUpdate {
        messaging_target: Some("  ".to_string()),
        ..SettingsUpdate::default()
    };

    let err = session.update_settings(&update).unwrap_err();

    assert!(matches!(err, BriefError::InvalidInput { ref field, .. } if field == "messagingTarget"));
    assert_eq!(session.settings().messaging_target, "5511999999999");
}

#[test]
fn test_update_settings_rejects_unparsable_sync_url() {
    let mut session = memory_session();
    let update = SettingsUpdate {
        sync_url: Some("not a url".to_string()),
        ..SettingsUpdate::default()
    };

    let err = session.update_settings(&update).unwrap_err();

    assert!(matches!(err, BriefError::Configuration { .. }));
    assert!(!session.sync_client().is_enabled());
}

#[test]
fn test_resend_link_and_missing_briefing() {
    let mut session = memory_session();
    fill_and_reach_submit(&mut session);
    let id = session.confirm_submit().unwrap().briefing.id;

    let link = session.resend_link(id).unwrap();
    assert!(link.contains("Sell%20handmade%20goods"));

    assert!(matches!(
        session.briefing(id + 1),
        Err(BriefError::BriefingNotFound { .. })
    ));
}

#[test]
fn test_dashboard_counts_current_month() {
    let mut session = memory_session();
    for _ in 0..2 {
        fill_and_reach_submit(&mut session);
        session.confirm_submit().unwrap();
        session.wizard_mut().start_new().unwrap();
    }

    let dashboard = session.dashboard().unwrap();

    assert_eq!(dashboard.total, 2);
    assert_eq!(dashboard.this_month, 2);
    assert!(dashboard.recent[0].id > dashboard.recent[1].id);
}

#[tokio::test]
async fn test_pull_requires_endpoint() {
    let session = memory_session();
    assert!(matches!(
        session.pull_remote().await,
        Err(SyncError::Disabled)
    ));
}
