use std::path::PathBuf;

use brief_core::{BriefingSession, Screen, SessionBuilder};
use tempfile::TempDir;

/// Helper function to create a temporary directory and database path
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("brief.db");
    (temp_dir, db_path)
}

/// Opens a session on the given database file
pub fn open_session(db_path: &PathBuf) -> BriefingSession {
    SessionBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .expect("Failed to create session")
}

/// Walks the wizard through every section, filling a few answers on the way
pub fn complete_questionnaire(session: &mut BriefingSession, client: &str) {
    let wizard = session.wizard_mut();
    wizard.start().expect("Failed to start");
    wizard.set_text("clientName", client).unwrap();
    wizard.set_text("projectName", "Online Store").unwrap();
    wizard.set_text("email", "client@example.com").unwrap();
    while wizard.current_section().is_some() {
        wizard.next().expect("Failed to advance");
    }
    assert_eq!(wizard.screen(), Screen::Submit);
}
