use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a database file
fn brief_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("brief").expect("Failed to find brief binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// One answer per prompt of the built-in questionnaire, then confirm and
/// decline a second briefing.
fn full_questionnaire_input() -> String {
    let mut lines = vec![""];
    // Project Goal, preceded by the identity prompts
    lines.extend(["Ana", "Online Store", "ana@example.com", "", "Sell crafts", "", ""]);
    // Products and Sellers
    lines.extend(["", "", ""]);
    // Features: Shopping cart and Wishlist, keep shipping, PIX
    lines.extend(["5, 6", "", "1"]);
    // Design and Style
    lines.extend(["", "", "", "", ""]);
    // Administration
    lines.extend(["", "", ""]);
    // Timeline and Budget: first budget range
    lines.extend(["", "", "1", "", "", ""]);
    lines.extend(["confirm", "n"]);

    let mut input = lines.join("\n");
    input.push('\n');
    input
}

#[test]
fn test_cli_wizard_submits_and_prints_link() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    brief_cmd(&db_path)
        .write_stdin(full_questionnaire_input())
        .assert()
        .success()
        .stdout(predicate::str::contains("## 🎯 Project Goal (1/6)"))
        .stdout(predicate::str::contains("Success: Briefing"))
        .stdout(predicate::str::contains("https://wa.me/5511999999999?text="))
        .stdout(predicate::str::contains("Shopping%20cart"))
        .stdout(predicate::str::contains("Success: remote sync disabled"));

    brief_cmd(&db_path)
        .args(["admin", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Online Store"))
        .stdout(predicate::str::contains("- **Client:** Ana"))
        .stdout(predicate::str::contains("- **Budget:** Up to R$ 5,000"))
        .stdout(predicate::str::contains("- **Features:** 2 selected"));

    brief_cmd(&db_path)
        .args(["admin", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Total briefings:** 1"))
        .stdout(predicate::str::contains("- **This month:** 1"));
}

#[test]
fn test_cli_quit_saves_nothing() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    brief_cmd(&db_path)
        .arg("wizard")
        .write_stdin("\nAna\n:quit\n")
        .assert()
        .success();

    brief_cmd(&db_path)
        .args(["admin", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No briefings found."));
}

#[test]
fn test_cli_empty_dashboard() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    brief_cmd(&db_path)
        .args(["admin", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dashboard"))
        .stdout(predicate::str::contains("- **Total briefings:** 0"))
        .stdout(predicate::str::contains("No briefings received yet."));
}

#[test]
fn test_cli_settings_update_persists() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    brief_cmd(&db_path)
        .args([
            "admin",
            "settings",
            "--developer-name",
            "Maria Dev",
            "--messaging-target",
            "5521988887777",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Updated developerName, messagingTarget",
        ));

    brief_cmd(&db_path)
        .args(["admin", "settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Developer:** Maria Dev"))
        .stdout(predicate::str::contains("- **Messaging:** 5521988887777 via wa.me"))
        .stdout(predicate::str::contains("- **Remote sync:** disabled"));
}

#[test]
fn test_cli_settings_reject_empty_target() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    brief_cmd(&db_path)
        .args(["admin", "settings", "--messaging-target", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'messagingTarget': must not be empty"));
}

#[test]
fn test_cli_show_missing_briefing() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    brief_cmd(&db_path)
        .args(["admin", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to show briefing 42"));
}

#[test]
fn test_cli_pull_without_endpoint_warns() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    brief_cmd(&db_path)
        .args(["admin", "pull"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: Could not load from remote: remote sync is not configured",
        ));
}
