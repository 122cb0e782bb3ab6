mod common;

use brief_core::{
    AnswerValue, BriefError, BriefingSummary, Field, FormSchema, Screen, Section, SessionBuilder,
    Settings, SettingsUpdate,
};
use common::{complete_questionnaire, create_test_environment, open_session};
use jiff::Timestamp;

fn two_section_schema() -> FormSchema {
    FormSchema::new(vec![
        Section::new("A", "🅰️", vec![Field::single_choice("k1", "K1", &["X", "Y"])]),
        Section::new("B", "🅱️", vec![Field::multi_choice("k2", "K2", &["P", "Q", "R"])]),
    ])
    .expect("Failed to build schema")
}

#[test]
fn test_two_section_scenario() {
    let (_temp_dir, db_path) = create_test_environment();
    let mut session = SessionBuilder::new()
        .with_database_path(Some(&db_path))
        .with_schema(two_section_schema())
        .build()
        .expect("Failed to create session");

    let wizard = session.wizard_mut();
    assert_eq!(wizard.screen(), Screen::Intro);
    assert_eq!(wizard.next().unwrap(), Screen::Form { section: 0 });
    wizard.set_choice("k1", "Y").unwrap();
    assert_eq!(wizard.next().unwrap(), Screen::Form { section: 1 });
    wizard.toggle_choice("k2", "P").unwrap();
    wizard.toggle_choice("k2", "R").unwrap();
    assert_eq!(wizard.next().unwrap(), Screen::Submit);

    session.confirm_submit().expect("Failed to submit");
    assert_eq!(session.wizard().screen(), Screen::Success);

    let log = session.briefings().unwrap();
    assert_eq!(log.len(), 1);
    let stored = &log.0[0].data;
    assert_eq!(stored.text("k1"), "Y");
    assert_eq!(stored.selections("k2"), ["P".to_string(), "R".to_string()]);

    let answers = session.wizard().answers();
    assert_eq!(answers.values.get("k1"), Some(&AnswerValue::Text(String::new())));
    assert_eq!(answers.values.get("k2"), Some(&AnswerValue::Selections(vec![])));
}

#[test]
fn test_log_survives_reopen() {
    let (_temp_dir, db_path) = create_test_environment();

    let first_id = {
        let mut session = open_session(&db_path);
        complete_questionnaire(&mut session, "Ana");
        session.confirm_submit().unwrap().briefing.id
    };

    let mut session = open_session(&db_path);
    assert_eq!(session.briefings().unwrap().len(), 1);

    complete_questionnaire(&mut session, "Bruno");
    let second = session.confirm_submit().unwrap().briefing;

    assert!(second.id > first_id);
    let names: Vec<String> = session
        .briefings()
        .unwrap()
        .iter()
        .map(|b| b.client_name.clone())
        .collect();
    assert_eq!(names, vec!["Ana", "Bruno"]);
}

#[test]
fn test_stored_briefing_is_not_aliased_to_live_answers() {
    let (_temp_dir, db_path) = create_test_environment();
    let mut session = open_session(&db_path);
    complete_questionnaire(&mut session, "Ana");
    session.confirm_submit().unwrap();

    session.wizard_mut().start_new().unwrap();
    session.wizard_mut().start().unwrap();
    session.wizard_mut().set_text("clientName", "Changed").unwrap();

    let stored = session.briefings().unwrap().0.remove(0);
    assert_eq!(stored.client_name, "Ana");
    assert_eq!(stored.data.client_name, "Ana");
}

#[test]
fn test_summary_is_deterministic_apart_from_date() {
    let (_temp_dir, db_path) = create_test_environment();
    let mut session = open_session(&db_path);
    complete_questionnaire(&mut session, "Ana");
    let briefing = session.confirm_submit().unwrap().briefing;

    let schema = FormSchema::default();
    let settings = Settings::default();
    let render = |at: Timestamp| {
        BriefingSummary::new(&schema, &briefing.data, &settings, at)
            .to_string()
            .lines()
            .filter(|line| !line.starts_with("• Date:"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let early = render(Timestamp::from_second(1_700_000_000).unwrap());
    let late = render(Timestamp::from_second(1_800_000_000).unwrap());
    assert_eq!(early, late);
}

#[test]
fn test_summary_sections_follow_schema_order() {
    let (_temp_dir, db_path) = create_test_environment();
    let mut session = open_session(&db_path);
    complete_questionnaire(&mut session, "Ana");
    let summary = session.confirm_submit().unwrap().summary;

    let positions: Vec<usize> = FormSchema::default()
        .sections()
        .iter()
        .map(|s| {
            summary
                .find(&s.title.to_uppercase())
                .unwrap_or_else(|| panic!("missing section {}", s.title))
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(summary.find("• Name: Ana").unwrap() < positions[0]);
}

#[test]
fn test_settings_survive_reopen() {
    let (_temp_dir, db_path) = create_test_environment();
    {
        let mut session = open_session(&db_path);
        session
            .update_settings(&SettingsUpdate {
                developer_name: Some("Maria Dev".to_string()),
                ..SettingsUpdate::default()
            })
            .unwrap();
    }

    let mut session = open_session(&db_path);
    assert_eq!(session.settings().developer_name, "Maria Dev");

    complete_questionnaire(&mut session, "Ana");
    let summary = session.confirm_submit().unwrap().summary;
    assert!(summary.contains("💼 Maria Dev - Web Development"));
}

#[test]
fn test_unknown_briefing_id() {
    let (_temp_dir, db_path) = create_test_environment();
    let session = open_session(&db_path);
    assert!(matches!(
        session.resend_link(42),
        Err(BriefError::BriefingNotFound { id: 42 })
    ));
}
