use super::*;
use crate::{
    models::AnswerValue,
    schema::{Field, Section},
};

fn two_section_schema() -> FormSchema {
    FormSchema::new(vec![
        Section::new("A", "🅰", vec![Field::single_choice("k1", "K1", &["X", "Y"])]),
        Section::new("B", "🅱", vec![Field::multi_choice("k2", "K2", &["P", "Q", "R"])]),
    ])
    .expect("valid schema")
}

fn three_section_schema() -> FormSchema {
    FormSchema::new(vec![
        Section::new("A", "a", vec![Field::text("name", "Name")]),
        Section::new("B", "b", vec![Field::text_area("about", "About")]),
        Section::new("C", "c", vec![Field::multi_choice("tags", "Tags", &["t1", "t2"])]),
    ])
    .expect("valid schema")
}

#[test]
fn test_forward_navigation_reaches_submit() {
    let mut wizard = Wizard::new(three_section_schema());
    assert_eq!(wizard.screen(), Screen::Intro);

    assert_eq!(wizard.next().unwrap(), Screen::Form { section: 0 });
    assert_eq!(wizard.progress(), Some((1, 3)));
    assert_eq!(wizard.next().unwrap(), Screen::Form { section: 1 });
    assert_eq!(wizard.next().unwrap(), Screen::Form { section: 2 });
    assert_eq!(wizard.current_section().unwrap().title, "C");
    assert_eq!(wizard.next().unwrap(), Screen::Submit);
    assert_eq!(wizard.progress(), None);
}

#[test]
fn test_back_from_first_section_returns_to_intro() {
    let mut wizard = Wizard::new(three_section_schema());
    wizard.start().unwrap();
    wizard.next().unwrap();

    assert_eq!(wizard.back().unwrap(), Screen::Form { section: 0 });
    assert_eq!(wizard.back().unwrap(), Screen::Intro);
    assert!(matches!(
        wizard.back(),
        Err(BriefError::InvalidTransition { screen: "intro", .. })
    ));
}

#[test]
fn test_revise_returns_to_last_section() {
    let mut wizard = Wizard::new(three_section_schema());
    for _ in 0..4 {
        wizard.next().unwrap();
    }
    assert_eq!(wizard.screen(), Screen::Submit);

    assert_eq!(wizard.revise().unwrap(), Screen::Form { section: 2 });
    assert!(wizard.revise().is_err());
}

#[test]
fn test_next_is_rejected_on_submit_and_success() {
    let mut wizard = Wizard::new(two_section_schema());
    for _ in 0..3 {
        wizard.next().unwrap();
    }
    assert!(wizard.next().is_err());

    wizard.complete().unwrap();
    assert_eq!(wizard.screen(), Screen::Success);
    assert!(wizard.next().is_err());
    assert!(wizard.complete().is_err(), "second completion must be rejected");
}

#[test]
fn test_edits_only_allowed_on_form_screens() {
    let mut wizard = Wizard::new(two_section_schema());
    assert!(matches!(
        wizard.set_choice("k1", "X"),
        Err(BriefError::InvalidTransition { screen: "intro", .. })
    ));

    wizard.start().unwrap();
    wizard.set_choice("k1", "X").unwrap();
    wizard.next().unwrap();
    wizard.next().unwrap();

    assert!(wizard.toggle_choice("k2", "P").is_err());
    assert_eq!(wizard.answers().text("k1"), "X", "answers stay readable on submit");
}

#[test]
fn test_set_text_accepts_identity_keys_and_empty_values() {
    let mut wizard = Wizard::new(three_section_schema());
    wizard.start().unwrap();

    wizard.set_text("clientName", "Ana").unwrap();
    wizard.set_text("name", "Shop").unwrap();
    wizard.set_text("name", "").unwrap();

    assert_eq!(wizard.answers().client_name, "Ana");
    assert_eq!(wizard.answers().text("name"), "");
}

#[test]
fn test_schema_misuse_fails_loudly() {
    let mut wizard = Wizard::new(two_section_schema());
    wizard.start().unwrap();

    assert!(matches!(
        wizard.set_text("nope", "x"),
        Err(BriefError::UnknownField { .. })
    ));
    assert!(matches!(
        wizard.set_text("k1", "X"),
        Err(BriefError::FieldTypeMismatch { expected: "text", .. })
    ));
    assert!(matches!(
        wizard.toggle_choice("k1", "X"),
        Err(BriefError::FieldTypeMismatch { expected: "multi-choice", .. })
    ));
    assert!(matches!(
        wizard.set_choice("k2", "P"),
        Err(BriefError::FieldTypeMismatch { expected: "single-choice", .. })
    ));
    assert!(matches!(
        wizard.set_choice("k1", "Z"),
        Err(BriefError::UnknownOption { .. })
    ));
}

#[test]
fn test_toggle_twice_restores_selection() {
    let mut wizard = Wizard::new(two_section_schema());
    wizard.start().unwrap();
    wizard.toggle_choice("k2", "Q").unwrap();

    for option in ["P", "Q", "R"] {
        let before = wizard.answers().selections("k2").to_vec();
        wizard.toggle_choice("k2", option).unwrap();
        wizard.toggle_choice("k2", option).unwrap();
        let mut after = wizard.answers().selections("k2").to_vec();
        let mut expected = before.clone();
        after.sort();
        expected.sort();
        assert_eq!(after, expected, "toggling {option} twice changed the set");
    }
}

#[test]
fn test_start_new_resets_answers() {
    let mut wizard = Wizard::new(two_section_schema());
    wizard.start().unwrap();
    wizard.set_choice("k1", "Y").unwrap();
    wizard.next().unwrap();
    wizard.toggle_choice("k2", "R").unwrap();
    wizard.next().unwrap();
    wizard.complete().unwrap();

    assert_eq!(wizard.answers().text("k1"), "");
    assert_eq!(
        wizard.answers().values["k2"],
        AnswerValue::Selections(Vec::new())
    );
    assert_eq!(wizard.start_new().unwrap(), Screen::Intro);
    assert!(wizard.start_new().is_err());
}
