//! Wizard state machine: screen navigation and answer edits.
//!
//! ```text
//!            start/next            next (last section)
//!   Intro ──────────────▶ Form[i] ─────────────────────▶ Submit
//!     ▲   ◀────────────── │  ▲ │  ◀───────────────────── │
//!     │   back (i == 0)   │  │ │  revise                 │ confirm
//!     │                   └──┘ next/back (0 < i < N-1)  ▼
//!     └──────────────────────────────────────────────  Success
//!                            start new (resets answers)
//! ```
//!
//! The `Submit → Success` edge is owned by the submission pipeline
//! ([`crate::session::BriefingSession::confirm_submit`]), which persists the
//! briefing before calling [`Wizard::complete`].

use std::fmt;

use log::debug;

use crate::{
    error::{BriefError, Result},
    models::{AnswerRecord, IdentityField},
    schema::{FieldKind, FormSchema, Section},
};

#[cfg(test)]
mod tests;

/// Current screen of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    /// Filling the section at `section` (zero based)
    Form { section: usize },
    /// Reviewing answers before confirmation
    Submit,
    Success,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Intro => "intro",
            Screen::Form { .. } => "form",
            Screen::Submit => "submit",
            Screen::Success => "success",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Form { section } => write!(f, "form[{section}]"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Owns the current screen and the in-progress answers.
#[derive(Debug, Clone)]
pub struct Wizard {
    schema: FormSchema,
    screen: Screen,
    answers: AnswerRecord,
}

impl Wizard {
    /// Creates a wizard on the intro screen with default answers.
    pub fn new(schema: FormSchema) -> Self {
        let answers = AnswerRecord::for_schema(&schema);
        Self {
            schema,
            screen: Screen::Intro,
            answers,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Live answers. Readable on every screen.
    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    /// Section being filled, when on a form screen.
    pub fn current_section(&self) -> Option<&Section> {
        match self.screen {
            Screen::Form { section } => self.schema.section(section),
            _ => None,
        }
    }

    /// One-based position and total number of sections, when on a form
    /// screen.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.screen {
            Screen::Form { section } => Some((section + 1, self.schema.len())),
            _ => None,
        }
    }

    /// `Intro → Form[0]`.
    pub fn start(&mut self) -> Result<Screen> {
        match self.screen {
            Screen::Intro => self.go(Screen::Form { section: 0 }),
            other => Err(invalid("start", other)),
        }
    }

    /// Advances one step: starts from the intro, moves to the next section,
    /// or to the review screen after the last section.
    pub fn next(&mut self) -> Result<Screen> {
        match self.screen {
            Screen::Intro => self.start(),
            Screen::Form { section } if section + 1 < self.schema.len() => {
                self.go(Screen::Form {
                    section: section + 1,
                })
            }
            Screen::Form { .. } => self.go(Screen::Submit),
            other => Err(invalid("advance", other)),
        }
    }

    /// Goes back one section, or to the intro from the first section.
    pub fn back(&mut self) -> Result<Screen> {
        match self.screen {
            Screen::Form { section: 0 } => self.go(Screen::Intro),
            Screen::Form { section } => self.go(Screen::Form {
                section: section - 1,
            }),
            other => Err(invalid("go back", other)),
        }
    }

    /// `Submit → Form[N-1]`.
    pub fn revise(&mut self) -> Result<Screen> {
        match self.screen {
            Screen::Submit => self.go(Screen::Form {
                section: self.schema.len() - 1,
            }),
            other => Err(invalid("revise", other)),
        }
    }

    /// `Success → Intro`, resetting the answers to their defaults.
    pub fn start_new(&mut self) -> Result<Screen> {
        match self.screen {
            Screen::Success => {
                self.answers = AnswerRecord::for_schema(&self.schema);
                self.go(Screen::Intro)
            }
            other => Err(invalid("start a new briefing", other)),
        }
    }

    /// Checks that a submission may be confirmed.
    pub(crate) fn ensure_submittable(&self) -> Result<()> {
        match self.screen {
            Screen::Submit => Ok(()),
            other => Err(invalid("confirm submission", other)),
        }
    }

    /// `Submit → Success`, resetting the answers. Called by the submission
    /// pipeline once the briefing is stored.
    pub(crate) fn complete(&mut self) -> Result<Screen> {
        self.ensure_submittable()?;
        self.answers = AnswerRecord::for_schema(&self.schema);
        self.go(Screen::Success)
    }

    /// Replaces a text value. Accepts schema text fields and identity keys;
    /// empty strings are allowed.
    pub fn set_text(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.ensure_editing()?;
        if let Ok(identity) = key.parse::<IdentityField>() {
            self.answers.set_identity(identity, value.into());
            return Ok(());
        }
        let field = self.lookup(key)?;
        if !field.is_text() {
            return Err(mismatch(key, "text"));
        }
        self.answers.set_text(key, value.into());
        Ok(())
    }

    /// Replaces an identity value.
    pub fn set_identity(&mut self, field: IdentityField, value: impl Into<String>) -> Result<()> {
        self.ensure_editing()?;
        self.answers.set_identity(field, value.into());
        Ok(())
    }

    /// Selects `option` on a single-choice field.
    pub fn set_choice(&mut self, key: &str, option: &str) -> Result<()> {
        self.ensure_editing()?;
        match self.lookup(key)? {
            FieldKind::SingleChoice(options) => ensure_offered(key, options, option)?,
            _ => return Err(mismatch(key, "single-choice")),
        }
        self.answers.set_text(key, option.to_string());
        Ok(())
    }

    /// Adds `option` to a multi-choice selection, or removes it when already
    /// selected.
    pub fn toggle_choice(&mut self, key: &str, option: &str) -> Result<()> {
        self.ensure_editing()?;
        match self.lookup(key)? {
            FieldKind::MultiChoice(options) => ensure_offered(key, options, option)?,
            _ => return Err(mismatch(key, "multi-choice")),
        }
        self.answers.toggle_selection(key, option);
        Ok(())
    }

    fn ensure_editing(&self) -> Result<()> {
        match self.screen {
            Screen::Form { .. } => Ok(()),
            other => Err(invalid("edit answers", other)),
        }
    }

    fn lookup(&self, key: &str) -> Result<&FieldKind> {
        self.schema
            .field(key)
            .map(|f| &f.kind)
            .ok_or_else(|| BriefError::UnknownField {
                key: key.to_string(),
            })
    }

    fn go(&mut self, to: Screen) -> Result<Screen> {
        debug!("wizard: {} -> {}", self.screen, to);
        self.screen = to;
        Ok(to)
    }
}

fn ensure_offered(key: &str, options: &[String], option: &str) -> Result<()> {
    if options.iter().any(|o| o == option) {
        Ok(())
    } else {
        Err(BriefError::UnknownOption {
            key: key.to_string(),
            option: option.to_string(),
        })
    }
}

fn invalid(action: &'static str, screen: Screen) -> BriefError {
    BriefError::InvalidTransition {
        action,
        screen: screen.as_str(),
    }
}

fn mismatch(key: &str, expected: &'static str) -> BriefError {
    BriefError::FieldTypeMismatch {
        key: key.to_string(),
        expected,
    }
}
