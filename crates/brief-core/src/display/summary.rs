//! Plain-text briefing summary sent through the messaging link.

use std::fmt;

use jiff::Timestamp;

use super::LocalDateTime;
use crate::{
    models::{AnswerRecord, IdentityField, Settings},
    schema::{Field, FieldKind, FormSchema, Section},
};

/// Placeholder printed for unanswered fields.
pub const NOT_INFORMED: &str = "Not informed";

/// Width of the separator rules, in characters.
pub const RULE_WIDTH: usize = 52;

const RULE: &str = "━";

/// Renders an answer record as the summary text.
///
/// Layout: title, rule, identity block with the date line, rule, one block
/// per section in schema order, rule, attribution. Everything except the
/// `• Date:` line depends only on the inputs.
///
/// ```rust
/// use brief_core::{display::BriefingSummary, models::{AnswerRecord, Settings}};
/// use brief_core::schema::FormSchema;
/// use jiff::Timestamp;
///
/// let schema = FormSchema::briefing();
/// let answers = AnswerRecord::for_schema(&schema);
/// let settings = Settings::default();
/// let text = BriefingSummary::new(&schema, &answers, &settings, Timestamp::now()).to_string();
/// assert!(text.contains("🎯 PROJECT GOAL"));
/// assert!(text.contains("• Main Goal: Not informed"));
/// ```
pub struct BriefingSummary<'a> {
    schema: &'a FormSchema,
    answers: &'a AnswerRecord,
    settings: &'a Settings,
    generated_at: Timestamp,
}

impl<'a> BriefingSummary<'a> {
    pub fn new(
        schema: &'a FormSchema,
        answers: &'a AnswerRecord,
        settings: &'a Settings,
        generated_at: Timestamp,
    ) -> Self {
        Self {
            schema,
            answers,
            settings,
            generated_at,
        }
    }

    fn write_identity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "👤 CLIENT INFORMATION")?;
        for field in IdentityField::ALL {
            bullet(f, field.heading(), self.answers.identity(field))?;
        }
        writeln!(
            f,
            "• Date: {}",
            LocalDateTime::system(self.generated_at)
        )
    }

    fn write_section(&self, f: &mut fmt::Formatter<'_>, section: &Section) -> fmt::Result {
        writeln!(f, "{} {}", section.icon, section.title.to_uppercase())?;
        for field in &section.fields {
            self.write_field(f, field)?;
        }
        Ok(())
    }

    fn write_field(&self, f: &mut fmt::Formatter<'_>, field: &Field) -> fmt::Result {
        match &field.kind {
            FieldKind::Text | FieldKind::TextArea | FieldKind::SingleChoice(_) => {
                bullet(f, field.summary_heading(), self.answers.text(&field.key))
            }
            FieldKind::MultiChoice(_) => {
                writeln!(f, "{}:", field.summary_heading())?;
                let selected = self.answers.selections(&field.key);
                if selected.is_empty() {
                    writeln!(f, "• {NOT_INFORMED}")
                } else {
                    selected.iter().try_for_each(|option| writeln!(f, "• {option}"))
                }
            }
        }
    }
}

fn bullet(f: &mut fmt::Formatter<'_>, heading: &str, value: &str) -> fmt::Result {
    let value = if value.is_empty() {
        NOT_INFORMED
    } else {
        value
    };
    writeln!(f, "• {heading}: {value}")
}

fn rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", RULE.repeat(RULE_WIDTH))
}

impl fmt::Display for BriefingSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🎯 {}", self.settings.title.to_uppercase())?;
        rule(f)?;
        writeln!(f)?;
        self.write_identity(f)?;
        writeln!(f)?;
        rule(f)?;

        for section in self.schema.sections() {
            writeln!(f)?;
            self.write_section(f, section)?;
        }

        writeln!(f)?;
        rule(f)?;
        writeln!(f, "💼 {} - Web Development", self.settings.developer_name)?;
        write!(f, "📧 Briefing generated automatically")
    }
}
