//! Form schema: the ordered catalog of sections and fields the wizard walks.
//!
//! A [`FormSchema`] is immutable once built. Construction validates the
//! authoring invariants (at least one section, globally unique field keys,
//! options present exactly on choice fields) so that the wizard can treat
//! every lookup against a validated schema as total.

use std::collections::HashSet;

use crate::{
    error::{BriefError, Result},
    models::IdentityField,
};

pub mod catalog;

/// Declared input type of a field, with the option vocabulary for choice
/// kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Multi-line free text
    TextArea,
    /// Exactly one option out of a fixed vocabulary
    SingleChoice(Vec<String>),
    /// Any subset of a fixed vocabulary, kept in selection order
    MultiChoice(Vec<String>),
}

impl FieldKind {
    /// The option vocabulary, or `None` for text kinds.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            FieldKind::Text | FieldKind::TextArea => None,
            FieldKind::SingleChoice(options) | FieldKind::MultiChoice(options) => Some(options),
        }
    }

    /// Whether the field holds free text.
    pub fn is_text(&self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::TextArea)
    }
}

/// One question of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Unique key within the whole schema
    pub key: String,
    /// Display prompt
    pub label: String,
    /// Short header used by the summary; falls back to the label
    pub heading: Option<String>,
    /// Declared input type
    pub kind: FieldKind,
}

impl Field {
    /// Creates a single-line text field.
    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    /// Creates a multi-line text field.
    pub fn text_area(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::TextArea)
    }

    /// Creates a single-choice field.
    pub fn single_choice(key: &str, label: &str, options: &[&str]) -> Self {
        Self::new(key, label, FieldKind::SingleChoice(to_owned(options)))
    }

    /// Creates a multi-choice field.
    pub fn multi_choice(key: &str, label: &str, options: &[&str]) -> Self {
        Self::new(key, label, FieldKind::MultiChoice(to_owned(options)))
    }

    fn new(key: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            heading: None,
            kind,
        }
    }

    /// Sets the short summary header.
    pub fn with_heading(mut self, heading: &str) -> Self {
        self.heading = Some(heading.to_string());
        self
    }

    /// The header the summary prints in front of this field's value.
    pub fn summary_heading(&self) -> &str {
        self.heading.as_deref().unwrap_or(&self.label)
    }
}

fn to_owned(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| (*o).to_string()).collect()
}

/// An ordered group of fields shown as one wizard step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    /// Decorative marker shown next to the title
    pub icon: String,
    pub fields: Vec<Field>,
}

impl Section {
    pub fn new(title: &str, icon: &str, fields: Vec<Field>) -> Self {
        Self {
            title: title.to_string(),
            icon: icon.to_string(),
            fields,
        }
    }
}

/// Validated, ordered sequence of sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    sections: Vec<Section>,
}

impl FormSchema {
    /// Builds a schema, rejecting authoring errors.
    ///
    /// # Errors
    ///
    /// Returns [`BriefError::InvalidSchema`] when there are no sections, when
    /// a key is repeated (also across sections or against an identity key),
    /// when a choice field has no options, or when a choice field repeats an
    /// option.
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        if sections.is_empty() {
            return Err(BriefError::invalid_schema("schema has no sections"));
        }

        let mut seen: HashSet<&str> = IdentityField::ALL.iter().map(|f| f.key()).collect();
        for section in &sections {
            for field in &section.fields {
                if !seen.insert(field.key.as_str()) {
                    return Err(BriefError::invalid_schema(format!(
                        "duplicate field key '{}'",
                        field.key
                    )));
                }
                if let Some(options) = field.kind.options() {
                    if options.is_empty() {
                        return Err(BriefError::invalid_schema(format!(
                            "choice field '{}' declares no options",
                            field.key
                        )));
                    }
                    let unique: HashSet<&String> = options.iter().collect();
                    if unique.len() != options.len() {
                        return Err(BriefError::invalid_schema(format!(
                            "choice field '{}' repeats an option",
                            field.key
                        )));
                    }
                }
            }
        }

        Ok(Self { sections })
    }

    /// The built-in project briefing questionnaire.
    pub fn briefing() -> Self {
        Self {
            sections: catalog::briefing_sections(),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections; always at least one.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false for a validated schema.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Looks up a field by key across all sections.
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields().find(|f| f.key == key)
    }

    /// Iterates over every field in schema order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::briefing()
    }
}
