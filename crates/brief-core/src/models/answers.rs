//! The in-progress answer record and its identity block.

use std::{collections::BTreeMap, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::schema::{FieldKind, FormSchema};

/// The four contact fields collected on the first screen, outside any
/// section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityField {
    ClientName,
    ProjectName,
    Email,
    Phone,
}

impl IdentityField {
    /// Every identity field in collection order.
    pub const ALL: [IdentityField; 4] = [
        IdentityField::ClientName,
        IdentityField::ProjectName,
        IdentityField::Email,
        IdentityField::Phone,
    ];

    /// Record key, as used in serialized answers.
    pub fn key(&self) -> &'static str {
        match self {
            IdentityField::ClientName => "clientName",
            IdentityField::ProjectName => "projectName",
            IdentityField::Email => "email",
            IdentityField::Phone => "phone",
        }
    }

    /// Prompt shown by renderers.
    pub fn label(&self) -> &'static str {
        match self {
            IdentityField::ClientName => "Your full name",
            IdentityField::ProjectName => "Project name",
            IdentityField::Email => "Your e-mail",
            IdentityField::Phone => "Your phone",
        }
    }

    /// Header used in the summary's identity block.
    pub fn heading(&self) -> &'static str {
        match self {
            IdentityField::ClientName => "Name",
            IdentityField::ProjectName => "Project",
            IdentityField::Email => "E-mail",
            IdentityField::Phone => "Phone",
        }
    }
}

impl FromStr for IdentityField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdentityField::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("Invalid identity field: {s}"))
    }
}

/// Value held for one schema field.
///
/// Text and single-choice fields hold a string (empty when unanswered);
/// multi-choice fields hold the selected options in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Selections(Vec<String>),
}

impl AnswerValue {
    /// Default value for a field of the given kind.
    pub fn default_for(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Text | FieldKind::TextArea | FieldKind::SingleChoice(_) => {
                AnswerValue::Text(String::new())
            }
            FieldKind::MultiChoice(_) => AnswerValue::Selections(Vec::new()),
        }
    }

    /// Whether the value is the empty default.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(text) => text.is_empty(),
            AnswerValue::Selections(selected) => selected.is_empty(),
        }
    }
}

/// Mapping from field key to value, plus the identity block.
///
/// Serializes as one flat JSON object: the identity keys next to every field
/// key, which is the shape the remote store receives.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, AnswerValue>,
}

impl AnswerRecord {
    /// Creates a record holding the default value for every schema field.
    pub fn for_schema(schema: &FormSchema) -> Self {
        Self {
            values: schema
                .fields()
                .map(|f| (f.key.clone(), AnswerValue::default_for(&f.kind)))
                .collect(),
            ..Default::default()
        }
    }

    pub fn identity(&self, field: IdentityField) -> &str {
        match field {
            IdentityField::ClientName => &self.client_name,
            IdentityField::ProjectName => &self.project_name,
            IdentityField::Email => &self.email,
            IdentityField::Phone => &self.phone,
        }
    }

    pub(crate) fn set_identity(&mut self, field: IdentityField, value: String) {
        let slot = match field {
            IdentityField::ClientName => &mut self.client_name,
            IdentityField::ProjectName => &mut self.project_name,
            IdentityField::Email => &mut self.email,
            IdentityField::Phone => &mut self.phone,
        };
        *slot = value;
    }

    /// Text or single-choice value for `key`, or `""` when absent.
    pub fn text(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(AnswerValue::Text(text)) => text,
            _ => "",
        }
    }

    /// Selected options for a multi-choice `key`, empty when absent.
    pub fn selections(&self, key: &str) -> &[String] {
        match self.values.get(key) {
            Some(AnswerValue::Selections(selected)) => selected,
            _ => &[],
        }
    }

    pub(crate) fn set_text(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), AnswerValue::Text(value));
    }

    /// Removes `option` when selected, appends it otherwise.
    pub(crate) fn toggle_selection(&mut self, key: &str, option: &str) {
        let entry = self
            .values
            .entry(key.to_string())
            .or_insert_with(|| AnswerValue::Selections(Vec::new()));
        if let AnswerValue::Text(_) = entry {
            *entry = AnswerValue::Selections(Vec::new());
        }
        if let AnswerValue::Selections(selected) = entry {
            if let Some(pos) = selected.iter().position(|s| s == option) {
                selected.remove(pos);
            } else {
                selected.push(option.to_string());
            }
        }
    }
}
