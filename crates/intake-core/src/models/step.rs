//! Step definitions, visibility conditions and the fields each step asks.

use serde::{Deserialize, Serialize};

use super::{AnswerValue, Answers};

/// Visibility rule for a conditional step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCondition {
    /// Answer key the step depends on
    pub field: String,

    /// Scalar value that makes the step visible
    pub equals: String,
}

impl StepCondition {
    /// Creates a condition satisfied when `field` is exactly `equals`.
    pub fn new(field: impl Into<String>, equals: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            equals: equals.into(),
        }
    }

    /// Checks the condition against the current answers.
    ///
    /// Comparison is exact string equality. A repeatable group never
    /// satisfies a condition.
    pub fn is_met(&self, answers: &Answers) -> bool {
        matches!(
            answers.get(&self.field),
            Some(AnswerValue::Scalar(value)) if *value == self.equals
        )
    }
}

/// Kind of input a field expects. Descriptive only; nothing is validated
/// against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum FieldKind {
    /// Free text
    Text,

    /// Date entered as text, conventionally `YYYY-MM-DD`
    Date,

    /// One of a fixed set of options
    Choice { options: Vec<String> },

    /// Repeatable group of records, each with the listed fields
    Repeat { item_fields: Vec<FieldSpec> },
}

/// A single question within a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Answer key the field writes to
    pub key: String,

    /// Question text
    pub label: String,

    /// Expected input
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Free-text question.
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(key, label, FieldKind::Text)
    }

    /// Date question; the value is kept as entered.
    pub fn date(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(key, label, FieldKind::Date)
    }

    /// Question answered with one of `options`.
    pub fn choice(key: impl Into<String>, label: impl Into<String>, options: &[&str]) -> Self {
        let options = options.iter().map(|o| (*o).to_string()).collect();
        Self::with_kind(key, label, FieldKind::Choice { options })
    }

    /// Shorthand for a `Yes`/`No` choice.
    pub fn yes_no(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::choice(key, label, &["Yes", "No"])
    }

    /// Repeatable group whose records answer `item_fields`.
    pub fn repeat(
        key: impl Into<String>,
        label: impl Into<String>,
        item_fields: Vec<FieldSpec>,
    ) -> Self {
        Self::with_kind(key, label, FieldKind::Repeat { item_fields })
    }

    fn with_kind(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
        }
    }

    /// Whether this field is a repeatable group.
    pub fn is_repeatable(&self) -> bool {
        matches!(self.kind, FieldKind::Repeat { .. })
    }
}

/// One page of the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Stable identifier, unique within a catalog
    pub id: String,

    /// Heading shown for the step
    pub title: String,

    /// Visibility rule; `None` means always shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<StepCondition>,

    /// Questions asked on this step, in display order
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl StepDefinition {
    /// Creates an unconditional step with no fields.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            condition: None,
            fields: Vec::new(),
        }
    }

    /// Makes the step visible only when `field` equals `equals`.
    pub fn shown_when(mut self, field: impl Into<String>, equals: impl Into<String>) -> Self {
        self.condition = Some(StepCondition::new(field, equals));
        self
    }

    /// Appends a question to the step.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Whether the step is visible for the given answers.
    pub fn is_visible(&self, answers: &Answers) -> bool {
        self.condition
            .as_ref()
            .map_or(true, |condition| condition.is_met(answers))
    }

    /// Keys of the repeatable groups owned by this step.
    pub fn repeatable_keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|field| field.is_repeatable())
            .map(|field| field.key.as_str())
    }
}
