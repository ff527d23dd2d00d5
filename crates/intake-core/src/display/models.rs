//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{AnswerValue, DraftRecord, FieldKind, StepCondition, StepDefinition};

impl fmt::Display for StepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (`{}`)", self.title, self.id)
    }
}

impl fmt::Display for StepCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shown when `{}` is \"{}\"", self.field, self.equals)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Date => write!(f, "date"),
            FieldKind::Choice { options } => write!(f, "{}", options.join(" / ")),
            FieldKind::Repeat { .. } => write!(f, "repeatable group"),
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Scalar(value) if value.is_empty() => write!(f, "_blank_"),
            AnswerValue::Scalar(value) => write!(f, "{value}"),
            AnswerValue::Records(records) => match records.len() {
                1 => write!(f, "1 record"),
                n => write!(f, "{n} records"),
            },
        }
    }
}

impl fmt::Display for DraftRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Draft: {}", self.form_id)?;
        writeln!(f)?;
        writeln!(f, "- Saved: {}", LocalDateTime(&self.saved_at))?;
        writeln!(f, "- Size: {} bytes", self.blob.len())?;
        if self.answers().is_err() {
            writeln!(f)?;
            writeln!(f, "The stored draft is unreadable and will be ignored.")?;
        }
        Ok(())
    }
}
