//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use super::datetime::LocalDateTime;
use crate::models::{DraftSummary, StepDefinition};

/// Newtype wrapper for displaying stored drafts.
///
/// # Examples
///
/// ```rust
/// use intake_core::{display::DraftSummaries, models::DraftSummary};
/// use jiff::Timestamp;
///
/// let drafts = DraftSummaries(vec![DraftSummary {
///     form_id: "family-law-intake".to_string(),
///     saved_at: Timestamp::now(),
///     size: 42,
/// }]);
/// assert!(format!("{drafts}").contains("family-law-intake"));
/// assert_eq!(format!("{}", DraftSummaries(vec![])), "No drafts found.\n");
/// ```
pub struct DraftSummaries(pub Vec<DraftSummary>);

impl DraftSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Index<usize> for DraftSummaries {
    type Output = DraftSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a DraftSummaries {
    type Item = &'a DraftSummary;
    type IntoIter = std::slice::Iter<'a, DraftSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for DraftSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No drafts found.");
        }

        writeln!(f, "# Saved Drafts ({})", self.len())?;
        writeln!(f)?;
        for draft in self {
            writeln!(
                f,
                "- **{}** saved {} ({} bytes)",
                draft.form_id,
                LocalDateTime(&draft.saved_at),
                draft.size
            )?;
        }
        Ok(())
    }
}

/// Numbered list of visible steps with an optional current-step marker.
pub struct StepList<'a> {
    pub steps: Vec<&'a StepDefinition>,
    pub current: Option<usize>,
}

impl<'a> StepList<'a> {
    pub fn new(steps: Vec<&'a StepDefinition>) -> Self {
        Self {
            steps,
            current: None,
        }
    }

    /// Marks visible step `position` as the current one.
    pub fn with_current(mut self, position: usize) -> Self {
        self.current = Some(position);
        self
    }
}

impl fmt::Display for StepList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Steps")?;
        writeln!(f)?;
        for (index, step) in self.steps.iter().enumerate() {
            let marker = if self.current == Some(index) { "➤ " } else { "" };
            write!(f, "{}. {marker}{step}", index + 1)?;
            if let Some(condition) = &step.condition {
                write!(f, " _{condition}_")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
