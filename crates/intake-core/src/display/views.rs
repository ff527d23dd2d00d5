//! Markdown rendering of form views and answer sheets.

use std::{collections::BTreeSet, fmt};

use crate::{
    catalog::StepCatalog,
    form::{FormView, StepView},
    models::{AnswerValue, Answers, FieldKind, FieldSpec, SubRecord},
};

const NOT_ANSWERED: &str = "_not answered_";

impl fmt::Display for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormView::Step(view) => write!(f, "{view}"),
            FormView::Submitted { form_id } => {
                writeln!(f, "# Form submitted")?;
                writeln!(f)?;
                writeln!(
                    f,
                    "Thank you. Your answers to `{form_id}` have been received and \
                     can no longer be changed."
                )
            }
        }
    }
}

impl fmt::Display for StepView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Step {} of {}: {}",
            self.position + 1,
            self.total(),
            self.step.title
        )?;
        writeln!(f)?;

        let dots: Vec<&str> = (0..self.total())
            .map(|index| match index.cmp(&self.position) {
                std::cmp::Ordering::Less => "●",
                std::cmp::Ordering::Equal => "➤",
                std::cmp::Ordering::Greater => "○",
            })
            .collect();
        writeln!(f, "Progress: {}", dots.join(" "))?;
        writeln!(f)?;

        for field in &self.step.fields {
            write_field(f, field, self.answers.get(&field.key))?;
        }

        if self.is_last() {
            writeln!(f)?;
            writeln!(f, "_This is the last step; continuing submits the form._")?;
        }
        Ok(())
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, field: &FieldSpec, value: Option<&AnswerValue>) -> fmt::Result {
    match (&field.kind, value) {
        (FieldKind::Repeat { item_fields }, Some(AnswerValue::Records(records))) => {
            writeln!(f)?;
            writeln!(f, "## {} (`{}`)", field.label, field.key)?;
            for (index, record) in records.iter().enumerate() {
                write_record(f, index, record, item_fields)?;
            }
            Ok(())
        }
        (FieldKind::Repeat { .. }, _) => {
            writeln!(f)?;
            writeln!(f, "## {} (`{}`)", field.label, field.key)?;
            writeln!(f)?;
            writeln!(f, "No records.")
        }
        (FieldKind::Choice { .. }, _) => writeln!(
            f,
            "- **{}** (`{}`) [{}]: {}",
            field.label,
            field.key,
            field.kind,
            AnswerText(value)
        ),
        _ => writeln!(
            f,
            "- **{}** (`{}`): {}",
            field.label,
            field.key,
            AnswerText(value)
        ),
    }
}

fn write_record(
    f: &mut fmt::Formatter<'_>,
    index: usize,
    record: &SubRecord,
    item_fields: &[FieldSpec],
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "### {}. Record `{}`", index + 1, record.id)?;
    for item in item_fields {
        let value = record.field(&item.key).unwrap_or(NOT_ANSWERED);
        writeln!(f, "- {} (`{}`): {value}", item.label, item.key)?;
    }
    for (name, value) in &record.fields {
        if !item_fields.iter().any(|item| &item.key == name) {
            writeln!(f, "- `{name}`: {value}")?;
        }
    }
    Ok(())
}

struct AnswerText<'a>(Option<&'a AnswerValue>);

impl fmt::Display for AnswerText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "{NOT_ANSWERED}"),
        }
    }
}

/// Every recorded answer, grouped by the step that asks it.
///
/// Answers to keys no step asks are listed last under "Other answers".
pub struct AnswerSheet<'a> {
    pub catalog: &'a StepCatalog,
    pub answers: &'a Answers,
}

impl fmt::Display for AnswerSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.answers.is_empty() {
            return writeln!(f, "No answers recorded.");
        }

        let mut listed = BTreeSet::new();
        for step in self.catalog.steps() {
            let answered: Vec<&FieldSpec> = step
                .fields
                .iter()
                .filter(|field| self.answers.contains_key(&field.key))
                .collect();
            if answered.is_empty() {
                continue;
            }

            writeln!(f, "# {step}")?;
            writeln!(f)?;
            for field in answered {
                listed.insert(field.key.as_str());
                write_field(f, field, self.answers.get(&field.key))?;
            }
            writeln!(f)?;
        }

        let others: Vec<(&String, &AnswerValue)> = self
            .answers
            .iter()
            .filter(|(key, _)| !listed.contains(key.as_str()))
            .collect();
        if !others.is_empty() {
            writeln!(f, "# Other answers")?;
            writeln!(f)?;
            for (key, value) in others {
                writeln!(f, "- `{key}`: {value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{draft::MemoryDraftStore, form::IntakeForm};

    fn open_form() -> IntakeForm<MemoryDraftStore> {
        IntakeForm::open("family-law-intake", StepCatalog::family_law(), MemoryDraftStore::new())
            .unwrap()
    }

    #[test]
    fn test_step_view_markdown() {
        let mut form = open_form();
        form.set_answer("full-name", "Jane Doe");

        let output = form.view().to_string();
        assert!(output.starts_with("# Step 1 of 14: About You"));
        assert!(output.contains("Progress: ➤ ○"));
        assert!(output.contains("- **Full name** (`full-name`): Jane Doe"));
        assert!(output.contains("- **Email address** (`email`): _not answered_"));
    }

    #[test]
    fn test_repeatable_group_markdown() {
        let mut form = open_form();
        form.set_answer("has-children", "Yes");
        let index = form
            .visible_steps()
            .iter()
            .position(|s| s.id == "children")
            .unwrap();
        form.jump_to(index).unwrap();
        form.set_list_item("children", 0, [("name", "Sam")]).unwrap();

        let output = form.view().to_string();
        assert!(output.contains("## Children (`children`)"));
        assert!(output.contains("### 1. Record `r1`"));
        assert!(output.contains("- Child's name (`name`): Sam"));
    }

    #[test]
    fn test_last_step_and_submitted_markdown() {
        let mut form = open_form();
        let last = form.total_steps() - 1;
        form.jump_to(last).unwrap();
        assert!(form.view().to_string().contains("continuing submits the form"));

        form.go_next();
        let output = form.view().to_string();
        assert!(output.starts_with("# Form submitted"));
        assert!(!output.contains("Step"));
    }

    #[test]
    fn test_answer_sheet_groups_by_step() {
        let mut answers = Answers::new();
        answers.insert("full-name".to_string(), AnswerValue::from("Jane Doe"));
        answers.insert("married".to_string(), AnswerValue::from("Yes"));
        answers.insert("legacy-field".to_string(), AnswerValue::from("kept"));

        let catalog = StepCatalog::family_law();
        let output = AnswerSheet {
            catalog: &catalog,
            answers: &answers,
        }
        .to_string();

        assert!(output.contains("# About You (`introduction`)"));
        assert!(output.contains("# Marriage (`marriage`)"));
        assert!(output.contains("[Yes / No]: Yes"));
        assert!(output.contains("# Other answers"));
        assert!(output.contains("- `legacy-field`: kept"));
        assert!(!output.contains("# Children"));
    }

    #[test]
    fn test_empty_answer_sheet() {
        let catalog = StepCatalog::family_law();
        let answers = Answers::new();
        let sheet = AnswerSheet {
            catalog: &catalog,
            answers: &answers,
        };
        assert_eq!(sheet.to_string(), "No answers recorded.\n");
    }
}
