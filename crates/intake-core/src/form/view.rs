//! Read-only snapshots handed to the presentation layer.
//!
//! Markdown rendering lives in [`crate::display::views`].

use crate::models::{Answers, StepDefinition};

/// The form as it should currently be presented.
#[derive(Debug)]
pub enum FormView<'a> {
    /// A step of an in-progress form.
    Step(StepView<'a>),

    /// Terminal acknowledgment after submission.
    Submitted { form_id: &'a str },
}

impl FormView<'_> {
    pub fn is_submitted(&self) -> bool {
        matches!(self, FormView::Submitted { .. })
    }
}

/// The current step with enough context to render it and the step indicator.
#[derive(Debug)]
pub struct StepView<'a> {
    /// Step being shown
    pub step: &'a StepDefinition,

    /// Index of `step` within `visible`
    pub position: usize,

    /// All visible steps, for the step indicator
    pub visible: Vec<&'a StepDefinition>,

    /// Current answers
    pub answers: &'a Answers,
}

impl StepView<'_> {
    pub fn total(&self) -> usize {
        self.visible.len()
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    /// On the last step "next" submits the form.
    pub fn is_last(&self) -> bool {
        self.position + 1 == self.visible.len()
    }
}
