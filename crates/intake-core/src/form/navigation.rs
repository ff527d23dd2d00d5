//! Moving between visible steps.

use log::debug;

use super::IntakeForm;
use crate::error::{IntakeError, Result};

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The current step changed; positions index the visible steps.
    Moved { from: usize, to: usize },

    /// Nothing changed.
    Stayed,

    /// The form was submitted by this call.
    Submitted,
}

impl Navigation {
    /// Whether the presentation should scroll back to the top.
    pub fn scrolls_to_top(&self) -> bool {
        !matches!(self, Navigation::Stayed)
    }
}

impl<S> IntakeForm<S> {
    /// Advances to the next visible step, or submits from the last one.
    pub fn go_next(&mut self) -> Navigation {
        if self.submitted {
            return Navigation::Stayed;
        }

        let position = self.position();
        if position + 1 < self.total_steps() {
            self.move_to(position + 1)
        } else {
            self.submit()
        }
    }

    /// Returns to the previous visible step. Does nothing on the first one.
    pub fn go_previous(&mut self) -> Navigation {
        if self.submitted {
            return Navigation::Stayed;
        }

        match self.position() {
            0 => Navigation::Stayed,
            position => self.move_to(position - 1),
        }
    }

    /// Jumps straight to visible step `index`.
    ///
    /// Steps in between need not have been answered.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::StepOutOfRange` if `index` is not a visible step;
    /// the form is left unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<Navigation> {
        if self.submitted {
            return Ok(Navigation::Stayed);
        }

        let total = self.total_steps();
        if index >= total {
            return Err(IntakeError::StepOutOfRange { index, total });
        }

        if index == self.position() {
            Ok(Navigation::Stayed)
        } else {
            Ok(self.move_to(index))
        }
    }

    /// Makes visible step `to` current. `to` must be in range.
    fn move_to(&mut self, to: usize) -> Navigation {
        let from = self.position();
        let Some(&target) = self.visible_indices().get(to) else {
            return Navigation::Stayed;
        };

        self.current = target;
        self.enter_current_step();
        debug!(
            "Form '{}' moved from step {from} to {to} ('{}')",
            self.form_id,
            self.current_step().id
        );
        Navigation::Moved { from, to }
    }
}
