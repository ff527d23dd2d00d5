//! The one-way submission gate.

use log::info;

use super::{FormView, IntakeForm, Navigation, StepView};

impl<S> IntakeForm<S> {
    /// Submits the form.
    ///
    /// Submission cannot be undone. Submitting again is a no-op and returns
    /// [`Navigation::Stayed`].
    pub fn submit(&mut self) -> Navigation {
        if self.submitted {
            return Navigation::Stayed;
        }

        self.submitted = true;
        info!("Form '{}' submitted", self.form_id);
        Navigation::Submitted
    }

    /// What the presentation layer should show right now.
    ///
    /// Once submitted this is always [`FormView::Submitted`].
    pub fn view(&self) -> FormView<'_> {
        if self.submitted {
            return FormView::Submitted {
                form_id: &self.form_id,
            };
        }

        FormView::Step(StepView {
            step: self.current_step(),
            position: self.position(),
            visible: self.visible_steps(),
            answers: self.answers.answers(),
        })
    }
}
