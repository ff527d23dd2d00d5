//! The intake form controller.
//!
//! [`IntakeForm`] owns one in-progress session of a form: its answers, the
//! current step and whether the form has been submitted. It is generic over
//! the [`DraftStore`] used to save and restore drafts.
//!
//! ```text
//! ┌──────────────┐   answers    ┌──────────────┐   visible    ┌──────────────┐
//! │ Answer Store │─────────────▶│ Step Catalog │─────────────▶│  Navigation  │
//! │ (answer_ops) │              │  (catalog)   │    steps     │ (navigation) │
//! └──────┬───────┘              └──────────────┘              └──────┬───────┘
//!        │ save / restore                                            │ last step
//!        ▼                                                           ▼
//! ┌──────────────┐                                            ┌──────────────┐
//! │  DraftStore  │                                            │  Submission  │
//! │ (draft_ops)  │                                            │ (submission) │
//! └──────────────┘                                            └──────────────┘
//! ```
//!
//! The controller tracks the current step by identity rather than by index.
//! After every answer change the visible sequence is recomputed and the
//! current step re-located in it; if the change hid the current step, the
//! form falls back to the nearest earlier step that is still visible.
//!
//! # Example
//!
//! ```rust
//! use intake_core::{IntakeForm, MemoryDraftStore, StepCatalog};
//!
//! # fn main() -> intake_core::Result<()> {
//! let mut form = IntakeForm::open("family-law-intake", StepCatalog::family_law(), MemoryDraftStore::new())?;
//! form.set_answer("full-name", "Jane Doe");
//! form.set_answer("other-lawyer", "Yes");
//!
//! form.go_next();
//! form.go_next();
//! assert_eq!(form.current_step().id, "lawyer");
//!
//! form.save_draft()?;
//! # Ok(())
//! # }
//! ```

use log::debug;

use crate::{
    answers::AnswerStore,
    catalog::StepCatalog,
    draft::{load_answers, DraftStore},
    error::{IntakeError, Result},
    models::{Answers, StepDefinition},
};

pub mod answer_ops;
pub mod draft_ops;
pub mod navigation;
pub mod submission;
pub mod view;


pub use navigation::Navigation;
pub use view::{FormView, StepView};

/// One session of an intake form.
pub struct IntakeForm<S> {
    form_id: String,
    catalog: StepCatalog,
    answers: AnswerStore,
    /// Catalog index of the current step; always a visible step.
    current: usize,
    submitted: bool,
    store: S,
}

impl<S: DraftStore> IntakeForm<S> {
    /// Opens a form session, restoring the stored draft for `form_id` if
    /// there is a readable one.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::InvalidInput` if `form_id` is blank. Draft
    /// problems never fail the call; the form starts empty instead.
    pub fn open(form_id: impl Into<String>, catalog: StepCatalog, store: S) -> Result<Self> {
        let form_id = form_id.into();
        if form_id.trim().is_empty() {
            return Err(IntakeError::invalid_input("form_id").with_reason("must not be blank"));
        }

        let answers = load_answers(&store, &form_id)
            .map(AnswerStore::from_answers)
            .unwrap_or_default();

        let mut form = Self {
            form_id,
            catalog,
            answers,
            current: 0,
            submitted: false,
            store,
        };
        form.current = form.visible_indices().first().copied().unwrap_or(0);
        form.enter_current_step();
        Ok(form)
    }
}

impl<S> IntakeForm<S> {
    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    /// Current answers.
    pub fn answers(&self) -> &Answers {
        self.answers.answers()
    }

    pub fn answer_store(&self) -> &AnswerStore {
        &self.answers
    }

    /// Steps visible for the current answers, in order.
    pub fn visible_steps(&self) -> Vec<&StepDefinition> {
        self.catalog.visible(self.answers.answers())
    }

    /// Index of the current step within [`visible_steps`](Self::visible_steps).
    pub fn position(&self) -> usize {
        self.visible_indices()
            .iter()
            .position(|&index| index == self.current)
            .unwrap_or(0)
    }

    /// Number of visible steps.
    pub fn total_steps(&self) -> usize {
        self.visible_indices().len()
    }

    pub fn current_step(&self) -> &StepDefinition {
        &self.catalog.steps()[self.current]
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the session, returning its draft store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Catalog indices of the visible steps.
    fn visible_indices(&self) -> Vec<usize> {
        let answers = self.answers.answers();
        self.catalog
            .steps()
            .iter()
            .enumerate()
            .filter(|(_, step)| step.is_visible(answers))
            .map(|(index, _)| index)
            .collect()
    }

    /// Re-locates the current step after the answers changed.
    fn reconcile(&mut self) {
        let visible = self.visible_indices();
        if visible.contains(&self.current) {
            return;
        }

        // The catalog guarantees an unconditional step, so `visible` is never
        // empty; the nearest earlier visible step wins, else the first one.
        let fallback = visible
            .iter()
            .rev()
            .find(|&&index| index < self.current)
            .or_else(|| visible.first())
            .copied()
            .unwrap_or(0);

        debug!(
            "Step '{}' is no longer visible, moving to '{}'",
            self.current_step().id,
            self.catalog.steps()[fallback].id
        );
        self.current = fallback;
        self.enter_current_step();
    }

    /// Seeds the repeatable groups of the current step.
    fn enter_current_step(&mut self) {
        let step = &self.catalog.steps()[self.current];
        for key in step.repeatable_keys() {
            if self.answers.seed_list(key) {
                debug!("Seeded repeatable group '{key}' on step '{}'", step.id);
            }
        }
    }
}
