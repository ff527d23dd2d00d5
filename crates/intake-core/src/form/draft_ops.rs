//! Saving and discarding the draft of a form session.

use log::info;

use super::IntakeForm;
use crate::{
    draft::{save_answers, DraftStore},
    error::Result,
    models::draft_key,
};

impl<S: DraftStore> IntakeForm<S> {
    /// Key the draft of this form is stored under.
    pub fn draft_key(&self) -> String {
        draft_key(&self.form_id)
    }

    /// Stores the current answers as this form's draft, replacing any
    /// earlier one.
    ///
    /// # Errors
    ///
    /// Propagates serialization and store errors.
    pub fn save_draft(&mut self) -> Result<()> {
        save_answers(&mut self.store, &self.form_id, self.answers.answers())?;
        info!("Saved draft for form '{}'", self.form_id);
        Ok(())
    }

    /// Deletes this form's stored draft. In-memory answers are kept.
    pub fn discard_draft(&mut self) -> Result<bool> {
        let key = self.draft_key();
        self.store.remove(&key)
    }
}
