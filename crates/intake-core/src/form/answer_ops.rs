//! Answer mutations on a form session.
//!
//! Every mutation is followed by a visibility recomputation so that the
//! current step stays valid even when a conditional answer hides it.

use std::collections::BTreeMap;

use super::IntakeForm;
use crate::{error::Result, models::AnswerValue};

impl<S> IntakeForm<S> {
    /// Replaces the answer at `key`.
    pub fn set_answer(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.answers.set_answer(key, value);
        self.reconcile();
    }

    /// Merges fields into record `index` of repeatable group `key`.
    pub fn set_list_item<I, K, V>(&mut self, key: &str, index: usize, partial: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.answers.set_list_item(key, index, partial)?;
        self.reconcile();
        Ok(())
    }

    /// Appends a record to repeatable group `key`, returning its id.
    pub fn add_list_item(&mut self, key: &str, template: BTreeMap<String, String>) -> Result<String> {
        let id = self.answers.add_list_item(key, template)?;
        self.reconcile();
        Ok(id)
    }

    /// Removes record `index` of repeatable group `key`. The first record is
    /// never removed; that case returns `Ok(false)`.
    pub fn remove_list_item(&mut self, key: &str, index: usize) -> Result<bool> {
        let removed = self.answers.remove_list_item(key, index)?;
        self.reconcile();
        Ok(removed)
    }
}
