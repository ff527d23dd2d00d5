//! Answer store with repeatable-group operations.

use std::collections::BTreeMap;

use log::warn;

use crate::{
    error::{IntakeError, Result},
    models::{AnswerValue, Answers, SubRecord},
};

/// Mutable answer set of one form session.
///
/// Scalar answers are replaced wholesale. Repeatable groups are edited one
/// record at a time; the record at index 0 can never be removed, so a seeded
/// group always keeps at least one editable record.
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    answers: Answers,
    next_record: u64,
}

impl AnswerStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding previously saved answers.
    ///
    /// The id sequence resumes after the highest `r<n>` id among the restored
    /// records, so ids removed later are never handed out again.
    pub fn from_answers(answers: Answers) -> Self {
        let next_record = answers.values().map(highest_record_number).max().unwrap_or(0);
        Self {
            answers,
            next_record,
        }
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn into_answers(self) -> Answers {
        self.answers
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.answers.get(key)
    }

    /// Scalar answer for `key`, if one is set.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_scalar)
    }

    /// Records of the repeatable group `key`, if present.
    pub fn records(&self, key: &str) -> Option<&[SubRecord]> {
        self.get(key).and_then(AnswerValue::as_records)
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Replaces the value at `key`.
    pub fn set_answer(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        let value = value.into();
        self.next_record = self.next_record.max(highest_record_number(&value));
        self.answers.insert(key.into(), value);
    }

    /// Merges `partial` into the record at `index` of group `key`.
    ///
    /// Other records are left untouched. An `id` entry in `partial` is
    /// ignored; record ids never change.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::NotAList` if `key` holds a scalar and
    /// `IntakeError::ListIndex` if there is no record at `index`.
    pub fn set_list_item<I, K, V>(&mut self, key: &str, index: usize, partial: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let records = self.records_mut(key)?;
        let len = records.len();
        let record = records.get_mut(index).ok_or_else(|| IntakeError::ListIndex {
            key: key.to_string(),
            index,
            len,
        })?;

        for (name, value) in partial {
            let name = name.into();
            if name != "id" {
                record.fields.insert(name, value.into());
            }
        }
        Ok(())
    }

    /// Appends a record with a fresh id and the fields of `template`.
    ///
    /// A missing group is created. Returns the new record's id.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::NotAList` if `key` holds a scalar.
    pub fn add_list_item(&mut self, key: &str, template: BTreeMap<String, String>) -> Result<String> {
        if !self.answers.contains_key(key) {
            self.answers
                .insert(key.to_string(), AnswerValue::Records(Vec::new()));
        }

        let id = {
            let existing = self.records_mut(key)?;
            let taken: Vec<String> = existing.iter().map(|r| r.id.clone()).collect();
            self.fresh_id(&taken)
        };

        let mut fields = template;
        fields.remove("id");
        self.records_mut(key)?.push(SubRecord {
            id: id.clone(),
            fields,
        });
        Ok(id)
    }

    /// Removes the record at `index` of group `key`.
    ///
    /// The first record is protected: `index == 0` returns `Ok(false)` and
    /// changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::NotAList` if `key` holds a scalar and
    /// `IntakeError::ListIndex` if there is no record at `index`.
    pub fn remove_list_item(&mut self, key: &str, index: usize) -> Result<bool> {
        if index == 0 {
            return Ok(false);
        }

        let records = self.records_mut(key)?;
        if index >= records.len() {
            return Err(IntakeError::ListIndex {
                key: key.to_string(),
                index,
                len: records.len(),
            });
        }
        records.remove(index);
        Ok(true)
    }

    /// Gives group `key` its first, empty record if it has none.
    ///
    /// Returns whether a record was added. A scalar stored under a group key
    /// is left alone.
    pub fn seed_list(&mut self, key: &str) -> bool {
        match self.answers.get(key) {
            None => {}
            Some(AnswerValue::Records(records)) if records.is_empty() => {}
            Some(AnswerValue::Records(_)) => return false,
            Some(AnswerValue::Scalar(_)) => {
                warn!("Answer '{key}' holds a scalar where a repeatable group is expected");
                return false;
            }
        }

        let id = self.fresh_id(&[]);
        self.answers
            .insert(key.to_string(), AnswerValue::Records(vec![SubRecord::new(id)]));
        true
    }

    fn records_mut(&mut self, key: &str) -> Result<&mut Vec<SubRecord>> {
        match self.answers.get_mut(key) {
            Some(AnswerValue::Records(records)) => Ok(records),
            Some(AnswerValue::Scalar(_)) => Err(IntakeError::NotAList {
                key: key.to_string(),
            }),
            None => Err(IntakeError::ListIndex {
                key: key.to_string(),
                index: 0,
                len: 0,
            }),
        }
    }

    /// Next id from the store's sequence that is not already taken.
    fn fresh_id(&mut self, taken: &[String]) -> String {
        loop {
            self.next_record += 1;
            let id = format!("r{}", self.next_record);
            if !taken.contains(&id) {
                return id;
            }
        }
    }
}

/// Highest `n` among record ids of the form `r<n>`; 0 for scalars.
fn highest_record_number(value: &AnswerValue) -> u64 {
    value
        .as_records()
        .unwrap_or_default()
        .iter()
        .filter_map(|record| record.id.strip_prefix('r')?.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}
