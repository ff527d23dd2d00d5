//! Answer values and repeatable sub-records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flat mapping from question key to answer value.
///
/// A `BTreeMap` keeps serialized drafts stable across saves.
pub type Answers = BTreeMap<String, AnswerValue>;

/// A single answer in the store.
///
/// Serialized untagged so that a stored draft reads as plain JSON: scalars are
/// strings and repeatable groups are arrays of flat objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Text, date string or a choice such as `"Yes"`
    Scalar(String),

    /// Ordered records of a repeatable group (children, assets, ...)
    Records(Vec<SubRecord>),
}

impl AnswerValue {
    /// Returns the scalar text, or `None` for a repeatable group.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            AnswerValue::Scalar(value) => Some(value),
            AnswerValue::Records(_) => None,
        }
    }

    /// Returns the records, or `None` for a scalar answer.
    pub fn as_records(&self) -> Option<&[SubRecord]> {
        match self {
            AnswerValue::Scalar(_) => None,
            AnswerValue::Records(records) => Some(records),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Scalar(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Scalar(value)
    }
}

impl From<Vec<SubRecord>> for AnswerValue {
    fn from(records: Vec<SubRecord>) -> Self {
        AnswerValue::Records(records)
    }
}

/// One record of a repeatable group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRecord {
    /// Identifier unique within the owning list
    pub id: String,

    /// Field values, stored next to `id` when serialized
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl SubRecord {
    /// Creates an empty record with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Adds a field value, builder style.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the value of a field if it has been answered.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
