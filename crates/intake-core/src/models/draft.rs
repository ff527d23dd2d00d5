//! Stored draft records as seen by draft administration.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Answers;
use crate::error::Result;

/// Prefix of every draft key.
pub const DRAFT_KEY_PREFIX: &str = "intake-form-";

/// Returns the store key for a form's draft.
///
/// ```rust
/// use intake_core::models::draft_key;
///
/// assert_eq!(draft_key("family-law-intake"), "intake-form-family-law-intake");
/// ```
pub fn draft_key(form_id: &str) -> String {
    format!("{DRAFT_KEY_PREFIX}{form_id}")
}

/// Recovers the form identifier from a draft key, if it carries the prefix.
pub fn form_id_from_key(key: &str) -> Option<&str> {
    key.strip_prefix(DRAFT_KEY_PREFIX)
}

/// A persisted draft with its raw blob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftRecord {
    /// Form identifier (slug) the draft belongs to
    pub form_id: String,

    /// Serialized answers exactly as stored
    pub blob: String,

    /// Timestamp of the last save (UTC)
    pub saved_at: Timestamp,
}

impl DraftRecord {
    /// Parses the stored blob.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::Serialization` if the blob is not a valid answer
    /// set.
    pub fn answers(&self) -> Result<Answers> {
        Ok(serde_json::from_str(&self.blob)?)
    }
}

/// Listing entry for a stored draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftSummary {
    /// Form identifier (slug) the draft belongs to
    pub form_id: String,

    /// Timestamp of the last save (UTC)
    pub saved_at: Timestamp,

    /// Size of the stored blob in bytes
    pub size: u64,
}
