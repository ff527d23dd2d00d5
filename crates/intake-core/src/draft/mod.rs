//! Draft persistence for in-progress forms.
//!
//! The form controller only ever talks to a [`DraftStore`], a synchronous
//! key/value capability holding serialized answer sets. Two stores ship with
//! the crate:
//!
//! - [`MemoryDraftStore`]: a `HashMap`, for tests and embedding
//! - [`SqliteDraftStore`]: a single SQLite table, used by the CLI
//!
//! [`Drafts`] wraps the SQLite store in an async API for administration
//! (listing, inspecting and clearing drafts), running each call on tokio's
//! blocking pool.
//!
//! Drafts are keyed by [`draft_key`](crate::models::draft_key), i.e.
//! `intake-form-<slug>`, and hold the answers as JSON.

use log::{debug, info, warn};

use crate::{
    error::Result,
    models::{draft_key, Answers},
};

pub mod builder;
pub mod memory;
pub mod service;
pub mod sqlite;

pub use builder::DraftsBuilder;
pub use memory::MemoryDraftStore;
pub use service::Drafts;
pub use sqlite::SqliteDraftStore;

/// Key/value storage for draft blobs.
pub trait DraftStore {
    /// Reads the blob stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `blob` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, blob: String) -> Result<()>;

    /// Deletes the blob under `key`. Returns whether one existed.
    fn remove(&mut self, key: &str) -> Result<bool>;
}

impl<T: DraftStore + ?Sized> DraftStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, blob: String) -> Result<()> {
        (**self).set(key, blob)
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        (**self).remove(key)
    }
}

impl<T: DraftStore + ?Sized> DraftStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, blob: String) -> Result<()> {
        (**self).set(key, blob)
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        (**self).remove(key)
    }
}

/// Serializes `answers` and stores them as the draft for `form_id`.
///
/// # Errors
///
/// Propagates serialization and store errors.
pub fn save_answers<S: DraftStore + ?Sized>(
    store: &mut S,
    form_id: &str,
    answers: &Answers,
) -> Result<()> {
    let blob = serde_json::to_string(answers)?;
    let key = draft_key(form_id);
    debug!("Saving draft '{key}' ({} bytes)", blob.len());
    store.set(&key, blob)
}

/// Loads the draft for `form_id`.
///
/// Never fails: a missing draft, an unreadable store and a malformed blob all
/// yield `None`, the latter two with a warning.
pub fn load_answers<S: DraftStore + ?Sized>(store: &S, form_id: &str) -> Option<Answers> {
    let key = draft_key(form_id);
    let blob = match store.get(&key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return None,
        Err(e) => {
            warn!("Could not read draft '{key}', starting fresh: {e}");
            return None;
        }
    };

    match serde_json::from_str::<Answers>(&blob) {
        Ok(answers) => {
            info!("Restored draft '{key}' with {} answers", answers.len());
            Some(answers)
        }
        Err(e) => {
            warn!("Ignoring corrupt draft '{key}': {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::IntakeError,
        models::{AnswerValue, SubRecord},
    };

    struct FailingStore;

    impl DraftStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(IntakeError::Configuration {
                message: "store offline".to_string(),
            })
        }

        fn set(&mut self, _key: &str, _blob: String) -> Result<()> {
            Err(IntakeError::Configuration {
                message: "store offline".to_string(),
            })
        }

        fn remove(&mut self, _key: &str) -> Result<bool> {
            Ok(false)
        }
    }

    #[test]
    fn test_round_trip_with_records() {
        let mut answers = Answers::new();
        answers.insert("full-name".to_string(), AnswerValue::from("Jane Doe"));
        answers.insert(
            "children".to_string(),
            AnswerValue::from(vec![
                SubRecord::new("r1").with_field("name", "Sam"),
                SubRecord::new("r2"),
            ]),
        );

        let mut store = MemoryDraftStore::new();
        save_answers(&mut store, "family-law-intake", &answers).unwrap();
        assert_eq!(load_answers(&store, "family-law-intake"), Some(answers));
    }

    #[test]
    fn test_drafts_are_keyed_by_form() {
        let mut store = MemoryDraftStore::new();
        save_answers(&mut store, "a", &Answers::new()).unwrap();
        assert!(store.get("intake-form-a").unwrap().is_some());
        assert_eq!(load_answers(&store, "b"), None);
    }

    #[test]
    fn test_corrupt_blob_loads_as_none() {
        let mut store = MemoryDraftStore::new();
        store
            .set(&draft_key("family-law-intake"), "{\"full-name\": ".to_string())
            .unwrap();
        assert_eq!(load_answers(&store, "family-law-intake"), None);
    }

    #[test]
    fn test_unreadable_store_loads_as_none() {
        assert_eq!(load_answers(&FailingStore, "family-law-intake"), None);
    }

    #[test]
    fn test_save_propagates_store_errors() {
        let err = save_answers(&mut FailingStore, "x", &Answers::new()).unwrap_err();
        assert!(err.to_string().contains("store offline"));
    }
}
