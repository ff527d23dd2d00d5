//! Async draft administration over the SQLite store.

use std::path::{Path, PathBuf};

use tokio::task;

use super::{DraftStore, SqliteDraftStore};
use crate::{
    catalog::StepCatalog,
    display::DraftSummaries,
    error::{IntakeError, Result},
    form::IntakeForm,
    models::{draft_key, DraftRecord},
};

/// Handle on a draft database.
///
/// Each call opens its own connection on tokio's blocking pool, so the handle
/// is cheap to clone and share.
#[derive(Debug, Clone)]
pub struct Drafts {
    db_path: PathBuf,
}

impl Drafts {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the underlying database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    async fn with_store<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteDraftStore) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut store = SqliteDraftStore::open(&db_path)?;
            f(&mut store)
        })
        .await
        .map_err(IntakeError::join)?
    }

    /// Lists all stored drafts, most recent first.
    pub async fn list_drafts(&self) -> Result<DraftSummaries> {
        let drafts = self.with_store(|store| store.list_drafts()).await?;
        Ok(DraftSummaries(drafts))
    }

    /// Reads the stored draft of a form.
    pub async fn get_draft(&self, form_id: &str) -> Result<Option<DraftRecord>> {
        let form_id = form_id.to_string();
        self.with_store(move |store| store.get_draft(&form_id)).await
    }

    /// Deletes the stored draft of a form. Returns whether one existed.
    pub async fn delete_draft(&self, form_id: &str) -> Result<bool> {
        let key = draft_key(form_id);
        self.with_store(move |store| store.remove(&key)).await
    }

    /// Opens a form session backed by this database, restoring its draft.
    pub async fn open_form(
        &self,
        form_id: &str,
        catalog: StepCatalog,
    ) -> Result<IntakeForm<SqliteDraftStore>> {
        let db_path = self.db_path.clone();
        let form_id = form_id.to_string();
        task::spawn_blocking(move || {
            let store = SqliteDraftStore::open(&db_path)?;
            IntakeForm::open(form_id, catalog, store)
        })
        .await
        .map_err(IntakeError::join)?
    }
}
