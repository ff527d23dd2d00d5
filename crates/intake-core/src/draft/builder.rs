//! Builder for creating and configuring [`Drafts`] instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::{Drafts, SqliteDraftStore};
use crate::error::{IntakeError, Result};

/// Builder for creating and configuring [`Drafts`] instances.
#[derive(Debug, Clone, Default)]
pub struct DraftsBuilder {
    database_path: Option<PathBuf>,
}

impl DraftsBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/intake/drafts.db` or `~/.local/share/intake/drafts.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured draft service, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::FileSystem` if the database directory cannot be
    /// created and `IntakeError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Drafts> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| IntakeError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || SqliteDraftStore::open(&db_path_clone).map(drop))
            .await
            .map_err(IntakeError::join)??;

        Ok(Drafts::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("intake")
            .place_data_file("drafts.db")
            .map_err(|e| IntakeError::XdgDirectory(e.to_string()))
    }
}
