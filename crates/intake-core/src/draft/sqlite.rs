//! SQLite-backed draft store.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection, OptionalExtension};

use super::DraftStore;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{draft_key, form_id_from_key, DraftRecord, DraftSummary, DRAFT_KEY_PREFIX},
};

const UPSERT_DRAFT_SQL: &str = "INSERT INTO drafts (key, blob, saved_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET blob = excluded.blob, saved_at = excluded.saved_at";
const SELECT_BLOB_SQL: &str = "SELECT blob FROM drafts WHERE key = ?1";
const SELECT_DRAFT_SQL: &str = "SELECT blob, saved_at FROM drafts WHERE key = ?1";
const DELETE_DRAFT_SQL: &str = "DELETE FROM drafts WHERE key = ?1";
const LIST_DRAFTS_SQL: &str = "SELECT key, saved_at, length(CAST(blob AS BLOB)) FROM drafts \
     WHERE key LIKE ?1 ORDER BY saved_at DESC, key";

/// Draft store persisting blobs in a `drafts` table.
pub struct SqliteDraftStore {
    connection: Connection,
}

impl SqliteDraftStore {
    /// Opens (or creates) the database at `path` and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::Database` if the file cannot be opened or the
    /// schema cannot be applied.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::with_connection(connection)
    }

    /// Creates a store in a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }

    /// Lists stored drafts, most recently saved first.
    pub fn list_drafts(&self) -> Result<Vec<DraftSummary>> {
        let mut stmt = self
            .connection
            .prepare(LIST_DRAFTS_SQL)
            .db_context("Failed to prepare draft listing")?;

        let rows = stmt
            .query_map(params![format!("{DRAFT_KEY_PREFIX}%")], |row| {
                let key: String = row.get(0)?;
                let saved_at = parse_timestamp(row.get(1)?, 1)?;
                let size: i64 = row.get(2)?;
                Ok((key, saved_at, size))
            })
            .db_context("Failed to list drafts")?;

        let mut drafts = Vec::new();
        for row in rows {
            let (key, saved_at, size) = row.db_context("Failed to read draft row")?;
            if let Some(form_id) = form_id_from_key(&key) {
                drafts.push(DraftSummary {
                    form_id: form_id.to_string(),
                    saved_at,
                    size: u64::try_from(size).unwrap_or_default(),
                });
            }
        }
        Ok(drafts)
    }

    /// Reads the full draft record for a form.
    pub fn get_draft(&self, form_id: &str) -> Result<Option<DraftRecord>> {
        self.connection
            .query_row(SELECT_DRAFT_SQL, params![draft_key(form_id)], |row| {
                Ok(DraftRecord {
                    form_id: form_id.to_string(),
                    blob: row.get(0)?,
                    saved_at: parse_timestamp(row.get(1)?, 1)?,
                })
            })
            .optional()
            .db_context("Failed to query draft")
    }
}

fn parse_timestamp(value: String, column: usize) -> rusqlite::Result<Timestamp> {
    value
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

impl DraftStore for SqliteDraftStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_BLOB_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read draft")
    }

    fn set(&mut self, key: &str, blob: String) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_DRAFT_SQL, params![key, blob, now])
            .db_context("Failed to save draft")?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_DRAFT_SQL, params![key])
            .db_context("Failed to delete draft")?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_overwrite() {
        let mut store = SqliteDraftStore::in_memory().unwrap();
        assert_eq!(store.get("intake-form-a").unwrap(), None);

        store.set("intake-form-a", "{}".to_string()).unwrap();
        store
            .set("intake-form-a", r#"{"full-name":"Jane"}"#.to_string())
            .unwrap();

        assert_eq!(
            store.get("intake-form-a").unwrap().as_deref(),
            Some(r#"{"full-name":"Jane"}"#)
        );
        assert_eq!(store.list_drafts().unwrap().len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut store = SqliteDraftStore::in_memory().unwrap();
        store.set("intake-form-a", "{}".to_string()).unwrap();
        assert!(store.remove("intake-form-a").unwrap());
        assert!(!store.remove("intake-form-a").unwrap());
        assert_eq!(store.get("intake-form-a").unwrap(), None);
    }

    #[test]
    fn test_list_ignores_foreign_keys() {
        let mut store = SqliteDraftStore::in_memory().unwrap();
        store.set("intake-form-family-law-intake", "{}".to_string()).unwrap();
        store.set("unrelated", "{}".to_string()).unwrap();

        let drafts = store.list_drafts().unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].form_id, "family-law-intake");
        assert_eq!(drafts[0].size, 2);
    }

    #[test]
    fn test_get_draft_record() {
        let mut store = SqliteDraftStore::in_memory().unwrap();
        store
            .set(&draft_key("family-law-intake"), r#"{"married":"Yes"}"#.to_string())
            .unwrap();

        let record = store.get_draft("family-law-intake").unwrap().unwrap();
        assert_eq!(record.form_id, "family-law-intake");
        assert_eq!(record.answers().unwrap()["married"].as_scalar(), Some("Yes"));
        assert!(store.get_draft("other").unwrap().is_none());
    }
}
