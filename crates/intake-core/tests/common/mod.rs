use intake_core::{Drafts, DraftsBuilder};
use tempfile::TempDir;

/// Helper function to create a draft service on a temporary database
pub async fn create_test_drafts() -> (TempDir, Drafts) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("drafts.db");
    let drafts = DraftsBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create draft service");
    (temp_dir, drafts)
}
