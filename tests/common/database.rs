//! Database test fixtures
//!
//! Every fixture owns a fresh SQLite file inside a temporary directory, so
//! tests never share rows and never need a running PostgreSQL server.

use souvenir::backend::server::config::DatabaseSettings;
use souvenir::backend::Database;
use tempfile::TempDir;

/// Test database fixture
///
/// The directory (and the file inside it) is removed when the fixture is dropped.
pub struct TestDatabase {
    dir: TempDir,
    db: Database,
}

impl TestDatabase {
    /// Create a new database with the schema in place
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let settings = DatabaseSettings::sqlite(sqlite_path(&dir));
        let db = Database::prepare(&settings)
            .await
            .expect("Failed to open test database");
        Self { dir, db }
    }

    /// Get the database handle
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Path of the SQLite file
    pub fn path(&self) -> String {
        sqlite_path(&self.dir)
    }

    /// Settings pointing at this fixture's file
    pub fn settings(&self) -> DatabaseSettings {
        DatabaseSettings::sqlite(self.path())
    }
}

fn sqlite_path(dir: &TempDir) -> String {
    dir.path().join("souvenir_test.db").display().to_string()
}
