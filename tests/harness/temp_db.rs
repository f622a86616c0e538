use std::path::{Path, PathBuf};

use riftwatch::adapter::outbound::sqlite::database::connection::{open, DbPool};
use riftwatch::adapter::outbound::sqlite::store::SqliteStore;
use tempfile::TempDir;

/// Temporary SQLite database for integration tests.
///
/// The file lives as long as the value.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(format!("riftwatch-{name}.db"));
        let pool = open(&path.display().to_string()).expect("open sqlite database");
        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> String {
        self.path.display().to_string()
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn store(&self) -> SqliteStore {
        SqliteStore::new(self.pool.clone())
    }
}
