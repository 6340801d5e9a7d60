//! Shared integration-test harness: a temp-file SQLite database with the
//! embedded migrations applied.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use localmart::db::{DbPool, establish_connection_pool};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub struct TestDb {
    pool: DbPool,
    // Dropped (and deleted) with the harness.
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let database_url = path.to_string_lossy().to_string();

        let pool = establish_connection_pool(&database_url).expect("failed to create pool");
        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
