use pm_core::Project;
use pm_db::ProjectRepository;
use pm_transfer::{AttachmentStore, Exporter, Importer};

use sqlx::SqlitePool;
use tempfile::TempDir;

pub const EXPORTED_BY: &str = "alice";
pub const LARGE_LIMIT: u64 = 10 * 1024 * 1024;

/// In-memory store plus a temporary attachment area.
pub struct TestEnv {
    pub pool: SqlitePool,
    pub files: TempDir,
}

impl TestEnv {
    pub async fn new() -> Self {
        let pool = pm_db::open_in_memory()
            .await
            .expect("Failed to open in-memory store");
        let files = TempDir::new().expect("Failed to create temp dir");
        Self { pool, files }
    }

    pub fn store(&self) -> AttachmentStore {
        AttachmentStore::new(self.files.path())
    }

    pub fn exporter(&self) -> Exporter {
        self.exporter_with_limit(LARGE_LIMIT)
    }

    pub fn exporter_with_limit(&self, limit: u64) -> Exporter {
        Exporter::new(self.pool.clone(), self.store(), limit, EXPORTED_BY)
    }

    pub fn importer(&self) -> Importer {
        Importer::new(self.pool.clone(), self.store())
    }

    pub async fn project(&self, name: &str) -> Project {
        let project = Project::new(name.to_string());
        ProjectRepository::create(&self.pool, &project)
            .await
            .expect("Failed to create test project");
        project
    }

    /// Make every review finding insert fail.
    pub async fn break_review_findings(&self) {
        sqlx::query(
            r#"
                CREATE TRIGGER fail_review_findings BEFORE INSERT ON review_findings
                BEGIN
                    SELECT RAISE(ABORT, 'forced failure');
                END;
            "#,
        )
        .execute(&self.pool)
        .await
        .expect("Failed to create trigger");
    }
}
