use pm_core::Project;
use pm_db::ProjectRepository;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    pm_db::open_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a project so tickets and epics have an owner
pub async fn create_test_project(pool: &SqlitePool, name: &str) -> Project {
    let project = Project::new(name.to_string());
    ProjectRepository::create(pool, &project)
        .await
        .expect("Failed to create test project");
    project
}
