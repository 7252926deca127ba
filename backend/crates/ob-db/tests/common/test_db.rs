use std::path::Path;

use sqlx::SqlitePool;

/// In-memory pool with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    ob_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// File-backed pool for tests that need several real connections
pub async fn create_file_pool(dir: &Path) -> SqlitePool {
    ob_db::connect(&dir.join("users.db"))
        .await
        .expect("Failed to create file pool")
}

/// Row count for a username, straight from SQL
pub async fn count_rows_for(pool: &SqlitePool, username: &str) -> i64 {
    // Use sqlx::query_scalar directly so the assertion does not go through the repository
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
