//! Database Module
//!
//! Embedded SurrealDB connection plus models and repositories.
//! All collections live in a single namespace/database pair; the record id
//! assigned by SurrealDB on insert is the outward-facing document id.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

/// Open the on-disk database at `path`, scoped to `name` (namespace and
/// database share the same name).
pub async fn connect(path: &str, name: &str) -> Result<Surreal<Db>, AppError> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::database(format!("Failed to create data dir: {e}")))?;
    }

    let db = Surreal::new::<RocksDb>(path)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
    db.use_ns(name)
        .use_db(name)
        .await
        .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

    tracing::info!(path, name, "Database connection established");
    Ok(db)
}

/// Open a throwaway in-memory database. Used by the test suite.
pub async fn connect_memory() -> Result<Surreal<Db>, AppError> {
    let db = Surreal::new::<Mem>(())
        .await
        .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
    db.use_ns("test")
        .use_db("test")
        .await
        .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_creates_missing_data_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("test.db");
        let path = path.to_str().expect("utf-8 path");

        let db = connect(path, "connect_test").await.expect("open");
        db.query("CREATE marker:one SET value = 42")
            .await
            .expect("write");

        let mut result = db
            .query("SELECT VALUE value FROM marker:one")
            .await
            .expect("read");
        let values: Vec<i64> = result.take(0).expect("take");
        assert_eq!(values, vec![42]);
    }
}
