//! Repository Module
//!
//! Thin CRUD access to SurrealDB collections. Repositories own no state
//! beyond a handle to the shared connection.

pub mod menu_item;
pub mod order;
pub mod review;
pub mod reward_account;
pub mod settings;

pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use review::ReviewRepository;
pub use reward_account::RewardAccountRepository;
pub use settings::SettingsRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository holding the shared database handle
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

/// Build a record pointer for `table`.
pub fn make_thing(table: &str, key: &str) -> Thing {
    Thing::from((table.to_string(), key.to_string()))
}

/// Parse an externally supplied record id into a bare key.
///
/// Accepts either `"table:key"` (the prefix must match `table`) or a bare
/// key. This is a format check only; existence is checked by the lookup
/// that follows. Malformed ids are a validation error, mirroring the
/// opaque-id parser the API contract requires.
pub fn parse_record_key(table: &str, raw: &str) -> RepoResult<String> {
    let key = match raw.split_once(':') {
        Some((prefix, key)) if prefix == table => key,
        Some(_) => {
            return Err(RepoError::Validation(format!("Invalid identifier: {raw}")));
        }
        None => raw,
    };
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(RepoError::Validation(format!("Invalid identifier: {raw}")));
    }
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_bare_and_prefixed_keys() {
        assert_eq!(parse_record_key("menu_item", "abc123").unwrap(), "abc123");
        assert_eq!(
            parse_record_key("menu_item", "menu_item:abc123").unwrap(),
            "abc123"
        );
    }

    #[test]
    fn parse_rejects_wrong_table_prefix() {
        assert!(parse_record_key("menu_item", "orders:abc123").is_err());
    }

    #[test]
    fn parse_rejects_malformed_keys() {
        assert!(parse_record_key("menu_item", "").is_err());
        assert!(parse_record_key("menu_item", "menu_item:").is_err());
        assert!(parse_record_key("menu_item", "abc 123").is_err());
        assert!(parse_record_key("menu_item", "abc;DROP").is_err());
    }
}
