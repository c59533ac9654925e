//! Key-value repository contract with SQLite and in-memory implementations.
//!
//! # Responsibility
//! - Provide the local-storage contract (`get/set/remove` by string key).
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Keys are non-blank; blank keys are rejected before touching storage.
//! - `set_item` is an upsert: the latest write for a key wins.
//! - `remove_item` on an absent key is a no-op.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for key-value persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidKey(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "invalid storage key `{key}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable string-keyed document storage.
pub trait KvRepository {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> RepoResult<()>;
    fn remove_item(&self, key: &str) -> RepoResult<()>;
}

impl<T: KvRepository + ?Sized> KvRepository for &T {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> RepoResult<()> {
        (**self).remove_item(key)
    }
}

/// SQLite-backed key-value repository over the `kv_store` table.
pub struct SqliteKvRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Lists stored keys in ascending order.
    pub fn keys(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv_store ORDER BY key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl KvRepository for SqliteKvRepository<'_> {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>> {
        ensure_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> RepoResult<()> {
        ensure_key(key)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> RepoResult<()> {
        ensure_key(key)?;
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// Process-local repository; contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryKvRepository {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryKvRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KvRepository for MemoryKvRepository {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>> {
        ensure_key(key)?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> RepoResult<()> {
        ensure_key(key)?;
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> RepoResult<()> {
        ensure_key(key)?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

fn ensure_key(key: &str) -> RepoResult<()> {
    if key.trim().is_empty() {
        return Err(RepoError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{KvRepository, MemoryKvRepository, RepoError};

    #[test]
    fn memory_repo_upserts_and_removes() {
        let repo = MemoryKvRepository::new();
        assert!(repo.is_empty());

        repo.set_item("a", "1").unwrap();
        repo.set_item("a", "2").unwrap();
        assert_eq!(repo.get_item("a").unwrap().as_deref(), Some("2"));
        assert_eq!(repo.len(), 1);

        repo.remove_item("a").unwrap();
        repo.remove_item("a").unwrap();
        assert_eq!(repo.get_item("a").unwrap(), None);
    }

    #[test]
    fn blank_keys_are_rejected() {
        let repo = MemoryKvRepository::new();
        let err = repo.set_item("  ", "value").unwrap_err();
        assert!(matches!(err, RepoError::InvalidKey(_)));
    }
}
