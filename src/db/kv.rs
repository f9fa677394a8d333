//! SQLite adapter for the key-value storage port.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::storage::KeyValueStore;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::path::Path;

/// Key-value pairs of one `scope` (app group) inside a SQLite file. The CLI
/// and the widget open the same file and scope.
pub struct SqliteStore {
    pool: DbPool,
    scope: String,
}

impl SqliteStore {
    /// Open (creating if needed) the database and bring its schema up to date.
    pub fn open<P: AsRef<Path>>(path: P, scope: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool, scope)
    }

    /// Open `path` for reading only: no file is created, no migration runs.
    /// A missing file or a database without the `kv` table reads as empty.
    pub fn open_read_only<P: AsRef<Path>>(path: P, scope: &str) -> AppResult<ReadOnlyStore> {
        let path = path.as_ref();
        let pool = if path.exists() {
            let pool = DbPool::open_read_only(path)?;
            let has_kv: bool = pool.conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv')",
                [],
                |row| row.get(0),
            )?;
            has_kv.then_some(pool)
        } else {
            None
        };

        if pool.is_none() {
            tracing::debug!(path = %path.display(), "no key-value data yet, reading defaults");
        }

        Ok(ReadOnlyStore {
            pool,
            scope: scope.to_string(),
        })
    }

    pub fn in_memory(scope: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?, scope)
    }

    fn from_pool(pool: DbPool, scope: &str) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            scope: scope.to_string(),
        })
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }

    /// Keys present in this scope, sorted.
    pub fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT key FROM kv WHERE scope = ?1 ORDER BY key ASC")?;
        let rows = stmt.query_map([&self.scope], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

fn select_value(conn: &rusqlite::Connection, scope: &str, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM kv WHERE scope = ?1 AND key = ?2")?;
    let value = stmt
        .query_row(params![scope, key], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(value)
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        select_value(&self.pool.conn, &self.scope, key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut stmt = self.pool.conn.prepare_cached(
            "INSERT INTO kv (scope, key, value, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(scope, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
        )?;
        stmt.execute(params![self.scope, key, value, Local::now().to_rfc3339()])?;
        tracing::debug!(scope = %self.scope, key, "stored value");
        Ok(())
    }
}

/// Reader over the shared store for consumers that must never write, such
/// as the widget. `pool` is `None` until the main app has created the data.
pub struct ReadOnlyStore {
    pool: Option<DbPool>,
    scope: String,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        match &self.pool {
            Some(pool) => select_value(&pool.conn, &self.scope, key),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::ReadOnly(key.to_string()))
    }
}
