//! SQLite-backed key/value store.
//!
//! # Invariants
//! - Construction fails unless the connection is migrated to the latest
//!   schema version.
//! - Writes upsert by key and refresh `updated_at`.

use crate::db::require_current_schema;
use crate::store::{PersistenceStore, StoreResult};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

/// Persistence store over the `kv_store` table.
pub struct SqlitePersistence<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersistence<'conn> {
    /// Wraps a connection opened through `open_db`/`open_db_in_memory`.
    ///
    /// # Errors
    /// - `DbError::SchemaNotReady` when migrations have not been applied.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        require_current_schema(conn)?;
        Ok(Self { conn })
    }

    /// Lists stored keys in ascending order.
    pub fn keys(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv_store ORDER BY key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl PersistenceStore for SqlitePersistence<'_> {
    fn save(&mut self, key: &str, json: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, json],
        )?;
        debug!(
            "event=kv_save module=store status=ok key={key} bytes={}",
            json.len()
        );
        Ok(())
    }

    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }
}
