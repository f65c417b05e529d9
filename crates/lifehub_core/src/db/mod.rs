//! SQLite state database.
//!
//! Holds the `kv_store` table that backs `SqlitePersistence`. Connections
//! come from `open_db`/`open_db_in_memory`, which migrate before returning;
//! `require_current_schema` guards connections obtained any other way.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use migrations::{latest_version, schema_version};
pub use open::{open_db, open_db_in_memory};

use rusqlite::Connection;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// File was written by a newer LifeHub build.
    SchemaTooNew { found: u32, supported: u32 },
    /// Connection has not been migrated to the schema stores expect.
    SchemaNotReady { found: u32, required: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "state database uses schema v{found}, this build understands up to v{supported}"
            ),
            Self::SchemaNotReady { found, required } => write!(
                f,
                "state database is at schema v{found}; open it with open_db to reach v{required}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        if let Self::Sqlite(err) = self {
            Some(err)
        } else {
            None
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Fails unless `conn` is migrated to `latest_version()`.
pub fn require_current_schema(conn: &Connection) -> DbResult<()> {
    let found = schema_version(conn)?;
    let required = latest_version();
    if found == required {
        Ok(())
    } else {
        Err(DbError::SchemaNotReady { found, required })
    }
}
