//! SQLite-backed translation store.
//!
//! The connection lives behind an `Arc<Mutex<_>>` and every operation runs
//! inside `tokio::task::spawn_blocking`, so store I/O never blocks the
//! async runtime.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use super::TranslationStore;
use crate::config::Lang;
use crate::error::{Error, Result};
use crate::model::{NewTranslation, TranslationRecord};

/// Current schema version, stored in SQLite's `user_version` pragma
const SCHEMA_VERSION: i32 = 1;

/// SQLite implementation of [`TranslationStore`]
#[derive(Clone)]
pub struct SqliteStore {
    /// Path to the database file (":memory:" for test stores)
    db_path: PathBuf,
    /// Thread-safe connection wrapped in Arc<Mutex>
    connection: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) a database at the given path and initialize the schema.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        info!("Opening database at {}", db_path.display());

        let conn = Connection::open(&db_path)?;
        initialize_schema(&conn)?;

        Ok(Self {
            db_path,
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        debug!("Creating in-memory database");

        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;

        Ok(Self {
            db_path: PathBuf::from(":memory:"),
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Run a store operation on the blocking thread pool.
    async fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let connection = Arc::clone(&self.connection);

        tokio::task::spawn_blocking(move || {
            let conn = connection
                .lock()
                .map_err(|e| Error::Store(format!("failed to acquire database lock: {e}")))?;

            f(&conn)
        })
        .await
        .map_err(|e| Error::Store(format!("database task panicked: {e}")))?
    }
}

/// Initialize the database schema, migrating if the on-disk version is older.
fn initialize_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 =
        conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version >= SCHEMA_VERSION {
        debug!("Database schema is up to date (v{})", current_version);
        return Ok(());
    }

    info!("Initializing database schema v{}", SCHEMA_VERSION);

    // WAL mode for better concurrency and crash recovery
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS translations (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            original_text   TEXT NOT NULL,
            translated_text TEXT NOT NULL,
            from_language   TEXT NOT NULL,
            to_language     TEXT NOT NULL
        );
        ",
    )?;

    conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;

    Ok(())
}

fn parse_record_row(row: &Row<'_>) -> rusqlite::Result<TranslationRecord> {
    Ok(TranslationRecord {
        id: row.get(0)?,
        original_text: row.get(1)?,
        translated_text: row.get(2)?,
        from_language: Lang::new(row.get::<_, String>(3)?),
        to_language: Lang::new(row.get::<_, String>(4)?),
    })
}

const SELECT_FIELDS: &str =
    "SELECT id, original_text, translated_text, from_language, to_language FROM translations";

#[async_trait]
impl TranslationStore for SqliteStore {
    async fn create(&self, new: NewTranslation) -> Result<TranslationRecord> {
        self.with_conn(move |conn| {
            conn.execute(
                r"
                INSERT INTO translations (original_text, translated_text, from_language, to_language)
                VALUES (?1, ?2, ?3, ?4)
                ",
                params![
                    new.original_text,
                    new.translated_text,
                    new.from_language.as_str(),
                    new.to_language.as_str(),
                ],
            )?;

            let id = conn.last_insert_rowid();
            debug!("Created translation {}", id);
            Ok(new.with_id(id))
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TranslationRecord>> {
        self.with_conn(move |conn| {
            let record = conn
                .query_row(
                    &format!("{SELECT_FIELDS} WHERE id = ?1"),
                    [id],
                    parse_record_row,
                )
                .optional()?;

            Ok(record)
        })
        .await
    }

    async fn find_all(&self) -> Result<Vec<TranslationRecord>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_FIELDS} ORDER BY id"))?;
            let records = stmt
                .query_map([], parse_record_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            Ok(records)
        })
        .await
    }

    async fn update(&self, record: &TranslationRecord) -> Result<TranslationRecord> {
        let record = record.clone();

        self.with_conn(move |conn| {
            let rows = conn.execute(
                r"
                UPDATE translations
                SET original_text = ?1, translated_text = ?2, from_language = ?3, to_language = ?4
                WHERE id = ?5
                ",
                params![
                    record.original_text,
                    record.translated_text,
                    record.from_language.as_str(),
                    record.to_language.as_str(),
                    record.id,
                ],
            )?;

            if rows == 0 {
                return Err(Error::NotFound { id: record.id });
            }

            debug!("Updated translation {}", record.id);
            Ok(record)
        })
        .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.with_conn(move |conn| {
            let rows = conn.execute("DELETE FROM translations WHERE id = ?1", [id])?;

            if rows == 0 {
                return Err(Error::NotFound { id });
            }

            debug!("Deleted translation {}", id);
            Ok(())
        })
        .await
    }
}
