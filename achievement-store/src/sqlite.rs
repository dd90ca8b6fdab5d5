use crate::{AchievementStore, CachedAchievementSet, StoreBackend, StoreError};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use steam_client::TitleId;

/// SQLite-backed store; each record is kept as a JSON document.
///
/// The single connection is shared behind a mutex and every statement runs
/// on the blocking thread pool.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens or creates the database at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        log::info!("Opened achievement store at {}", path.display());
        Self::init(conn)
    }

    pub fn in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS achievements (
                appid INTEGER PRIMARY KEY,
                document TEXT NOT NULL,
                cached_at TEXT NOT NULL
            );",
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_connection<F, T>(&self, operation: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| StoreError::Poisoned)?;
            operation(&*guard)
        })
        .await?
    }
}

#[async_trait]
impl AchievementStore for SqliteStore {
    async fn find_one(&self, title_id: TitleId) -> Result<Option<CachedAchievementSet>, StoreError> {
        let document = self
            .with_connection(move |conn| {
                let document = conn
                    .query_row(
                        "SELECT document FROM achievements WHERE appid = ?1",
                        params![title_id],
                        |row| row.get::<_, String>(0),
                    )
                    .optional()?;
                Ok(document)
            })
            .await?;

        log::debug!(
            "SQLite store {} for title {}",
            if document.is_some() { "hit" } else { "miss" },
            title_id
        );
        document
            .map(|document| serde_json::from_str(&document))
            .transpose()
            .map_err(StoreError::from)
    }

    async fn insert_one(&self, record: CachedAchievementSet) -> Result<(), StoreError> {
        let title_id = record.title_id();
        let cached_at = record.cached_at().to_rfc3339();
        let document = serde_json::to_string(&record)?;

        self.with_connection(move |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO achievements (appid, document, cached_at) VALUES (?1, ?2, ?3)",
                params![title_id, document, cached_at],
            )?;
            Ok(())
        })
        .await
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let count = self
            .with_connection(|conn| {
                let count =
                    conn.query_row("SELECT COUNT(*) FROM achievements", [], |row| row.get::<_, i64>(0))?;
                Ok(count)
            })
            .await?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Sqlite
    }
}
