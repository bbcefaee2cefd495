use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use crate::{Item, ItemId, Result, StoreError};

/// SQLite-backed item store.
///
/// Holds a connection pool shared across request handlers; the pool
/// replaces the open-per-request discipline a single-threaded server
/// could get away with.
#[derive(Clone)]
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    /// Opens (or creates) the database named by `database_url` and ensures
    /// the `items` table exists.
    ///
    /// Accepts `sqlite:///<path>` connection strings or bare filesystem
    /// paths. The containing directory is created if absent.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let path = resolve_database_path(database_url);

        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS items (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)",
        )
        .execute(&pool)
        .await?;

        tracing::debug!(path, "item store ready");
        Ok(Self { pool })
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs a trivial connectivity check.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Returns all items, newest first.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let rows = sqlx::query("SELECT id, name FROM items ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(row_to_item).collect()
    }

    /// Inserts an item and returns its freshly assigned id.
    pub async fn insert_item(&self, name: &str) -> Result<ItemId> {
        let result = sqlx::query("INSERT INTO items (name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(ItemId::new(result.last_insert_rowid()))
    }
}

fn row_to_item(row: SqliteRow) -> Result<Item> {
    Ok(Item {
        id: ItemId::new(row.try_get("id")?),
        name: row.try_get("name")?,
    })
}

/// Resolves a `sqlite:///<path>` connection string to a filesystem path.
///
/// Anything without the scheme prefix is treated as a path directly.
fn resolve_database_path(url: &str) -> &str {
    if url.starts_with("sqlite:///") {
        &url["sqlite://".len()..]
    } else {
        url
    }
}
