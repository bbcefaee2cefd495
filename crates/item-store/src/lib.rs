//! SQLite-backed storage for items.
//!
//! The store resolves a `sqlite:///<path>` connection string (or a bare
//! path) to a database file, creates it on first access, and exposes the
//! two operations the service needs: ordered listing and insertion.

pub mod error;
pub mod sqlite;

pub use common::{Item, ItemId};
pub use error::{Result, StoreError};
pub use sqlite::SqliteItemStore;
