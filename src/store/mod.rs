//! Persistence for messages.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: sqlx-backed store used in production
//! - `memory.rs`: process-local store, selected with the `memory` database URL

pub mod memory;
pub mod schema;
pub mod sqlite;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::StoreError;
use crate::types::{Message, MessageId};

pub use memory::InMemoryMessageStore;
pub use schema::SQLITE_INIT;
pub use sqlite::{SqliteMessageStore, SqlitePool};

/// Database URL that selects [`InMemoryMessageStore`].
pub const MEMORY_DATABASE_URL: &str = "memory";

/// Storage operations the request handlers depend on.
///
/// `find_by_id` must report an absent row as [`StoreError::NotFound`] so it can
/// be told apart from a storage failure.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Message>, StoreError>;

    async fn find_by_id(&self, id: MessageId) -> Result<Message, StoreError>;

    /// Insert a message with `text` and return the id the store assigned.
    async fn insert(&self, text: &str) -> Result<MessageId, StoreError>;

    /// Overwrite the `text` column of row `id`. Succeeds if the row is gone.
    async fn update_text(&self, id: MessageId, text: &str) -> Result<(), StoreError>;

    /// Delete row `id`. Succeeds if the row is gone.
    async fn delete_by_id(&self, id: MessageId) -> Result<(), StoreError>;
}

/// Open the store named by `database_url`, creating the schema if needed.
pub async fn connect(database_url: &str) -> Result<Arc<dyn MessageStore>, StoreError> {
    if database_url == MEMORY_DATABASE_URL {
        return Ok(Arc::new(InMemoryMessageStore::new()));
    }
    let store = SqliteMessageStore::connect(database_url).await?;
    store.init_schema().await?;
    Ok(Arc::new(store))
}
