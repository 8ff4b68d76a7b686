use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

use crate::error::StoreError;
use crate::store::MessageStore;
use crate::store::schema::SQLITE_INIT;
use crate::types::{Message, MessageId};

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct SqliteMessageStore {
    pool: SqlitePool,
}

impl SqliteMessageStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `database_url`, creating the database file if missing.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl MessageStore for SqliteMessageStore {
    async fn find_all(&self) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query_as::<_, Message>("SELECT id, text FROM messages ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: MessageId) -> Result<Message, StoreError> {
        sqlx::query_as::<_, Message>("SELECT id, text FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, text: &str) -> Result<MessageId, StoreError> {
        let done = sqlx::query("INSERT INTO messages (text) VALUES (?)")
            .bind(text)
            .execute(&self.pool)
            .await?;
        Ok(done.last_insert_rowid())
    }

    async fn update_text(&self, id: MessageId, text: &str) -> Result<(), StoreError> {
        sqlx::query("UPDATE messages SET text = ? WHERE id = ?")
            .bind(text)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: MessageId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
