//! In-memory message store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::error::StoreError;
use crate::store::MessageStore;
use crate::types::{Message, MessageId};

/// Thread-safe in-memory store. Ids start at 1 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    last_id: MessageId,
    messages: BTreeMap<MessageId, Message>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state
            .read()
            .map(|state| state.messages.len())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// a writer panicked while holding the lock
fn poisoned<T>(_: T) -> StoreError {
    StoreError::Database(sqlx::Error::Protocol(
        "in-memory store lock poisoned".to_string(),
    ))
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn find_all(&self) -> Result<Vec<Message>, StoreError> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.messages.values().cloned().collect())
    }

    async fn find_by_id(&self, id: MessageId) -> Result<Message, StoreError> {
        let state = self.state.read().map_err(poisoned)?;
        state.messages.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn insert(&self, text: &str) -> Result<MessageId, StoreError> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.last_id += 1;
        let id = state.last_id;
        state.messages.insert(
            id,
            Message {
                id,
                text: text.to_string(),
            },
        );
        Ok(id)
    }

    async fn update_text(&self, id: MessageId, text: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(poisoned)?;
        if let Some(message) = state.messages.get_mut(&id) {
            message.text = text.to_string();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: MessageId) -> Result<(), StoreError> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.messages.remove(&id);
        Ok(())
    }
}
