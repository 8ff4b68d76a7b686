use axum::{
    Router,
    routing::{get, patch},
};
use std::sync::Arc;

use crate::handlers::{create_message, delete_message, list_messages, update_message};
use crate::store::MessageStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MessageStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }
}

pub fn message_router(state: AppState) -> Router {
    Router::new()
        .route("/messages", get(list_messages).post(create_message))
        .route(
            "/messages/{id}",
            patch(update_message).delete(delete_message),
        )
        .with_state(state)
}
