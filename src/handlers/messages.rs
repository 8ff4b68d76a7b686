//! Handlers for the `/messages` resource.
//!
//! Update and delete share one flow: parse the path id, confirm the row
//! exists, then validate and mutate. The existence check runs before the body
//! is looked at, so a malformed body for an unknown id is a 404.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::middleware::{BodyRejection, MessageBody};
use crate::router::AppState;
use crate::types::{Envelope, Message, MessageId};

/// GET /messages
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = state.store.find_all().await.map_err(ApiError::ListFailed)?;
    Ok(Json(messages))
}

/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    body: Result<MessageBody, BodyRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let MessageBody(payload) = body.map_err(|e| {
        debug!(error = %e, "create body rejected");
        ApiError::MalformedCreate
    })?;

    if !payload.has_text() {
        return Err(ApiError::EmptyCreate);
    }

    let id = state
        .store
        .insert(&payload.text)
        .await
        .map_err(ApiError::CreateFailed)?;

    info!(id, "message created");
    Ok(Json(Envelope::success("Message was successfully created")))
}

/// PATCH /messages/{id}
pub async fn update_message(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<MessageBody, BodyRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let id = id_from_path(path)?;

    state
        .store
        .find_by_id(id)
        .await
        .map_err(ApiError::from_lookup)?;

    let MessageBody(payload) = body.map_err(|e| {
        debug!(id, error = %e, "update body rejected");
        ApiError::MalformedUpdate
    })?;

    if !payload.has_text() {
        return Err(ApiError::EmptyUpdate);
    }

    state
        .store
        .update_text(id, &payload.text)
        .await
        .map_err(ApiError::UpdateFailed)?;

    info!(id, "message updated");
    Ok(Json(Envelope::success("Message was updated")))
}

/// DELETE /messages/{id}
pub async fn delete_message(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let id = id_from_path(path)?;

    state
        .store
        .find_by_id(id)
        .await
        .map_err(ApiError::from_lookup)?;

    state
        .store
        .delete_by_id(id)
        .await
        .map_err(ApiError::DeleteFailed)?;

    info!(id, "message deleted");
    Ok(Json(Envelope::success("Message deleted")))
}

/// Parse a path id as a signed decimal integer.
pub fn parse_id(raw: &str) -> Result<MessageId, ApiError> {
    raw.parse::<MessageId>().map_err(|_| ApiError::BadId)
}

fn id_from_path(path: Result<Path<String>, PathRejection>) -> Result<MessageId, ApiError> {
    let Path(raw) = path.map_err(|e| {
        debug!(error = %e, "path rejected");
        ApiError::BadId
    })?;
    parse_id(&raw)
}
