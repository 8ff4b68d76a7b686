use axum::{Json, http::StatusCode, response::IntoResponse};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::{debug, error};

use crate::types::Envelope;

/// Failures reported by a [`MessageStore`](crate::store::MessageStore).
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),
}

/// Terminal outcome of a failed request.
///
/// The `Display` text of each variant is the exact message sent to the client;
/// store details travel as the source and only reach the logs.
#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("Could not find the messages")]
    ListFailed(#[source] StoreError),

    #[error("Could not add the message")]
    MalformedCreate,

    #[error("Could not add empty message")]
    EmptyCreate,

    #[error("Could not create the message")]
    CreateFailed(#[source] StoreError),

    #[error("Bad ID")]
    BadId,

    #[error("Message was not found")]
    NotFound,

    #[error("Server error")]
    LookupFailed(#[source] StoreError),

    #[error("Invalid input")]
    MalformedUpdate,

    #[error("Text cannot be empty")]
    EmptyUpdate,

    #[error("Could not update the message")]
    UpdateFailed(#[source] StoreError),

    #[error("Could not delete the message")]
    DeleteFailed(#[source] StoreError),
}

impl ApiError {
    /// Maps a failed lookup: absence is a 404, anything else a 500.
    pub fn from_lookup(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            other => ApiError::LookupFailed(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedCreate
            | ApiError::EmptyCreate
            | ApiError::BadId
            | ApiError::MalformedUpdate
            | ApiError::EmptyUpdate => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::ListFailed(_)
            | ApiError::CreateFailed(_)
            | ApiError::LookupFailed(_)
            | ApiError::UpdateFailed(_)
            | ApiError::DeleteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn store_source(&self) -> Option<&StoreError> {
        match self {
            ApiError::ListFailed(e)
            | ApiError::CreateFailed(e)
            | ApiError::LookupFailed(e)
            | ApiError::UpdateFailed(e)
            | ApiError::DeleteFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        match self.store_source() {
            Some(source) => error!(status = status.as_u16(), error = %source, "{}", self),
            None => debug!(status = status.as_u16(), "{}", self),
        }
        (status, Json(Envelope::error(self.to_string()))).into_response()
    }
}
