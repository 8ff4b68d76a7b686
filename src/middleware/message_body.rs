use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error as ThisError;

use crate::types::{Envelope, MessagePayload, PayloadError};

const JSON_MIME: &str = "application/json";

/// Message body bound the way create and update expect it.
///
/// An empty body, or a JSON `null`, binds as a payload with empty text so the
/// handlers report it as an empty message rather than as malformed input.
/// Only the first JSON value of the body is decoded; anything after it is
/// ignored.
#[derive(Debug)]
pub struct MessageBody(pub MessagePayload);

#[derive(Debug, ThisError)]
pub enum BodyRejection {
    #[error("failed to read request body: {0}")]
    Read(#[from] BytesRejection),

    #[error("unsupported content type: {0}")]
    UnsupportedMediaType(String),

    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("body holds no JSON value")]
    NoValue,

    #[error("body does not bind to a message: {0}")]
    Payload(#[from] PayloadError),
}

// The message handlers take `Result<MessageBody, BodyRejection>` and answer
// with their own messages; this only serves other extractor users.
impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(Envelope::error("Invalid request body")),
        )
            .into_response()
    }
}

impl<S> FromRequest<S> for MessageBody
where
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = Bytes::from_request(req, state).await?;
        bind_payload(content_type.as_deref(), &bytes).map(MessageBody)
    }
}

pub fn bind_payload(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<MessagePayload, BodyRejection> {
    if body.is_empty() {
        return Ok(MessagePayload::default());
    }
    match content_type {
        Some(ct) if ct.starts_with(JSON_MIME) => {}
        other => {
            return Err(BodyRejection::UnsupportedMediaType(
                other.unwrap_or("<none>").to_string(),
            ));
        }
    }
    let document = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .ok_or(BodyRejection::NoValue)??;
    Ok(MessagePayload::from_value(document)?)
}
