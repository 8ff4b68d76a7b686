use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use thiserror::Error as ThisError;

pub type MessageId = i64;

/// A persisted message as stored and as returned by `GET /messages`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
}

/// Body accepted by create and update.
///
/// A client-supplied `id` must still be an integer to bind, but its value is
/// never used: the store assigns ids on insert and the path names the target
/// on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagePayload {
    pub id: Option<MessageId>,
    pub text: String,
}

#[derive(Debug, ThisError)]
pub enum PayloadError {
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("field `{field}` must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

impl MessagePayload {
    /// Bind a decoded JSON document.
    ///
    /// Only an object or `null` binds. Field names match case-insensitively,
    /// unknown fields are ignored and a `null` field keeps its default.
    pub fn from_value(document: Value) -> Result<Self, PayloadError> {
        let fields = match document {
            Value::Null => return Ok(Self::default()),
            Value::Object(fields) => fields,
            other => return Err(PayloadError::NotAnObject(json_kind(&other))),
        };

        let mut payload = Self::default();
        for (key, field) in fields {
            if key.eq_ignore_ascii_case("text") {
                match field {
                    Value::Null => {}
                    Value::String(text) => payload.text = text,
                    _ => {
                        return Err(PayloadError::InvalidField {
                            field: "text",
                            expected: "a string",
                        });
                    }
                }
            } else if key.eq_ignore_ascii_case("id") {
                let invalid = PayloadError::InvalidField {
                    field: "id",
                    expected: "an integer",
                };
                match field {
                    Value::Null => {}
                    Value::Number(n) => payload.id = Some(n.as_i64().ok_or(invalid)?),
                    _ => return Err(invalid),
                }
            }
        }
        Ok(payload)
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
