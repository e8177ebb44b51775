// src/message.rs
use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/chat/league`. Every field is optional, and a field may
/// hold any JSON value; callers are never rejected for a missing or
/// oddly-typed field. `context` is accepted but unused.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: Value,
    #[serde(default)]
    pub league_id: Value,
    #[serde(default)]
    pub context: Value,
}

impl ChatRequest {
    /// Parse a raw request body. An absent body counts as an empty object,
    /// leaving every field at its default. Anything else must be a JSON
    /// object.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }

    pub fn question_text(&self) -> Cow<'_, str> {
        field_text(&self.question)
    }

    pub fn league_id_text(&self) -> Cow<'_, str> {
        field_text(&self.league_id)
    }
}

// Strings substitute verbatim, null (and absent fields) as the empty
// string, any other JSON value as its compact JSON text.
fn field_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub suggestions: Vec<String>,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: String,
}
