//! Wire types for the chat endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body returned by `POST /lodging/chat` and `POST /cheap/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    /// Rows that matched the filters on the server.
    pub row_count: i64,
    /// Rows handed to the model as samples.
    pub sample_size: i64,
    #[serde(default)]
    pub samples: Vec<serde_json::Value>,
    /// Dataset statistics; only the lodging endpoint sends these.
    #[serde(default)]
    pub stats: Option<serde_json::Value>,
}

/// Body returned by `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Why a chat request failed. Every variant is shown to the user the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("HTTP is only available in the browser")]
    Unavailable,
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Decode(err.to_string())
    }
}
