//! The single failure type surfaced by the list service.
//!
//! ERROR HANDLING
//! ==============
//! Views never branch on failure kind; they render the message inline and
//! offer a manual retry. Status, transport and decode failures therefore all
//! collapse into one type that only carries human-readable text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Network/HTTP failure with a display message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    /// Non-2xx response for `action` (e.g. `"Failed to fetch lists"`).
    pub fn status(action: &str, status: u16) -> Self {
        Self { message: format!("{action} (HTTP {status})") }
    }

    /// Request never produced a response.
    pub fn transport(action: &str, detail: impl std::fmt::Display) -> Self {
        Self { message: format!("{action}: {detail}") }
    }

    /// Response body did not match the expected shape.
    pub fn decode(detail: impl std::fmt::Display) -> Self {
        Self { message: format!("Unexpected response from server: {detail}") }
    }

    /// Service called outside a browser build.
    pub fn unavailable(action: &str) -> Self {
        Self { message: format!("{action}: not available outside the browser") }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> Self {
        err.message
    }
}
