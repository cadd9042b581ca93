//! Error types for the HTTP boundary.
//!
//! DESIGN
//! ======
//! Failures fall into two families: transport/server failures (`ApiError`)
//! surfaced as toasts, and local parse failures (`ParseError`) produced while
//! turning user input or wire strings into typed values.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed round-trip to the REST backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success HTTP status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The server answered 2xx but the envelope reported `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// The response body did not match the expected shape.
    #[error("invalid response from server: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Message suitable for a toast, falling back to `fallback` when the
    /// server gave nothing better than a status code.
    #[must_use]
    pub fn toast_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected(message) | Self::Status { message, .. } if !message.trim().is_empty() => {
                message.clone()
            }
            _ => fallback.to_owned(),
        }
    }

    /// Whether the failure happened before the server was reached.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// A value that could not be parsed from text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    Date(String),
    #[error("unknown lead status `{0}`")]
    Status(String),
    #[error("unknown priority `{0}`")]
    Priority(String),
    #[error("unknown conversation outcome `{0}`")]
    Outcome(String),
    #[error("unknown role `{0}`")]
    Role(String),
    #[error("unknown campaign {field} `{value}`")]
    Campaign { field: &'static str, value: String },
}
