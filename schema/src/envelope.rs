//! The `{ success, data, message }` wrapper every endpoint responds with.
//!
//! [`unwrap_data`] and [`unwrap_ack`] take a finished exchange (status and
//! body text) and apply the status check, envelope unwrap, and empty-body
//! rule, so the browser and command-line transports only move bytes.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Standard response wrapper.
///
/// Older endpoints report failures in `msg` instead of `message`; both are
/// accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Server-provided human-readable message, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.msg.as_deref())
            .filter(|m| !m.trim().is_empty())
    }

    /// Unwrap the payload of a successful envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false and
    /// [`ApiError::Malformed`] when a successful envelope carries no data.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            let message = self.server_message().unwrap_or("request was rejected").to_owned();
            return Err(ApiError::Rejected(message));
        }
        self.data.ok_or_else(|| ApiError::Malformed("missing `data` field".to_owned()))
    }

    /// Check a successful envelope whose payload is irrelevant (deletes, follow-ups).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false.
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.success {
            return Ok(());
        }
        let message = self.server_message().unwrap_or("request was rejected").to_owned();
        Err(ApiError::Rejected(message))
    }
}

/// Decode a raw response body into an envelope.
///
/// # Errors
///
/// Returns [`ApiError::Malformed`] if the body is not a JSON envelope of `T`.
pub fn decode<T>(body: &str) -> Result<ApiEnvelope<T>, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Build the error for a non-2xx response, pulling `message`/`msg` from the
/// body when it is a JSON object.
#[must_use]
pub fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|env| env.server_message().map(ToOwned::to_owned))
        .unwrap_or_default();
    ApiError::Status { status, message }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Unwrap the payload of a completed exchange.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for a non-2xx status, otherwise whatever
/// [`decode`] or [`ApiEnvelope::into_data`] reports.
pub fn unwrap_data<T>(status: u16, body: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !is_success(status) {
        return Err(status_error(status, body));
    }
    decode::<T>(body)?.into_data()
}

/// Check a completed exchange whose payload does not matter. An empty 2xx
/// body counts as success.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for a non-2xx status, otherwise whatever
/// [`decode`] or [`ApiEnvelope::into_ack`] reports.
pub fn unwrap_ack(status: u16, body: &str) -> Result<(), ApiError> {
    if !is_success(status) {
        return Err(status_error(status, body));
    }
    if body.trim().is_empty() {
        return Ok(());
    }
    decode::<serde_json::Value>(body)?.into_ack()
}
