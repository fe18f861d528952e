//! Error taxonomy for the API client.

use thiserror::Error;

use crate::traits::HttpError;

/// Errors surfaced by [`crate::api::ApiClient`] operations.
///
/// Every failure path reaching the UI maps to exactly one of these; the app
/// layer turns each into a single toast notification.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// An authenticated operation was attempted with no stored token, or
    /// the backend rejected the token. No request is sent in the former
    /// case.
    #[error("Not authenticated")]
    Unauthenticated,

    /// The backend returned a non-2xx status. `message` is extracted from
    /// the response body when possible, otherwise a generic fallback.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// The request never reached the backend (offline, DNS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The body was unparseable or the envelope shape was unrecognized.
    #[error("Unexpected response from server")]
    MalformedResponse(String),
}

impl ApiError {
    /// Whether the user needs to sign in again. The app layer clears the
    /// session and routes to the login screen on these.
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthenticated | ApiError::RequestFailed { status: 401, .. }
        )
    }

    /// Human-readable message for toast display.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        ApiError::Network(err.to_string())
    }
}
