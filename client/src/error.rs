//! Error taxonomy for backend and storage failures.
//!
//! ERROR HANDLING
//! ==============
//! Gateway and storage failures never propagate past the view or session
//! boundary. Views turn a `GatewayError` into text with
//! [`GatewayError::user_message`]; storage errors are logged and swallowed.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const NETWORK_FALLBACK_MESSAGE: &str = "Unable to connect. Please try again later.";

/// Failure of a Backend Gateway call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The backend answered with a failure envelope.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The backend refused the call because a usage quota is exhausted (HTTP 429).
    #[error("rate limited")]
    RateLimited { message: Option<String> },

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// A request body could not be serialized.
    #[error("request encoding failed: {0}")]
    Encode(String),

    /// A success response whose body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),

    /// No browser environment (server render).
    #[error("not available on server")]
    Unavailable,
}

impl GatewayError {
    /// Server-supplied message, if the backend sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } | Self::RateLimited { message } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            Self::Network(_) | Self::Encode(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }

    /// Text to show the user: the server's message verbatim when present,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

/// Failure of the browser key-value storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or there is no browser window.
    #[error("storage unavailable")]
    Unavailable,

    /// The storage API threw (quota exceeded, security policy).
    #[error("storage access failed: {0}")]
    Access(String),

    /// A stored value could not be parsed.
    #[error("stored value is corrupt: {0}")]
    Corrupt(String),
}
