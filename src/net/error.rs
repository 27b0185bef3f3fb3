//! Error taxonomy at the gateway boundary.
//!
//! ERROR HANDLING
//! ==============
//! Callers match on `ApiError` instead of inspecting raw responses.
//! `Unauthorized` is the only variant with a global side effect (the gateway
//! clears the session and redirects before returning it); every other variant
//! is local to the call site and leaves the session untouched.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Status code the API uses for a missing, expired, or invalid credential.
pub const UNAUTHORIZED_STATUS: u16 = 401;

/// Errors produced by gateway calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("network error: {0}")]
    Transport(String),

    /// No response arrived within the gateway's per-request bound.
    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The API rejected the credential. The session is already cleared.
    #[error("not authorized")]
    Unauthorized { message: Option<String> },

    /// Any other non-success status.
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the remote service, if it sent one.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Status { message, .. } => message.as_deref(),
            Self::Transport(_) | Self::Timeout { .. } | Self::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
