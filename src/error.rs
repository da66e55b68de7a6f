//! Error taxonomy for session and team requests.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures are logged and swallowed by the controller.
//! `Rejected` carries the server's own message and is the only variant whose
//! text is shown to the user verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single request issued by the navigation controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the JSON shape we expect.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The server answered `ok: false`.
    #[error("rejected by server: {0}")]
    Rejected(String),

    /// Browser APIs are not compiled into this build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl NavError {
    /// Message suitable for a user-facing notice, if this error has one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) => Some(message),
            _ => None,
        }
    }
}
