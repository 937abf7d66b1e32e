//! Error types for the enrichment subsystem.

use jobscout_browser::BrowserError;
use thiserror::Error;

/// Errors that can occur while opening, using or closing a session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Every login attempt failed; the browser has already been closed
    #[error("login failed after {attempts} attempt(s): {reason}")]
    LoginFailed {
        /// Attempts made
        attempts: u32,
        /// Error from the final attempt
        reason: String,
    },

    /// The session's browser has already been shut down
    #[error("session already closed")]
    AlreadyClosed,

    /// Browser failure outside the login sequence
    #[error("browser error: {0}")]
    Browser(#[from] BrowserError),
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
