use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrowserError>;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("could not launch browser: {0}")]
    Launch(String),

    #[error("devtools protocol error: {0}")]
    Cdp(String),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("no element matches `{0}`")]
    SelectorNotFound(String),

    #[error("timed out after {after:?} waiting for {what}")]
    Timeout { what: String, after: Duration },

    #[error("browser already closed")]
    Closed,
}

impl BrowserError {
    pub fn timeout(what: impl Into<String>, after: Duration) -> Self {
        Self::Timeout {
            what: what.into(),
            after,
        }
    }
}

impl From<chromiumoxide::error::CdpError> for BrowserError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Self::Cdp(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_display() {
        let err = BrowserError::Navigation {
            url: "https://www.linkedin.com/login".to_string(),
            reason: "net::ERR_NAME_NOT_RESOLVED".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "navigation to https://www.linkedin.com/login failed: net::ERR_NAME_NOT_RESOLVED"
        );
    }

    #[test]
    fn test_timeout_display() {
        let err = BrowserError::timeout("#global-nav", Duration::from_secs(15));
        assert_eq!(err.to_string(), "timed out after 15s waiting for #global-nav");
    }
}
