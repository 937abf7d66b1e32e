//! Account credentials for the authenticated browser session.

use crate::error::{ConfigError, ConfigResult};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Environment variable holding the account identifier.
pub const USER_ENV: &str = "LINKEDIN_USER";

/// Environment variable holding the account secret.
pub const PASS_ENV: &str = "LINKEDIN_PASS";

/// Login credentials. The secret is wiped from memory on drop and never
/// appears in `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create credentials from explicit values.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `LINKEDIN_USER` and `LINKEDIN_PASS`.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingCredential`] if either variable is
    /// unset or empty.
    pub fn from_env() -> ConfigResult<Self> {
        let username = read_required(USER_ENV)?;
        let password = read_required(PASS_ENV)?;
        Ok(Self { username, password })
    }

    /// Account identifier.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Account secret.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn read_required(name: &'static str) -> ConfigResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingCredential { name }),
    }
}
