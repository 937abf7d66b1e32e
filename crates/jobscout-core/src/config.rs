//! Configuration management for JobScout.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use crate::retry::RetryPolicy;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Browser-identifying user agent sent with search requests and used by
/// the automated browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main application configuration.
///
/// This is loaded from `~/.config/jobscout/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Search endpoint settings
    pub search: SearchConfig,
    /// Browser automation settings
    pub browser: BrowserConfig,
    /// Login and session settings
    pub session: SessionConfig,
    /// Follower enrichment settings
    pub enrichment: EnrichmentConfig,
    /// Export settings
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from the default location, falling back to
    /// defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `JOBSCOUT_HEADLESS`: Override browser headless mode (true/false)
    /// - `JOBSCOUT_REQUEST_TIMEOUT_SECS`: Override search request timeout
    /// - `JOBSCOUT_COURTESY_DELAY_MS`: Override delay between company pages
    pub fn load_with_env(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("JOBSCOUT_HEADLESS") {
            if let Ok(headless) = val.parse() {
                self.browser.headless = headless;
                tracing::debug!("Override browser.headless from env: {}", headless);
            }
        }

        if let Ok(val) = std::env::var("JOBSCOUT_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.search.request_timeout_secs = secs;
                tracing::debug!("Override search.request_timeout_secs from env: {}", secs);
            }
        }

        if let Ok(val) = std::env::var("JOBSCOUT_COURTESY_DELAY_MS") {
            if let Ok(ms) = val.parse() {
                self.enrichment.courtesy_delay_ms = ms;
                tracing::debug!("Override enrichment.courtesy_delay_ms from env: {}", ms);
            }
        }
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.search.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "search.request_timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.session.max_login_retries == 0 {
            return Err(ConfigError::InvalidValue {
                field: "session.max_login_retries".to_string(),
                reason: "must allow at least one attempt".to_string(),
            });
        }
        if self.enrichment.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "enrichment.max_attempts".to_string(),
                reason: "must allow at least one attempt".to_string(),
            });
        }
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/jobscout/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "jobscout", "jobscout").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Search endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Guest job search endpoint
    pub base_url: String,
    /// Connect/read timeout in seconds
    pub request_timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
}

impl SearchConfig {
    /// Request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.linkedin.com/jobs-guest/jobs/api/seeMoreJobPostings/search"
                .to_string(),
            request_timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Browser automation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    pub headless: bool,
    /// Pick a random desktop user agent and viewport instead of the fixed one
    pub randomize_identity: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Navigation timeout in seconds
    pub navigation_timeout_secs: u64,
}

impl BrowserConfig {
    /// Navigation timeout as a `Duration`.
    #[must_use]
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            randomize_identity: false,
            window_width: 1920,
            window_height: 1080,
            navigation_timeout_secs: 30,
        }
    }
}

/// Login and session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Login page URL
    pub login_url: String,
    /// Selector for the username input
    pub username_selector: String,
    /// Selector for the password input
    pub password_selector: String,
    /// Selector for the submit control
    pub submit_selector: String,
    /// Element whose appearance signals a successful login
    pub post_login_landmark: String,
    /// Login attempts before giving up
    pub max_login_retries: u32,
    /// Delay between login attempts in milliseconds
    pub login_retry_delay_ms: u64,
    /// Element wait timeout during login in seconds
    pub element_timeout_secs: u64,
}

impl SessionConfig {
    /// Retry policy for the login sequence.
    #[must_use]
    pub fn login_retry_policy(&self) -> RetryPolicy {
        RetryPolicy::fixed(
            self.max_login_retries,
            Duration::from_millis(self.login_retry_delay_ms),
        )
    }

    /// Element wait timeout as a `Duration`.
    #[must_use]
    pub fn element_timeout(&self) -> Duration {
        Duration::from_secs(self.element_timeout_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_url: "https://www.linkedin.com/login".to_string(),
            username_selector: "#username".to_string(),
            password_selector: "#password".to_string(),
            submit_selector: r#"button[type="submit"]"#.to_string(),
            post_login_landmark: "#global-nav".to_string(),
            max_login_retries: 3,
            login_retry_delay_ms: 2000,
            element_timeout_secs: 15,
        }
    }
}

/// Follower enrichment settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Element whose appearance signals the company profile has rendered
    pub profile_landmark: String,
    /// Scrape attempts per company
    pub max_attempts: u32,
    /// Delay between scrape attempts in milliseconds
    pub retry_delay_ms: u64,
    /// Minimum spacing between company page navigations in milliseconds
    pub courtesy_delay_ms: u64,
    /// Landmark wait timeout in seconds
    pub landmark_timeout_secs: u64,
}

impl EnrichmentConfig {
    /// Retry policy for one company scrape.
    #[must_use]
    pub fn scrape_retry_policy(&self) -> RetryPolicy {
        RetryPolicy::fixed(
            self.max_attempts,
            Duration::from_millis(self.retry_delay_ms),
        )
    }

    /// Courtesy delay as a `Duration`.
    #[must_use]
    pub fn courtesy_delay(&self) -> Duration {
        Duration::from_millis(self.courtesy_delay_ms)
    }

    /// Landmark wait timeout as a `Duration`.
    #[must_use]
    pub fn landmark_timeout(&self) -> Duration {
        Duration::from_secs(self.landmark_timeout_secs)
    }
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            profile_landmark: "main, .top-card-layout, .org-top-card".to_string(),
            max_attempts: 3,
            retry_delay_ms: 2000,
            courtesy_delay_ms: 1500,
            landmark_timeout_secs: 15,
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory output files are written to
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}
