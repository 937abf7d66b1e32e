//! JobScout Core - Foundation crate for the JobScout job-search pipeline.
//!
//! This crate provides the shared data model, error handling, configuration
//! management and retry primitive that the other JobScout crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`credentials`] - Account credentials loaded from the environment
//! - [`retry`] - Bounded retry with delay, shared by login and scraping
//! - [`types`] - Pipeline records (`Listing`, `SearchQuery`, `Page`, `FollowerLookupResult`)
//!
//! # Example
//!
//! ```rust
//! use jobscout_core::{AppConfig, SearchQuery, TimeRange};
//!
//! let config = AppConfig::default();
//! let query = SearchQuery::new("Rust Developer", "Poland")
//!     .with_time_range(Some(TimeRange::PastWeek));
//!
//! assert_eq!(config.session.max_login_retries, 3);
//! assert_eq!(query.pages_needed(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod credentials;
pub mod error;
pub mod retry;
pub mod types;

// Re-export commonly used types
pub use config::{
    AppConfig, BrowserConfig, EnrichmentConfig, ExportConfig, SearchConfig, SessionConfig,
    DEFAULT_USER_AGENT,
};
pub use credentials::Credentials;
pub use error::{ConfigError, ConfigResult, JobScoutError, Result};
pub use retry::{retry, Backoff, RetryError, RetryPolicy};
pub use types::{
    FollowerLookupResult, Listing, LookupStatus, Page, SearchQuery, TimeRange, PAGE_SIZE,
};
