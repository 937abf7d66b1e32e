//! Browser automation for authenticated profile scraping.
//!
//! Provides a headless Chromium session behind the [`BrowserActions`] trait,
//! plus a courtesy [`Pacer`] for spacing out navigations.

pub mod actions;
pub mod engine;
pub mod error;
pub mod identity;
pub mod pacer;

pub use actions::BrowserActions;
pub use engine::BrowserEngine;
pub use error::{BrowserError, Result};
pub use identity::BrowserIdentity;
pub use pacer::Pacer;
