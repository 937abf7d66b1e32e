//! JobScout Enrich - Follower counts for the companies behind listings.
//!
//! Logs into an authenticated browser [`Session`], reads each distinct
//! company profile once, and back-fills the follower count onto every
//! listing that references it.
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::FutureExt;
//! use jobscout_browser::BrowserEngine;
//! use jobscout_enrich::{enrich, with_session};
//!
//! let browser = BrowserEngine::launch(&config.browser).await?;
//! let enrichment = with_session(
//!     browser,
//!     &credentials,
//!     &config.session,
//!     &config.enrichment,
//!     move |session| async move { enrich(listings, session, &cancel).await }.boxed(),
//! )
//! .await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

#[allow(missing_docs)]
pub mod enrichment;
pub mod error;
#[allow(missing_docs)]
pub mod followers;
#[allow(missing_docs)]
pub mod profile;
pub mod session;

// Re-export commonly used types
pub use enrichment::{distinct_company_urls, enrich, Enrichment, FollowerCache, FollowerSource};
pub use error::{Result, SessionError};
pub use followers::{
    parse_follower_text, AriaLabelTier, FirstSublineTier, FollowerTier, SummaryInfoTier,
    TieredExtractor,
};
pub use profile::FollowerScraper;
pub use session::{with_session, Session, SessionState};
