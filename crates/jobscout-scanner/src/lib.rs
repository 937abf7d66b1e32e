//! JobScout Scanner - Search pagination and listing extraction.
//!
//! This crate fetches pages from the guest job search endpoint, extracts
//! listings from the returned markup, and decides when to stop paging.
//! Transport failures end the run early with partial results rather than
//! surfacing as errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use jobscout_scanner::{HttpPageFetcher, Paginator};
//! use tokio_util::sync::CancellationToken;
//!
//! let fetcher = HttpPageFetcher::new(&config.search)?;
//! let paginator = Paginator::new(fetcher);
//!
//! let listings = paginator
//!     .fetch_listings(&query, &CancellationToken::new())
//!     .await;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

#[allow(missing_docs)]
pub mod error;
#[allow(missing_docs)]
pub mod fetcher;
pub mod paginator;
#[allow(missing_docs)]
pub mod parser;
#[allow(missing_docs)]
pub mod url_builder;

// Re-export commonly used types
pub use error::{Result, ScanError};
pub use fetcher::{HttpPageFetcher, PageFetcher};
pub use paginator::{PaginationReport, Paginator, StopReason};
pub use parser::ListingParser;
pub use url_builder::build_search_url;
