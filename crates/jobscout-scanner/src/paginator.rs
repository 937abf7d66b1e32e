//! Pagination over the search endpoint.
//!
//! This module provides the `Paginator` which walks result pages in
//! order, aggregates extracted listings, and decides when to stop.

use crate::error::Result;
use crate::fetcher::PageFetcher;
use crate::parser::ListingParser;
use jobscout_core::{Listing, Page, SearchQuery, PAGE_SIZE};
use tokio_util::sync::CancellationToken;

/// Why pagination stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Accumulated listings reached the requested limit
    LimitReached,
    /// A successful response contained no listings
    Exhausted,
    /// A request failed; the listings gathered so far are returned
    TransportError,
    /// The caller cancelled the run
    Cancelled,
    /// Every page the limit called for was fetched
    PageBudgetSpent,
}

/// Outcome of a full pagination run.
#[derive(Debug, Clone)]
pub struct PaginationReport {
    /// Listings in upstream order, at most `limit` of them
    pub listings: Vec<Listing>,
    /// Number of successful page responses
    pub pages_fetched: u32,
    /// Why the loop ended
    pub stop_reason: StopReason,
}

/// Drives a [`PageFetcher`] across offsets for one query.
pub struct Paginator<F> {
    fetcher: F,
    parser: ListingParser,
}

impl<F: PageFetcher> Paginator<F> {
    /// Create a paginator over `fetcher`.
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            parser: ListingParser::new(),
        }
    }

    /// Fetch and parse a single page.
    pub async fn fetch_page(&self, query: &SearchQuery, offset: u32) -> Result<Page> {
        let html = self.fetcher.fetch(query, offset).await?;
        Ok(Page {
            offset,
            listings: self.parser.parse(&html),
        })
    }

    /// Fetch up to `query.limit` listings.
    ///
    /// Never fails: transport errors and cancellation end the loop early and
    /// the listings gathered so far are returned.
    pub async fn fetch_listings(
        &self,
        query: &SearchQuery,
        cancel: &CancellationToken,
    ) -> Vec<Listing> {
        self.run(query, cancel).await.listings
    }

    /// Like [`Self::fetch_listings`], also reporting how the loop ended.
    pub async fn run(&self, query: &SearchQuery, cancel: &CancellationToken) -> PaginationReport {
        let limit = usize::try_from(query.limit.get()).unwrap_or(usize::MAX);
        let pages_needed = query.pages_needed();

        let mut listings = Vec::new();
        let mut pages_fetched = 0;
        let mut stop_reason = StopReason::PageBudgetSpent;

        tracing::info!(
            "Searching '{}' in '{}' (limit {}, up to {} page(s))",
            query.keywords,
            query.location,
            limit,
            pages_needed
        );

        for page_index in 0..pages_needed {
            let offset = query
                .offset
                .saturating_add(page_index.saturating_mul(PAGE_SIZE));

            if cancel.is_cancelled() {
                stop_reason = StopReason::Cancelled;
                break;
            }

            let result = tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    stop_reason = StopReason::Cancelled;
                    break;
                }
                result = self.fetch_page(query, offset) => result,
            };

            match result {
                Err(e) => {
                    tracing::warn!(
                        "Stopping pagination at offset {}: {} ({} listing(s) kept)",
                        offset,
                        e,
                        listings.len()
                    );
                    stop_reason = StopReason::TransportError;
                    break;
                }
                Ok(page) if page.is_empty() => {
                    pages_fetched += 1;
                    tracing::debug!("No listings at offset {}, end of results", offset);
                    stop_reason = StopReason::Exhausted;
                    break;
                }
                Ok(page) => {
                    pages_fetched += 1;
                    tracing::debug!(
                        "Offset {} yielded {} listing(s)",
                        offset,
                        page.listings.len()
                    );
                    listings.extend(page.listings);

                    if listings.len() >= limit {
                        stop_reason = StopReason::LimitReached;
                        break;
                    }
                }
            }
        }

        listings.truncate(limit);

        tracing::info!(
            "Pagination finished: {} listing(s) from {} page(s), {:?}",
            listings.len(),
            pages_fetched,
            stop_reason
        );

        PaginationReport {
            listings,
            pages_fetched,
            stop_reason,
        }
    }
}

