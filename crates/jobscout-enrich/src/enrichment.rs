//! Follower back-fill across a batch of listings.
//!
//! Listings usually share employers, so `enrich` scrapes each distinct
//! company URL at most once and copies the result to every listing that
//! references it. Listings without a company URL stay `None`.

use jobscout_core::{FollowerLookupResult, Listing, LookupStatus};
use std::collections::{HashMap, HashSet};
use tokio_util::sync::CancellationToken;

/// Anything that can resolve a company URL to a follower count.
#[async_trait::async_trait]
pub trait FollowerSource: Send {
    /// Follower count for `company_url`; `None` if it could not be read.
    async fn followers(&mut self, company_url: &str) -> Option<u64>;
}

/// Per-run memo of company URL to follower count.
///
/// Failed lookups are cached as `None` so they are not retried for later
/// listings of the same company.
#[derive(Debug, Default)]
pub struct FollowerCache {
    entries: HashMap<String, Option<u64>>,
}

impl FollowerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, company_url: impl Into<String>, followers: Option<u64>) {
        self.entries.insert(company_url.into(), followers);
    }

    pub fn contains(&self, company_url: &str) -> bool {
        self.entries.contains_key(company_url)
    }

    /// Cached result for `company_url`, if it was looked up this run.
    pub fn lookup(&self, company_url: &str) -> Option<FollowerLookupResult> {
        self.entries
            .get(company_url)
            .map(|followers| FollowerLookupResult {
                company_url: company_url.to_string(),
                followers: *followers,
                status: LookupStatus::CacheHit,
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of an enrichment pass.
#[derive(Debug, Clone)]
pub struct Enrichment {
    /// Input listings, same order, with `followers` filled in
    pub listings: Vec<Listing>,
    /// One entry per company URL actually scraped
    pub lookups: Vec<FollowerLookupResult>,
    /// Listings that reused an earlier lookup of the same company
    pub cache_hits: usize,
    /// True if cancellation stopped the pass early
    pub cancelled: bool,
}

impl Enrichment {
    /// Company URLs that produced a follower count.
    pub fn resolved(&self) -> usize {
        self.lookups
            .iter()
            .filter(|lookup| lookup.status == LookupStatus::Fresh)
            .count()
    }
}

/// Fill `followers` on every listing, scraping each distinct company once.
///
/// Companies are visited in first-appearance order. On cancellation the
/// remaining companies are skipped and their listings keep `None`; the
/// listings already resolved are still back-filled.
pub async fn enrich<S: FollowerSource + ?Sized>(
    mut listings: Vec<Listing>,
    source: &mut S,
    cancel: &CancellationToken,
) -> Enrichment {
    let companies = distinct_company_urls(&listings);
    tracing::info!(
        "Enriching {} listing(s) across {} distinct compan(ies)",
        listings.len(),
        companies.len()
    );

    let total = companies.len();
    let mut cache = FollowerCache::new();
    let mut lookups = Vec::with_capacity(total);
    let mut cancelled = false;

    for (index, company_url) in companies.into_iter().enumerate() {
        if cancel.is_cancelled() {
            cancelled = true;
            break;
        }

        tracing::debug!("[{}/{}] {}", index + 1, total, company_url);

        let followers = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                cancelled = true;
                break;
            }
            followers = source.followers(&company_url) => followers,
        };

        lookups.push(FollowerLookupResult {
            company_url: company_url.clone(),
            followers,
            status: if followers.is_some() {
                LookupStatus::Fresh
            } else {
                LookupStatus::Failed
            },
        });
        cache.insert(company_url, followers);
    }

    if cancelled {
        tracing::warn!(
            "Enrichment cancelled after {} compan(ies); remaining listings keep no follower count",
            cache.len()
        );
    }

    let mut backfilled: usize = 0;
    for listing in &mut listings {
        let Some(hit) = listing
            .company_url
            .as_deref()
            .and_then(|url| cache.lookup(url))
        else {
            continue;
        };
        listing.followers = hit.followers;
        backfilled += 1;
    }
    let cache_hits = backfilled.saturating_sub(cache.len());

    let enrichment = Enrichment {
        listings,
        lookups,
        cache_hits,
        cancelled,
    };
    tracing::info!(
        "Follower counts resolved for {}/{} compan(ies), {} cache hit(s)",
        enrichment.resolved(),
        enrichment.lookups.len(),
        enrichment.cache_hits
    );
    enrichment
}

/// Distinct non-empty company URLs in first-appearance order.
pub fn distinct_company_urls(listings: &[Listing]) -> Vec<String> {
    let mut seen = HashSet::new();
    listings
        .iter()
        .filter_map(|listing| listing.company_url.as_deref())
        .filter(|url| !url.trim().is_empty())
        .filter(|url| seen.insert(*url))
        .map(str::to_string)
        .collect()
}
