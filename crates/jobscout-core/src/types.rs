//! Shared types used across JobScout.
//!
//! This module defines the records that flow through the pipeline: search
//! queries going in, listings and follower lookups coming out.

use crate::error::JobScoutError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Number of results the search endpoint returns per page.
///
/// Offsets passed to the endpoint must be multiples of this value.
pub const PAGE_SIZE: u32 = 25;

/// One job posting extracted from search-result markup.
///
/// Only the listing URL is required; every other field may be missing from
/// the source markup and is kept as `None` rather than treated as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Job title
    pub title: Option<String>,
    /// Hiring company display name
    pub company_name: Option<String>,
    /// Company profile URL, used as the enrichment key
    pub company_url: Option<String>,
    /// Free-text location
    pub location: Option<String>,
    /// Listing URL (identity)
    pub url: String,
    /// Relative posted-date text as shown, e.g. "2 days ago"
    pub date_posted_text: Option<String>,
    /// Posted date as a calendar date
    pub date_posted: Option<NaiveDate>,
    /// Company logo image URL
    pub company_logo_url: Option<String>,
    /// Company follower count, filled in by enrichment
    pub followers: Option<u64>,
}

impl Listing {
    /// Create a listing with only its identity set.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            title: None,
            company_name: None,
            company_url: None,
            location: None,
            url: url.into(),
            date_posted_text: None,
            date_posted: None,
            company_logo_url: None,
            followers: None,
        }
    }

    /// Set the company profile URL.
    #[must_use]
    pub fn with_company_url(mut self, company_url: impl Into<String>) -> Self {
        self.company_url = Some(company_url.into());
        self
    }
}

/// Posting-age filter supported by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// Posted in the last 24 hours
    PastDay,
    /// Posted in the last 7 days
    PastWeek,
    /// Posted in the last 30 days
    PastMonth,
}

impl TimeRange {
    /// Value of the `f_TPR` query parameter for this range.
    #[must_use]
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::PastDay => "r86400",
            Self::PastWeek => "r604800",
            Self::PastMonth => "r2592000",
        }
    }
}

impl FromStr for TimeRange {
    type Err = JobScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" | "24h" | "r86400" => Ok(Self::PastDay),
            "week" | "r604800" => Ok(Self::PastWeek),
            "month" | "r2592000" => Ok(Self::PastMonth),
            other => Err(JobScoutError::Validation(format!(
                "unknown time range '{other}', expected day, week or month"
            ))),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PastDay => "day",
            Self::PastWeek => "week",
            Self::PastMonth => "month",
        };
        write!(f, "{label}")
    }
}

/// Parameters for one paginated search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Job title or keyword, e.g. "Rust Developer"
    pub keywords: String,
    /// Geographic location, e.g. "Poland"
    pub location: String,
    /// Optional posting-age filter
    pub time_range: Option<TimeRange>,
    /// Starting offset, a multiple of [`PAGE_SIZE`]
    pub offset: u32,
    /// Maximum number of listings to return
    pub limit: NonZeroU32,
}

impl SearchQuery {
    /// Create a query starting at offset 0 with a limit of one page.
    #[must_use]
    pub fn new(keywords: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            location: location.into(),
            time_range: None,
            offset: 0,
            limit: NonZeroU32::new(PAGE_SIZE).expect("page size is non-zero"),
        }
    }

    /// Set the posting-age filter.
    #[must_use]
    pub fn with_time_range(mut self, time_range: Option<TimeRange>) -> Self {
        self.time_range = time_range;
        self
    }

    /// Set the result limit.
    #[must_use]
    pub fn with_limit(mut self, limit: NonZeroU32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the starting offset.
    ///
    /// # Errors
    /// Returns error if `offset` is not a multiple of [`PAGE_SIZE`].
    pub fn with_offset(mut self, offset: u32) -> Result<Self, JobScoutError> {
        if offset % PAGE_SIZE != 0 {
            return Err(JobScoutError::Validation(format!(
                "offset must be a multiple of {PAGE_SIZE}, got {offset}"
            )));
        }
        self.offset = offset;
        Ok(self)
    }

    /// Number of pages needed to satisfy the limit.
    #[must_use]
    pub fn pages_needed(&self) -> u32 {
        self.limit.get().div_ceil(PAGE_SIZE)
    }
}

/// Listings extracted from one response, with the offset that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Offset the page was requested at
    pub offset: u32,
    /// Listings in upstream order
    pub listings: Vec<Listing>,
}

impl Page {
    /// Whether the page carried no listings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// How a follower count was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    /// Served from the per-run cache
    CacheHit,
    /// Scraped during this lookup
    Fresh,
    /// Scraped during this lookup but no count could be determined
    Failed,
}

/// Outcome of resolving one company's follower count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerLookupResult {
    /// Company profile URL
    pub company_url: String,
    /// Resolved count; `None` means "not determined", not zero
    pub followers: Option<u64>,
    /// Resolution status
    pub status: LookupStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range_params() {
        assert_eq!(TimeRange::PastDay.as_param(), "r86400");
        assert_eq!(TimeRange::PastWeek.as_param(), "r604800");
        assert_eq!(TimeRange::PastMonth.as_param(), "r2592000");
    }

    #[test]
    fn test_time_range_from_str() {
        assert_eq!("week".parse::<TimeRange>().unwrap(), TimeRange::PastWeek);
        assert_eq!("DAY".parse::<TimeRange>().unwrap(), TimeRange::PastDay);
        assert_eq!(
            "r2592000".parse::<TimeRange>().unwrap(),
            TimeRange::PastMonth
        );
        assert!("fortnight".parse::<TimeRange>().is_err());
    }

    #[test]
    fn test_pages_needed_rounds_up() {
        let query = SearchQuery::new("rust", "Poland");
        assert_eq!(query.pages_needed(), 1);

        let query = query.with_limit(NonZeroU32::new(26).unwrap());
        assert_eq!(query.pages_needed(), 2);

        let query = query.with_limit(NonZeroU32::new(50).unwrap());
        assert_eq!(query.pages_needed(), 2);

        let query = query.with_limit(NonZeroU32::new(1).unwrap());
        assert_eq!(query.pages_needed(), 1);
    }

    #[test]
    fn test_offset_must_align_to_page_size() {
        let query = SearchQuery::new("rust", "Poland");
        assert_eq!(query.clone().with_offset(50).unwrap().offset, 50);
        assert!(query.with_offset(30).is_err());
    }

    #[test]
    fn test_listing_serialization_keeps_absent_fields() {
        let listing = Listing::new("https://example.com/jobs/view/1")
            .with_company_url("https://example.com/company/acme");
        let json = serde_json::to_value(&listing).expect("serialize listing");
        assert_eq!(json["company_url"], "https://example.com/company/acme");
        assert!(json["followers"].is_null());
        assert!(json["title"].is_null());
    }
}
