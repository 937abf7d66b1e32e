//! Flat, column-ordered view of a [`Listing`].

use jobscout_core::Listing;
use serde::Serialize;

/// Column headers, in output order.
pub const COLUMNS: [&str; 9] = [
    "title",
    "company_name",
    "company_url",
    "location",
    "url",
    "date_posted_text",
    "date_posted_iso",
    "company_logo_url",
    "followers",
];

/// One exported row. Field order matches [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub company_url: Option<String>,
    pub location: Option<String>,
    pub url: String,
    pub date_posted_text: Option<String>,
    pub date_posted_iso: Option<String>,
    pub company_logo_url: Option<String>,
    pub followers: Option<u64>,
}

impl ExportRow {
    /// Cell values in column order; missing values are empty strings.
    pub fn cells(&self) -> [String; 9] {
        [
            cell(self.title.as_deref()),
            cell(self.company_name.as_deref()),
            cell(self.company_url.as_deref()),
            cell(self.location.as_deref()),
            self.url.clone(),
            cell(self.date_posted_text.as_deref()),
            cell(self.date_posted_iso.as_deref()),
            cell(self.company_logo_url.as_deref()),
            self.followers.map(|n| n.to_string()).unwrap_or_default(),
        ]
    }
}

impl From<&Listing> for ExportRow {
    fn from(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            company_name: listing.company_name.clone(),
            company_url: listing.company_url.clone(),
            location: listing.location.clone(),
            url: listing.url.clone(),
            date_posted_text: listing.date_posted_text.clone(),
            date_posted_iso: listing
                .date_posted
                .map(|date| date.format("%Y-%m-%d").to_string()),
            company_logo_url: listing.company_logo_url.clone(),
            followers: listing.followers,
        }
    }
}

fn cell(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}
