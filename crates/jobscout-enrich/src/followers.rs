//! Follower-count extraction from company profile markup.
//!
//! Profile layouts vary, so extraction walks an ordered list of
//! [`FollowerTier`]s and takes the first text fragment any of them finds.
//! The fragment is then normalized by [`parse_follower_text`].

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Matches `12,345 followers`, `1.2K followers` and `3M followers` once
/// lower-cased.
static FOLLOWERS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d[\d,]*(?:\.\d+)?)\s*([km])?\s*followers").expect("valid followers regex")
});

/// Convert a human-readable follower string into an integer.
///
/// Case is ignored, thousands separators are stripped and `K`/`M` suffixes
/// scale the number. Returns `None` when no number precedes `followers`.
///
/// ```
/// use jobscout_enrich::parse_follower_text;
///
/// assert_eq!(parse_follower_text("1.2K followers"), Some(1_200));
/// assert_eq!(parse_follower_text("12,345 followers"), Some(12_345));
/// assert_eq!(parse_follower_text("abc followers"), None);
/// ```
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn parse_follower_text(text: &str) -> Option<u64> {
    let lowered = text.to_lowercase();
    let caps = FOLLOWERS_REGEX.captures(&lowered)?;

    let number = caps[1].replace(',', "");
    let multiplier: u64 = match caps.get(2).map(|m| m.as_str()) {
        Some("k") => 1_000,
        Some("m") => 1_000_000,
        _ => 1,
    };

    if multiplier == 1 {
        return number.parse().ok();
    }

    let value: f64 = number.parse().ok()?;
    let scaled = (value * multiplier as f64).round();
    if scaled.is_finite() && scaled >= 0.0 {
        Some(scaled as u64)
    } else {
        None
    }
}

/// One strategy for locating the follower text on a profile page.
pub trait FollowerTier: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Raw text fragment mentioning followers, if this tier finds one.
    fn find(&self, document: &Html) -> Option<String>;
}

/// Elements whose `aria-label` mentions followers.
pub struct AriaLabelTier {
    labelled: Selector,
}

impl AriaLabelTier {
    pub fn new() -> Self {
        Self {
            labelled: Selector::parse("[aria-label]").expect("valid aria-label selector"),
        }
    }
}

impl Default for AriaLabelTier {
    fn default() -> Self {
        Self::new()
    }
}

impl FollowerTier for AriaLabelTier {
    fn name(&self) -> &'static str {
        "aria-label"
    }

    fn find(&self, document: &Html) -> Option<String> {
        best_mention(
            document
                .select(&self.labelled)
                .filter_map(|el| el.value().attr("aria-label"))
                .map(str::to_string),
        )
    }
}

/// Items in the signed-in company header's summary list.
pub struct SummaryInfoTier {
    item: Selector,
}

impl SummaryInfoTier {
    pub fn new() -> Self {
        Self {
            item: Selector::parse(".org-top-card-summary-info-list__info-item")
                .expect("valid summary item selector"),
        }
    }
}

impl Default for SummaryInfoTier {
    fn default() -> Self {
        Self::new()
    }
}

impl FollowerTier for SummaryInfoTier {
    fn name(&self) -> &'static str {
        "summary-info"
    }

    fn find(&self, document: &Html) -> Option<String> {
        best_mention(document.select(&self.item).map(|el| element_text(&el)))
    }
}

/// The public profile's first subline, e.g. `Software · Warsaw · 12,345 followers`.
pub struct FirstSublineTier {
    subline: Selector,
}

impl FirstSublineTier {
    pub fn new() -> Self {
        Self {
            subline: Selector::parse("h3.top-card-layout__first-subline")
                .expect("valid subline selector"),
        }
    }
}

impl Default for FirstSublineTier {
    fn default() -> Self {
        Self::new()
    }
}

impl FollowerTier for FirstSublineTier {
    fn name(&self) -> &'static str {
        "first-subline"
    }

    fn find(&self, document: &Html) -> Option<String> {
        best_mention(document.select(&self.subline).map(|el| element_text(&el)))
    }
}

/// Ordered tiers, tried until one yields text.
pub struct TieredExtractor {
    tiers: Vec<Box<dyn FollowerTier>>,
}

impl TieredExtractor {
    /// Extractor with no tiers; add them with [`Self::with_tier`].
    #[must_use]
    pub fn empty() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Append a tier after the existing ones.
    #[must_use]
    pub fn with_tier(mut self, tier: impl FollowerTier + 'static) -> Self {
        self.tiers.push(Box::new(tier));
        self
    }

    /// First follower text found, with the name of the tier that found it.
    pub fn find_text(&self, html: &str) -> Option<(&'static str, String)> {
        let document = Html::parse_document(html);
        self.tiers
            .iter()
            .find_map(|tier| tier.find(&document).map(|text| (tier.name(), text)))
    }

    /// Follower count from profile markup.
    ///
    /// A fragment that is found but cannot be parsed yields `None`; later
    /// tiers are not consulted.
    pub fn extract(&self, html: &str) -> Option<u64> {
        let Some((tier, text)) = self.find_text(html) else {
            tracing::debug!("No follower text on profile page");
            return None;
        };

        let followers = parse_follower_text(&text);
        match followers {
            Some(count) => tracing::trace!("{} tier found {} followers", tier, count),
            None => tracing::debug!("{} tier found unparsable text: {:?}", tier, text.trim()),
        }
        followers
    }
}

impl Default for TieredExtractor {
    fn default() -> Self {
        Self::empty()
            .with_tier(AriaLabelTier::new())
            .with_tier(SummaryInfoTier::new())
            .with_tier(FirstSublineTier::new())
    }
}

fn mentions_followers(text: &str) -> bool {
    text.to_lowercase().contains("followers")
}

/// First candidate with a parsable count, else the first that mentions
/// followers at all. Buttons like "See all followers" share the wording.
fn best_mention(candidates: impl Iterator<Item = String>) -> Option<String> {
    let mut fallback = None;
    for text in candidates.filter(|text| mentions_followers(text)) {
        if parse_follower_text(&text).is_some() {
            return Some(text);
        }
        fallback.get_or_insert(text);
    }
    fallback
}

fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
