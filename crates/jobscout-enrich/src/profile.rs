use crate::followers::TieredExtractor;
use jobscout_browser::{BrowserActions, BrowserError, Pacer};
use jobscout_core::{retry, EnrichmentConfig, RetryPolicy};
use std::time::Duration;

/// Reads follower counts from company profile pages.
///
/// Each lookup waits out the courtesy delay, then retries navigation and
/// landmark waits under the configured policy. Markup that loads but holds
/// no parsable count resolves to `None` without retrying.
pub struct FollowerScraper {
    extractor: TieredExtractor,
    pacer: Pacer,
    policy: RetryPolicy,
    landmark: String,
    landmark_timeout: Duration,
}

impl FollowerScraper {
    pub fn new(config: &EnrichmentConfig) -> Self {
        Self::with_extractor(config, TieredExtractor::default())
    }

    pub fn with_extractor(config: &EnrichmentConfig, extractor: TieredExtractor) -> Self {
        Self {
            extractor,
            pacer: Pacer::new(config.courtesy_delay()),
            policy: config.scrape_retry_policy(),
            landmark: config.profile_landmark.clone(),
            landmark_timeout: config.landmark_timeout(),
        }
    }

    /// Follower count for `company_url`, or `None` once every attempt has
    /// failed or the page holds no count.
    pub async fn scrape<B: BrowserActions + ?Sized>(
        &mut self,
        browser: &B,
        company_url: &str,
    ) -> Option<u64> {
        self.pacer.wait_turn(company_url).await;

        let landmark = self.landmark.as_str();
        let timeout = self.landmark_timeout;
        let label = format!("Profile load for {company_url}");

        let loaded = retry(&self.policy, &label, move |attempt| {
            tracing::debug!("Loading {} (attempt {})", company_url, attempt);
            load_profile(browser, company_url, landmark, timeout)
        })
        .await;

        match loaded {
            Ok(html) => {
                let followers = self.extractor.extract(&html);
                tracing::debug!("{} -> {:?} follower(s)", company_url, followers);
                followers
            }
            Err(e) => {
                tracing::warn!("Skipping followers for {}: {}", company_url, e);
                None
            }
        }
    }
}

async fn load_profile<B: BrowserActions + ?Sized>(
    browser: &B,
    url: &str,
    landmark: &str,
    timeout: Duration,
) -> Result<String, BrowserError> {
    browser.navigate(url).await?;
    browser.wait_for_selector(landmark, timeout).await?;
    browser.page_source().await
}
