use std::time::Duration;
use tokio::time::Instant;

/// Courtesy delay between consecutive navigations.
///
/// Spacing is global, not per host: profile URLs arrive on several country
/// subdomains of the same site. Instead of rejecting early requests,
/// `wait_turn` sleeps until the minimum spacing has elapsed since the
/// previous navigation.
#[derive(Debug)]
pub struct Pacer {
    last_navigation: Option<Instant>,
    min_delay: Duration,
}

impl Pacer {
    pub fn new(min_delay: Duration) -> Self {
        Self {
            last_navigation: None,
            min_delay,
        }
    }

    /// Wait until the next navigation may start, then record it.
    pub async fn wait_turn(&mut self, url: &str) {
        if let Some(last) = self.last_navigation {
            let elapsed = last.elapsed();
            if elapsed < self.min_delay {
                let wait = self.min_delay - elapsed;
                tracing::debug!("Courtesy delay of {:?} before {}", wait, url);
                tokio::time::sleep(wait).await;
            }
        }

        self.last_navigation = Some(Instant::now());
    }
}
