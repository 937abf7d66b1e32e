use crate::error::Result;
use std::time::Duration;

/// The handful of page operations login and profile scraping need.
///
/// Implemented by [`BrowserEngine`](crate::BrowserEngine) for real Chromium
/// and by scripted fakes in tests. Everything except `close` takes `&self`,
/// so retry closures can share one borrowed browser.
#[async_trait::async_trait]
pub trait BrowserActions: Send + Sync {
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Focus the element matching `selector` and type `value` into it.
    async fn fill_field(&self, selector: &str, value: &str) -> Result<()>;

    async fn click(&self, selector: &str) -> Result<()>;

    /// Resolve once an element matching `selector` is visible, or fail with
    /// [`BrowserError::Timeout`](crate::BrowserError::Timeout).
    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<()>;

    /// Serialized DOM of the current page.
    async fn page_source(&self) -> Result<String>;

    /// Shut the browser down. Later calls are no-ops.
    async fn close(&mut self) -> Result<()>;
}
