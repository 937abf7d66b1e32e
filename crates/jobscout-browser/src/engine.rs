use crate::actions::BrowserActions;
use crate::error::{BrowserError, Result};
use crate::identity::BrowserIdentity;
use chromiumoxide::browser::{Browser, BrowserConfig as ChromeConfig};
use chromiumoxide::Page;
use futures_util::stream::StreamExt;
use jobscout_core::BrowserConfig;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Interval between element lookups while waiting for a selector
const SELECTOR_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Browser automation engine
///
/// Drives a single Chromium tab. All navigation for one session goes through
/// this one page, in order.
pub struct BrowserEngine {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
    identity: BrowserIdentity,
    navigation_timeout: Duration,
    closed: bool,
}

impl BrowserEngine {
    /// Launch a browser configured from `config`
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let identity = BrowserIdentity::from_config(config);

        let mut builder = ChromeConfig::builder()
            .no_sandbox()
            .window_size(identity.viewport_width, identity.viewport_height)
            .arg(format!("--user-agent={}", identity.user_agent));
        if !config.headless {
            builder = builder.with_head();
        }
        let chrome_config = builder.build().map_err(BrowserError::Launch)?;

        let (browser, mut handler) = Browser::launch(chrome_config)
            .await
            .map_err(|e| BrowserError::Launch(e.to_string()))?;

        // Spawn browser handler
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::trace!("browser handler event error: {}", e);
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        tracing::info!(
            "Browser session started (headless: {}, viewport: {}x{})",
            config.headless,
            identity.viewport_width,
            identity.viewport_height
        );

        Ok(Self {
            browser,
            page,
            handler,
            identity,
            navigation_timeout: config.navigation_timeout(),
            closed: false,
        })
    }

    /// Identity this browser presents
    pub fn identity(&self) -> &BrowserIdentity {
        &self.identity
    }

    /// Run a [`visibility_script`]; evaluation errors count as not visible.
    async fn is_visible(&self, script: &str) -> bool {
        match self.page.evaluate(script).await {
            Ok(result) => result.into_value::<bool>().unwrap_or(false),
            Err(e) => {
                tracing::trace!("visibility check failed: {}", e);
                false
            }
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(BrowserError::Closed)
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl BrowserActions for BrowserEngine {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.ensure_open()?;

        match tokio::time::timeout(self.navigation_timeout, self.page.goto(url)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(BrowserError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Err(BrowserError::timeout(
                format!("navigation to {url}"),
                self.navigation_timeout,
            )),
        }
    }

    async fn fill_field(&self, selector: &str, value: &str) -> Result<()> {
        self.ensure_open()?;

        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| BrowserError::SelectorNotFound(selector.to_string()))?;
        element.click().await?;
        element.type_str(value).await?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.ensure_open()?;

        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| BrowserError::SelectorNotFound(selector.to_string()))?;
        element.click().await?;
        Ok(())
    }

    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<()> {
        self.ensure_open()?;

        let script = visibility_script(selector);
        let poll = async {
            loop {
                if self.is_visible(&script).await {
                    return;
                }
                tokio::time::sleep(SELECTOR_POLL_INTERVAL).await;
            }
        };

        tokio::time::timeout(timeout, poll)
            .await
            .map_err(|_| BrowserError::timeout(selector, timeout))
    }

    async fn page_source(&self) -> Result<String> {
        self.ensure_open()?;
        Ok(self.page.content().await?)
    }

    async fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let result = self.browser.close().await;
        if let Err(e) = self.browser.wait().await {
            tracing::warn!("Failed waiting for browser process to exit: {}", e);
        }
        self.handler.abort();
        tracing::info!("Browser session closed");

        result.map(|_| ()).map_err(BrowserError::from)
    }
}

/// Expression that is `true` once `selector` matches a rendered element
/// with a non-empty box that is not hidden by style.
fn visibility_script(selector: &str) -> String {
    // JSON string literals are valid JS string literals
    let quoted = serde_json::to_string(selector).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"(() => {{
            const el = document.querySelector({quoted});
            if (!el) return false;
            const style = window.getComputedStyle(el);
            if (style.visibility === 'hidden' || style.display === 'none') return false;
            const rect = el.getBoundingClientRect();
            return rect.width > 0 && rect.height > 0;
        }})()"#
    )
}
