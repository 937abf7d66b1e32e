//! Authenticated browser session with guaranteed shutdown.
//!
//! A [`Session`] owns its browser from login to close. Closing happens
//! exactly once: explicitly through [`Session::close`] or [`with_session`],
//! or, if the session is dropped while still open (panic, cancelled future),
//! on a background task spawned from `Drop`.

use crate::enrichment::FollowerSource;
use crate::error::{Result, SessionError};
use crate::profile::FollowerScraper;
use futures::future::BoxFuture;
use jobscout_browser::{BrowserActions, BrowserError};
use jobscout_core::{retry, Credentials, EnrichmentConfig, SessionConfig};
use tokio::runtime::Handle;

/// Lifecycle of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Browser launched, no login attempted yet
    Unauthenticated,
    /// Login in progress
    Authenticating,
    /// Logged in and usable
    Authenticated,
    /// Browser shut down after use
    Closed,
    /// Login gave up; browser shut down
    Failed,
}

/// A logged-in browser plus the scraper that drives it.
pub struct Session<B: BrowserActions + 'static> {
    browser: Option<B>,
    scraper: FollowerScraper,
    state: SessionState,
    runtime: Handle,
}

impl<B: BrowserActions + 'static> Session<B> {
    /// Log in on `browser`, retrying up to `session_config.max_login_retries`
    /// times.
    ///
    /// # Errors
    /// Returns [`SessionError::LoginFailed`] once every attempt has failed.
    /// The browser is closed before the error is returned.
    pub async fn open(
        browser: B,
        credentials: &Credentials,
        session_config: &SessionConfig,
        enrichment_config: &EnrichmentConfig,
    ) -> Result<Self> {
        let mut session = Self {
            browser: Some(browser),
            scraper: FollowerScraper::new(enrichment_config),
            state: SessionState::Unauthenticated,
            runtime: Handle::current(),
        };

        if let Err(e) = session.authenticate(credentials, session_config).await {
            session.state = SessionState::Failed;
            if let Err(close_err) = session.shutdown().await {
                tracing::warn!("Failed to close browser after login failure: {}", close_err);
            }
            return Err(e);
        }

        Ok(session)
    }

    async fn authenticate(
        &mut self,
        credentials: &Credentials,
        config: &SessionConfig,
    ) -> Result<()> {
        let browser = self.browser.as_ref().ok_or(SessionError::AlreadyClosed)?;
        self.state = SessionState::Authenticating;
        tracing::info!("Logging in at {}", config.login_url);

        let policy = config.login_retry_policy();
        let outcome = retry(&policy, "Login", move |attempt| {
            tracing::debug!("Login attempt {}", attempt);
            login_once(browser, credentials, config)
        })
        .await;

        match outcome {
            Ok(()) => {
                self.state = SessionState::Authenticated;
                tracing::info!("Login successful");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Login failed after {} attempt(s)", e.attempts);
                Err(SessionError::LoginFailed {
                    attempts: e.attempts,
                    reason: e.last_error.to_string(),
                })
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Follower count for one company profile.
    ///
    /// Returns `None` if the lookup fails or the session is no longer open.
    pub async fn followers(&mut self, company_url: &str) -> Option<u64> {
        let browser = self.browser.as_ref()?;
        self.scraper.scrape(browser, company_url).await
    }

    /// Close the browser.
    ///
    /// # Errors
    /// Returns the browser's shutdown error. The session counts as closed
    /// either way.
    pub async fn close(mut self) -> Result<()> {
        self.shutdown().await
    }

    async fn shutdown(&mut self) -> Result<()> {
        let Some(mut browser) = self.browser.take() else {
            return Ok(());
        };
        if self.state != SessionState::Failed {
            self.state = SessionState::Closed;
        }
        tracing::debug!("Closing browser session");
        browser.close().await.map_err(SessionError::from)
    }
}

impl<B: BrowserActions + 'static> Drop for Session<B> {
    fn drop(&mut self) {
        let Some(mut browser) = self.browser.take() else {
            return;
        };
        tracing::warn!("Session dropped while open, closing browser in background");
        self.runtime.spawn(async move {
            if let Err(e) = browser.close().await {
                tracing::warn!("Background browser close failed: {}", e);
            }
        });
    }
}

#[async_trait::async_trait]
impl<B: BrowserActions + 'static> FollowerSource for Session<B> {
    async fn followers(&mut self, company_url: &str) -> Option<u64> {
        Session::followers(self, company_url).await
    }
}

async fn login_once<B: BrowserActions + ?Sized>(
    browser: &B,
    credentials: &Credentials,
    config: &SessionConfig,
) -> std::result::Result<(), BrowserError> {
    let timeout = config.element_timeout();

    browser.navigate(&config.login_url).await?;
    browser
        .wait_for_selector(&config.username_selector, timeout)
        .await?;
    browser
        .fill_field(&config.username_selector, credentials.username())
        .await?;
    browser
        .fill_field(&config.password_selector, credentials.password())
        .await?;
    browser.click(&config.submit_selector).await?;
    browser
        .wait_for_selector(&config.post_login_landmark, timeout)
        .await
}

/// Open a session, run `body` with it, then close it.
///
/// The browser is closed exactly once whether `body` finishes normally,
/// returns an error of its own, or stops early on cancellation. If the
/// returned future is dropped mid-flight the `Drop` fallback closes it.
///
/// # Errors
/// Only login failures are reported here; `body`'s output is passed through
/// untouched and close failures are logged.
pub async fn with_session<B, T, F>(
    browser: B,
    credentials: &Credentials,
    session_config: &SessionConfig,
    enrichment_config: &EnrichmentConfig,
    body: F,
) -> Result<T>
where
    B: BrowserActions + 'static,
    F: for<'s> FnOnce(&'s mut Session<B>) -> BoxFuture<'s, T>,
{
    let mut session = Session::open(browser, credentials, session_config, enrichment_config).await?;

    let output = body(&mut session).await;

    if let Err(e) = session.close().await {
        tracing::warn!("Failed to close browser session: {}", e);
    }

    Ok(output)
}
