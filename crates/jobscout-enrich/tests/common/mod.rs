//! Scripted browser for session and scraping tests.

#![allow(dead_code)]

use jobscout_browser::{BrowserActions, BrowserError, Result};
use jobscout_core::{EnrichmentConfig, SessionConfig};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Default)]
pub struct MockState {
    pub login_failures: u32,
    pub landmark_failures: HashMap<String, u32>,
    pub pages: HashMap<String, String>,
    pub cancel_on_visit: Option<(String, CancellationToken)>,
    pub navigations: Vec<String>,
    pub filled: Vec<(String, String)>,
    pub close_calls: u32,
    current: String,
}

/// Cloneable handle; clones share state so tests can inspect a browser
/// after handing it to a session.
#[derive(Clone, Default)]
pub struct MockBrowser {
    state: Arc<Mutex<MockState>>,
}

impl MockBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_login(self, failures: u32) -> Self {
        self.state.lock().unwrap().login_failures = failures;
        self
    }

    pub fn with_profile(self, url: &str, html: impl Into<String>) -> Self {
        self.state
            .lock()
            .unwrap()
            .pages
            .insert(url.to_string(), html.into());
        self
    }

    pub fn with_landmark_failures(self, url: &str, failures: u32) -> Self {
        self.state
            .lock()
            .unwrap()
            .landmark_failures
            .insert(url.to_string(), failures);
        self
    }

    pub fn cancel_on_visit(self, url: &str, token: CancellationToken) -> Self {
        self.state.lock().unwrap().cancel_on_visit = Some((url.to_string(), token));
        self
    }

    pub fn close_calls(&self) -> u32 {
        self.state.lock().unwrap().close_calls
    }

    pub fn visits(&self, url: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .navigations
            .iter()
            .filter(|visited| *visited == url)
            .count()
    }

    pub fn filled(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().filled.clone()
    }
}

#[async_trait::async_trait]
impl BrowserActions for MockBrowser {
    async fn navigate(&self, url: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.navigations.push(url.to_string());
        state.current = url.to_string();
        if let Some((target, token)) = &state.cancel_on_visit {
            if target == url {
                token.cancel();
            }
        }
        Ok(())
    }

    async fn fill_field(&self, selector: &str, value: &str) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .filled
            .push((selector.to_string(), value.to_string()));
        Ok(())
    }

    async fn click(&self, _selector: &str) -> Result<()> {
        Ok(())
    }

    async fn wait_for_selector(&self, selector: &str, _timeout: Duration) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        if selector == SessionConfig::default().post_login_landmark && state.login_failures > 0 {
            state.login_failures -= 1;
            return Err(BrowserError::timeout(selector, Duration::from_secs(15)));
        }

        if selector == EnrichmentConfig::default().profile_landmark {
            let current = state.current.clone();
            if let Some(remaining) = state.landmark_failures.get_mut(&current) {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Err(BrowserError::timeout(selector, Duration::from_secs(15)));
                }
            }
        }

        Ok(())
    }

    async fn page_source(&self) -> Result<String> {
        let state = self.state.lock().unwrap();
        Ok(state.pages.get(&state.current).cloned().unwrap_or_default())
    }

    async fn close(&mut self) -> Result<()> {
        self.state.lock().unwrap().close_calls += 1;
        Ok(())
    }
}

pub fn profile_page(followers_text: &str) -> String {
    format!(
        r#"<html><body><main>
             <section class="top-card-layout">
               <h1>Acme</h1>
               <h3 class="top-card-layout__first-subline">Software Development · Warsaw · {followers_text}</h3>
             </section>
           </main></body></html>"#
    )
}
