mod common;

use common::{profile_page, MockBrowser};
use futures::FutureExt;
use jobscout_core::{Credentials, EnrichmentConfig, Listing, SessionConfig};
use jobscout_enrich::{enrich, with_session, Session, SessionError, SessionState};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

const ACME: &str = "https://www.linkedin.com/company/acme";
const GLOBEX: &str = "https://www.linkedin.com/company/globex";

fn credentials() -> Credentials {
    Credentials::new("someone@example.com", "hunter2")
}

async fn open(browser: MockBrowser) -> Result<Session<MockBrowser>, SessionError> {
    Session::open(
        browser,
        &credentials(),
        &SessionConfig::default(),
        &EnrichmentConfig::default(),
    )
    .await
}

#[tokio::test(start_paused = true)]
async fn test_login_succeeds_after_retries() {
    let browser = MockBrowser::new().failing_login(2);
    let login_url = SessionConfig::default().login_url;

    let session = open(browser.clone()).await.unwrap();

    assert_eq!(session.state(), SessionState::Authenticated);
    assert_eq!(browser.visits(&login_url), 3);
    assert_eq!(browser.close_calls(), 0);

    session.close().await.unwrap();
    assert_eq!(browser.close_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_login_fills_credentials() {
    let browser = MockBrowser::new();
    let config = SessionConfig::default();

    let session = open(browser.clone()).await.unwrap();
    session.close().await.unwrap();

    let filled = browser.filled();
    assert!(filled.contains(&(config.username_selector, "someone@example.com".to_string())));
    assert!(filled.contains(&(config.password_selector, "hunter2".to_string())));
}

#[tokio::test(start_paused = true)]
async fn test_login_gives_up_and_closes_browser() {
    let browser = MockBrowser::new().failing_login(3);
    let login_url = SessionConfig::default().login_url;

    let err = open(browser.clone()).await.err().unwrap();

    assert!(matches!(err, SessionError::LoginFailed { attempts: 3, .. }));
    assert_eq!(browser.visits(&login_url), 3);
    assert_eq!(browser.close_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_login_waits_between_attempts() {
    let browser = MockBrowser::new().failing_login(2);
    let start = Instant::now();

    let session = open(browser).await.unwrap();

    // Two failures, two retry delays of 2s each
    assert_eq!(start.elapsed(), Duration::from_secs(4));
    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_with_session_closes_after_body_error() {
    let browser = MockBrowser::new();

    let outcome = with_session(
        browser.clone(),
        &credentials(),
        &SessionConfig::default(),
        &EnrichmentConfig::default(),
        |_session| async { Err::<(), _>("export failed") }.boxed(),
    )
    .await
    .unwrap();

    assert_eq!(outcome, Err("export failed"));
    assert_eq!(browser.close_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_with_session_closes_once_on_cancellation() {
    let cancel = CancellationToken::new();
    let browser = MockBrowser::new()
        .with_profile(ACME, profile_page("1,200 followers"))
        .with_profile(GLOBEX, profile_page("3M followers"))
        .cancel_on_visit(ACME, cancel.clone());

    let listings = vec![
        Listing::new("https://www.linkedin.com/jobs/view/1").with_company_url(ACME),
        Listing::new("https://www.linkedin.com/jobs/view/2").with_company_url(GLOBEX),
        Listing::new("https://www.linkedin.com/jobs/view/3").with_company_url(ACME),
    ];

    let token = cancel.clone();
    let enrichment = with_session(
        browser.clone(),
        &credentials(),
        &SessionConfig::default(),
        &EnrichmentConfig::default(),
        move |session| async move { enrich(listings, session, &token).await }.boxed(),
    )
    .await
    .unwrap();

    assert!(enrichment.cancelled);
    assert_eq!(enrichment.lookups.len(), 1);
    assert_eq!(enrichment.listings[0].followers, Some(1_200));
    assert_eq!(enrichment.listings[1].followers, None);
    assert_eq!(enrichment.listings[2].followers, Some(1_200));
    assert_eq!(browser.visits(GLOBEX), 0);
    assert_eq!(browser.close_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_with_session_reports_login_failure() {
    let browser = MockBrowser::new().failing_login(5);

    let result = with_session(
        browser.clone(),
        &credentials(),
        &SessionConfig::default(),
        &EnrichmentConfig::default(),
        |_session| async { unreachable!("body must not run without a session") }.boxed(),
    )
    .await;

    assert!(matches!(result, Err(SessionError::LoginFailed { .. })));
    assert_eq!(browser.close_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_drop_closes_in_background() {
    let browser = MockBrowser::new();
    let session = open(browser.clone()).await.unwrap();

    drop(session);
    for _ in 0..10 {
        if browser.close_calls() > 0 {
            break;
        }
        tokio::task::yield_now().await;
    }

    assert_eq!(browser.close_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_followers_read_from_profile() {
    let browser = MockBrowser::new().with_profile(ACME, profile_page("12,345 followers"));
    let mut session = open(browser.clone()).await.unwrap();

    assert_eq!(session.followers(ACME).await, Some(12_345));

    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_followers_retry_landmark_failures() {
    let browser = MockBrowser::new()
        .with_profile(ACME, profile_page("4.5K followers"))
        .with_landmark_failures(ACME, 2);
    let mut session = open(browser.clone()).await.unwrap();

    assert_eq!(session.followers(ACME).await, Some(4_500));
    assert_eq!(browser.visits(ACME), 3);

    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_followers_give_up_after_max_attempts() {
    let browser = MockBrowser::new()
        .with_profile(ACME, profile_page("4.5K followers"))
        .with_landmark_failures(ACME, 3)
        .with_profile(GLOBEX, profile_page("980 followers"));
    let mut session = open(browser.clone()).await.unwrap();

    assert_eq!(session.followers(ACME).await, None);
    assert_eq!(browser.visits(ACME), 3);
    assert_eq!(session.followers(GLOBEX).await, Some(980));

    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_unparsable_profile_is_not_retried() {
    let browser = MockBrowser::new().with_profile(ACME, profile_page("many followers"));
    let mut session = open(browser.clone()).await.unwrap();

    assert_eq!(session.followers(ACME).await, None);
    assert_eq!(browser.visits(ACME), 1);

    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_courtesy_delay_between_profiles() {
    let browser = MockBrowser::new()
        .with_profile(ACME, profile_page("10 followers"))
        .with_profile(GLOBEX, profile_page("20 followers"));
    let mut session = open(browser).await.unwrap();

    let start = Instant::now();
    session.followers(ACME).await;
    session.followers(GLOBEX).await;

    assert_eq!(
        start.elapsed(),
        EnrichmentConfig::default().courtesy_delay()
    );

    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_courtesy_delay_across_subdomains() {
    let regional = "https://pl.linkedin.com/company/acme";
    let browser = MockBrowser::new()
        .with_profile(regional, profile_page("10 followers"))
        .with_profile(GLOBEX, profile_page("20 followers"));
    let mut session = open(browser).await.unwrap();

    let start = Instant::now();
    assert_eq!(session.followers(regional).await, Some(10));
    assert_eq!(session.followers(GLOBEX).await, Some(20));

    assert_eq!(
        start.elapsed(),
        EnrichmentConfig::default().courtesy_delay()
    );

    session.close().await.unwrap();
}
