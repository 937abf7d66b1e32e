use jobscout_browser::{BrowserActions, BrowserEngine, BrowserError};
use jobscout_core::BrowserConfig;
use std::time::Duration;

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_browser_engine_launch_and_close() {
    let mut engine = BrowserEngine::launch(&BrowserConfig::default())
        .await
        .expect("launch browser");
    engine.close().await.expect("close browser");

    // Second close is a no-op
    assert!(engine.close().await.is_ok());
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_navigation_and_source() {
    let mut engine = BrowserEngine::launch(&BrowserConfig::default())
        .await
        .expect("launch browser");

    engine
        .navigate("https://example.com")
        .await
        .expect("navigate");
    engine
        .wait_for_selector("h1", Duration::from_secs(10))
        .await
        .expect("heading rendered");
    let html = engine.page_source().await.expect("page source");
    assert!(html.contains("Example Domain"));

    engine.close().await.expect("close browser");
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_actions_fail_after_close() {
    let mut engine = BrowserEngine::launch(&BrowserConfig::default())
        .await
        .expect("launch browser");
    engine.close().await.expect("close browser");

    let err = engine.navigate("https://example.com").await.unwrap_err();
    assert!(matches!(err, BrowserError::Closed));
}
