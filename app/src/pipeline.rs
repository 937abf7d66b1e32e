//! Search → enrich → export, independent of where pages and browsers come from.

use anyhow::Context;
use futures::FutureExt;
use jobscout_browser::{BrowserActions, BrowserError};
use jobscout_core::{AppConfig, Credentials, SearchQuery};
use jobscout_enrich::{enrich, with_session};
use jobscout_export::{export_all, ExportFormat, ExportOutcome};
use jobscout_scanner::{PageFetcher, Paginator, StopReason};
use std::future::Future;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

/// Everything one run needs beyond configuration.
#[derive(Debug)]
pub struct RunPlan {
    pub query: SearchQuery,
    /// Present when follower enrichment was requested
    pub credentials: Option<Credentials>,
    pub output_base: PathBuf,
    pub formats: Vec<ExportFormat>,
}

/// Follower enrichment figures for the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentStats {
    pub companies: usize,
    pub resolved: usize,
    pub cache_hits: usize,
}

#[derive(Debug)]
pub struct RunSummary {
    pub listings: usize,
    pub pages_fetched: u32,
    pub stop_reason: StopReason,
    pub enrichment: Option<EnrichmentStats>,
    pub outputs: Vec<ExportOutcome>,
    pub cancelled: bool,
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The search returned nothing; no browser was launched and nothing was
    /// exported
    NoListings { stop_reason: StopReason },
    Completed(RunSummary),
}

/// Run the pipeline once.
///
/// `launch` is only called when enrichment was requested and the search
/// found listings. Cancellation stops paging and enrichment; whatever was
/// collected is still exported.
pub async fn run_pipeline<F, B, L, Fut>(
    fetcher: F,
    launch: L,
    plan: &RunPlan,
    config: &AppConfig,
    cancel: &CancellationToken,
) -> anyhow::Result<RunOutcome>
where
    F: PageFetcher,
    B: BrowserActions + 'static,
    L: FnOnce() -> Fut,
    Fut: Future<Output = Result<B, BrowserError>>,
{
    let report = Paginator::new(fetcher).run(&plan.query, cancel).await;

    if report.listings.is_empty() {
        tracing::info!(
            "No listings found for '{}' in '{}' ({:?})",
            plan.query.keywords,
            plan.query.location,
            report.stop_reason
        );
        return Ok(RunOutcome::NoListings {
            stop_reason: report.stop_reason,
        });
    }

    let mut listings = report.listings;
    let mut enrichment = None;

    if let Some(credentials) = &plan.credentials {
        if cancel.is_cancelled() {
            tracing::warn!("Run cancelled, skipping follower enrichment");
        } else {
            let browser = launch().await.context("failed to launch browser")?;
            let token = cancel.clone();
            let result = with_session(
                browser,
                credentials,
                &config.session,
                &config.enrichment,
                move |session| async move { enrich(listings, session, &token).await }.boxed(),
            )
            .await
            .context("could not open an authenticated session")?;

            enrichment = Some(EnrichmentStats {
                companies: result.lookups.len(),
                resolved: result.resolved(),
                cache_hits: result.cache_hits,
            });
            listings = result.listings;
        }
    }

    let outputs = export_all(&listings, &plan.output_base, &plan.formats)
        .context("failed to export listings")?;

    Ok(RunOutcome::Completed(RunSummary {
        listings: listings.len(),
        pages_fetched: report.pages_fetched,
        stop_reason: report.stop_reason,
        enrichment,
        outputs,
        cancelled: cancel.is_cancelled(),
    }))
}
