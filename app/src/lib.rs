//! JobScout application shell
//!
//! Parses arguments, loads configuration and credentials, wires the real
//! HTTP fetcher and Chromium browser into the pipeline, and prints a summary.
//! The search, enrichment and export logic lives in the `crates/` directory.

pub mod cli;
pub mod pipeline;

pub use cli::Cli;
pub use pipeline::{run_pipeline, EnrichmentStats, RunOutcome, RunPlan, RunSummary};

use anyhow::Context;
use jobscout_browser::BrowserEngine;
use jobscout_core::{AppConfig, Credentials};
use jobscout_export::ExportOutcome;
use jobscout_scanner::HttpPageFetcher;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Initialize tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,jobscout=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

/// Run one search from parsed arguments.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    info!("Starting JobScout v{}", env!("CARGO_PKG_VERSION"));

    dotenvy::dotenv().ok();

    let config =
        AppConfig::load_with_env(cli.config.as_deref()).context("failed to load configuration")?;
    let query = cli.query()?;

    // Fail on missing credentials before any network or browser work
    let credentials = if cli.enrich {
        Some(Credentials::from_env().context("--enrich requires account credentials")?)
    } else {
        None
    };

    let plan = RunPlan {
        query,
        credentials,
        output_base: cli.output_base(&config.export),
        formats: cli.formats(),
    };

    let cancel = CancellationToken::new();
    spawn_interrupt_handler(cancel.clone());

    let fetcher = HttpPageFetcher::new(&config.search)?;
    let browser_config = config.browser.clone();
    let outcome = run_pipeline(
        fetcher,
        || async move { BrowserEngine::launch(&browser_config).await },
        &plan,
        &config,
        &cancel,
    )
    .await?;

    print_summary(&outcome);
    Ok(())
}

fn spawn_interrupt_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, stopping and keeping partial results");
            cancel.cancel();
        }
    });
}

fn print_summary(outcome: &RunOutcome) {
    let summary = match outcome {
        RunOutcome::NoListings { stop_reason } => {
            println!("No listings found ({stop_reason:?}). Nothing exported.");
            return;
        }
        RunOutcome::Completed(summary) => summary,
    };

    println!(
        "Collected {} listing(s) from {} page(s) ({:?})",
        summary.listings, summary.pages_fetched, summary.stop_reason
    );
    if let Some(stats) = summary.enrichment {
        println!(
            "Follower counts: {}/{} companies resolved, {} cache hit(s)",
            stats.resolved, stats.companies, stats.cache_hits
        );
    }
    for output in &summary.outputs {
        if let ExportOutcome::Written { path, rows } = output {
            println!("Wrote {} row(s) to {}", rows, path.display());
        }
    }
    if summary.cancelled {
        println!("Run was interrupted; results are partial.");
    }
}
