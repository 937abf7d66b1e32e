use clap::Parser;
use jobscout_core::{ExportConfig, JobScoutError, SearchQuery, TimeRange};
use jobscout_export::{default_base_name, ExportFormat};
use std::num::NonZeroU32;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "jobscout", version)]
#[command(about = "Search job listings and export them, optionally with company follower counts")]
pub struct Cli {
    /// Job title or keywords to search for
    #[arg(long, short)]
    pub keywords: String,

    /// Location to search in
    #[arg(long, short)]
    pub location: String,

    /// Only listings posted within this window (day, week, month)
    #[arg(long)]
    pub time_range: Option<TimeRange>,

    /// Maximum number of listings to collect
    #[arg(long, default_value = "25")]
    pub limit: NonZeroU32,

    /// Offset of the first result; must be a multiple of 25
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Log in and add company follower counts
    #[arg(long)]
    pub enrich: bool,

    /// Output path without extension
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Output format; repeat for several (csv, json, xlsx)
    #[arg(long = "format", default_values = ["csv", "xlsx"])]
    pub formats: Vec<ExportFormat>,

    /// Configuration file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Search query described by the arguments.
    pub fn query(&self) -> Result<SearchQuery, JobScoutError> {
        SearchQuery::new(self.keywords.trim(), self.location.trim())
            .with_time_range(self.time_range)
            .with_limit(self.limit)
            .with_offset(self.offset)
    }

    /// Export base path: `--output` if given, else the default name inside
    /// the configured output directory.
    pub fn output_base(&self, export: &ExportConfig) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            export
                .output_dir
                .join(default_base_name(&self.keywords, &self.location))
        })
    }

    /// Requested formats, duplicates removed, first occurrence kept.
    pub fn formats(&self) -> Vec<ExportFormat> {
        let mut formats = Vec::with_capacity(self.formats.len());
        for format in &self.formats {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }
        formats
    }
}
