use crate::error::ExportError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON array of row objects
    Json,
    /// Single-sheet workbook with a header row
    Xlsx,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xlsx => "xlsx",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// What an export call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing to write; no file was created
    Skipped,
    /// File written
    Written {
        /// Destination file
        path: PathBuf,
        /// Data rows, excluding any header
        rows: usize,
    },
}

/// Base file name for a search: `linkedin_jobs_<keywords>_<location>` with
/// whitespace runs replaced by `_`.
pub fn default_base_name(keywords: &str, location: &str) -> String {
    format!(
        "linkedin_jobs_{}_{}",
        underscored(keywords),
        underscored(location)
    )
}

fn underscored(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join("_")
}
