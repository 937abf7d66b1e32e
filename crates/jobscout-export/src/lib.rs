//! JobScout Export - Writes listings to CSV, JSON or XLSX files.
//!
//! Columns always appear in the same order:
//! `title, company_name, company_url, location, url, date_posted_text,
//! date_posted_iso, company_logo_url, followers`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod format;
pub mod row;
pub mod writer;

pub use error::{ExportError, Result};
pub use format::{default_base_name, ExportFormat, ExportOutcome};
pub use row::{ExportRow, COLUMNS};
pub use writer::{export, export_all, output_path};
