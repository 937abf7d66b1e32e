use crate::error::Result;
use crate::format::{ExportFormat, ExportOutcome};
use crate::row::{ExportRow, COLUMNS};
use jobscout_core::Listing;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};

/// Write `listings` to `<base_path>.<ext>` in `format`.
///
/// Empty input writes nothing and returns [`ExportOutcome::Skipped`]. Parent
/// directories are created as needed; an existing file is overwritten.
pub fn export(listings: &[Listing], base_path: &Path, format: ExportFormat) -> Result<ExportOutcome> {
    if listings.is_empty() {
        tracing::warn!("No listings to export, skipping {} output", format);
        return Ok(ExportOutcome::Skipped);
    }

    let path = output_path(base_path, format);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let rows: Vec<ExportRow> = listings.iter().map(ExportRow::from).collect();
    match format {
        ExportFormat::Csv => write_csv(&path, &rows)?,
        ExportFormat::Json => write_json(&path, &rows)?,
        ExportFormat::Xlsx => write_xlsx(&path, &rows)?,
    }

    tracing::info!("Exported {} row(s) to {}", rows.len(), path.display());
    Ok(ExportOutcome::Written {
        path,
        rows: rows.len(),
    })
}

/// Export once per format, stopping at the first failure.
pub fn export_all(
    listings: &[Listing],
    base_path: &Path,
    formats: &[ExportFormat],
) -> Result<Vec<ExportOutcome>> {
    formats
        .iter()
        .map(|format| export(listings, base_path, *format))
        .collect()
}

/// `base_path` with the format's extension appended.
///
/// Appends rather than replaces, so dots already in the base name (`Node.js`)
/// survive.
pub fn output_path(base_path: &Path, format: ExportFormat) -> PathBuf {
    let mut name = base_path.as_os_str().to_owned();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

fn write_csv(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;
    for row in rows {
        writer.write_record(row.cells())?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn write_xlsx(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet().set_name("Jobs")?;

    for (col, name) in (0u16..).zip(COLUMNS) {
        sheet.write_string_with_format(0, col, name, &header)?;
    }
    for (row_num, row) in (1u32..).zip(rows) {
        for (col, (name, value)) in (0u16..).zip(COLUMNS.iter().zip(row.cells())) {
            // Followers stay numeric so the sheet sorts on them
            if *name == "followers" {
                if let Some(followers) = row.followers {
                    sheet.write_number(row_num, col, followers as f64)?;
                }
            } else if !value.is_empty() {
                sheet.write_string(row_num, col, value)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
