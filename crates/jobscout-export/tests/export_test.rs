use chrono::NaiveDate;
use jobscout_core::Listing;
use jobscout_export::{export, export_all, output_path, ExportFormat, ExportOutcome};
use std::fs;
use tempfile::TempDir;

fn sample_listings() -> Vec<Listing> {
    let mut first = Listing::new("https://www.linkedin.com/jobs/view/1")
        .with_company_url("https://www.linkedin.com/company/acme");
    first.title = Some("Golang Developer".to_string());
    first.company_name = Some("Acme, Inc.".to_string());
    first.location = Some("Warsaw, Poland".to_string());
    first.date_posted_text = Some("2 days ago".to_string());
    first.date_posted = NaiveDate::from_ymd_opt(2025, 6, 2);
    first.followers = Some(1_200);

    let mut second = Listing::new("https://www.linkedin.com/jobs/view/2");
    second.title = Some("Backend Engineer".to_string());

    vec![first, second]
}

#[test]
fn test_csv_header_and_rows() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("linkedin_jobs_golang_Poland");

    let outcome = export(&sample_listings(), &base, ExportFormat::Csv).unwrap();

    let path = dir.path().join("linkedin_jobs_golang_Poland.csv");
    assert_eq!(
        outcome,
        ExportOutcome::Written {
            path: path.clone(),
            rows: 2
        }
    );

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(
        lines[0],
        "title,company_name,company_url,location,url,date_posted_text,date_posted_iso,company_logo_url,followers"
    );
    assert_eq!(
        lines[1],
        "Golang Developer,\"Acme, Inc.\",https://www.linkedin.com/company/acme,\"Warsaw, Poland\",https://www.linkedin.com/jobs/view/1,2 days ago,2025-06-02,,1200"
    );
    assert_eq!(
        lines[2],
        "Backend Engineer,,,,https://www.linkedin.com/jobs/view/2,,,,"
    );
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_json_rows() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("jobs");

    export(&sample_listings(), &base, ExportFormat::Json).unwrap();

    let content = fs::read_to_string(dir.path().join("jobs.json")).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = rows.as_array().unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["followers"], 1200);
    assert_eq!(rows[0]["date_posted_iso"], "2025-06-02");
    assert!(rows[1]["followers"].is_null());
    assert!(rows[1]["company_url"].is_null());
}

#[test]
fn test_empty_input_is_skipped() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("nothing");

    let outcomes = export_all(&[], &base, &[ExportFormat::Csv, ExportFormat::Json]).unwrap();

    assert_eq!(outcomes, vec![ExportOutcome::Skipped, ExportOutcome::Skipped]);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_creates_missing_directories() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("out").join("nested").join("jobs");

    export(&sample_listings(), &base, ExportFormat::Csv).unwrap();

    assert!(dir.path().join("out/nested/jobs.csv").exists());
}

#[test]
fn test_dotted_base_name_keeps_its_dots() {
    let base = std::path::Path::new("linkedin_jobs_Node.js_Berlin");
    assert_eq!(
        output_path(base, ExportFormat::Csv),
        std::path::PathBuf::from("linkedin_jobs_Node.js_Berlin.csv")
    );
}

fn workbook_part(path: &std::path::Path, part: &str) -> String {
    use std::io::Read;

    let mut archive = zip::ZipArchive::new(fs::File::open(path).unwrap()).unwrap();
    let mut content = String::new();
    archive
        .by_name(part)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

#[test]
fn test_xlsx_workbook() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("linkedin_jobs_golang_Poland");

    let outcome = export(&sample_listings(), &base, ExportFormat::Xlsx).unwrap();

    let path = dir.path().join("linkedin_jobs_golang_Poland.xlsx");
    assert_eq!(
        outcome,
        ExportOutcome::Written {
            path: path.clone(),
            rows: 2
        }
    );

    let strings = workbook_part(&path, "xl/sharedStrings.xml");
    for column in jobscout_export::COLUMNS {
        assert!(strings.contains(column), "missing header {column}");
    }
    assert!(strings.contains("Golang Developer"));
    assert!(strings.contains("Backend Engineer"));

    let sheet = workbook_part(&path, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("<v>1200</v>"));
}

#[test]
fn test_xlsx_skipped_when_empty() {
    let dir = TempDir::new().unwrap();

    let outcome = export(&[], &dir.path().join("jobs"), ExportFormat::Xlsx).unwrap();

    assert_eq!(outcome, ExportOutcome::Skipped);
    assert!(!dir.path().join("jobs.xlsx").exists());
}
