use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::error::Result;
use crate::export::report::Report;
use crate::models::SupplementRecord;

/// `body-composition-analysis-YYYY-MM-DD.txt`
pub fn default_report_filename(date: NaiveDate) -> String {
    format!("body-composition-analysis-{}.txt", date.format("%Y-%m-%d"))
}

/// Write the paginated report as plain text.
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let text = report.render();
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    info!(path = %path.display(), pages = report.pages().len(), "wrote report");
    Ok(())
}

/// Write one row per supplement. List fields are joined with "; ".
pub fn write_catalog_csv(records: &[SupplementRecord], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "name",
        "category",
        "description",
        "benefits",
        "dosage",
        "timing",
        "best_timing",
        "warnings",
        "stacks_with",
    ])?;

    for record in records {
        wtr.write_record([
            record.name.to_string(),
            record.category.to_string(),
            record.description.to_string(),
            record.benefits.join("; "),
            record.dosage.to_string(),
            record.timing.to_string(),
            record.best_timing.to_string(),
            record.warnings.join("; "),
            record.stacks_with.join("; "),
        ])?;
    }

    wtr.flush()?;
    info!(path = %path.display(), rows = records.len(), "wrote catalog csv");
    Ok(())
}
