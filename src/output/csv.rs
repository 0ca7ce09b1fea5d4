use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::consts::CSV_DETAILS_LIMIT;
use crate::error::ExportError;
use crate::launch::{LaunchRecord, Outcome};
use crate::output::format::truncate;

/// Column labels stay in Russian, matching the legacy export format
const CSV_HEADER: &str = "Номер полета,Миссия,Дата запуска (UTC),Успешность,Детали";

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

pub(crate) fn render_csv(records: &[LaunchRecord]) -> String {
    let mut out = String::new();
    let _ = write!(out, "{CSV_HEADER}");
    out.push('\n');

    for record in records {
        let flight_number = record
            .flight_number
            .map(|n| n.to_string())
            .unwrap_or_default();
        let name = record.name.as_deref().unwrap_or("");
        let date_utc = record.date_utc.as_deref().unwrap_or("");
        let outcome = Outcome::from_flag(record.success).csv_label();
        let details = truncate(record.details.as_deref().unwrap_or(""), CSV_DETAILS_LIMIT);
        let _ = write!(
            out,
            "{},{},{},{},{}",
            csv_escape(&flight_number),
            csv_escape(name),
            csv_escape(date_utc),
            csv_escape(outcome),
            csv_escape(&details),
        );
        out.push('\n');
    }

    out
}

/// Write the CSV export, overwriting `path`. Empty batches are skipped
/// without a notice.
pub(crate) fn export_csv(records: &[LaunchRecord], path: &Path) -> Result<(), ExportError> {
    if records.is_empty() {
        return Ok(());
    }
    fs::write(path, render_csv(records)).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    println!("Data saved to CSV (Excel): {}", path.display());
    Ok(())
}
