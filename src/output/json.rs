use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::launch::LaunchRecord;

/// Write the JSON export, overwriting `path`: the records exactly as
/// fetched, pretty-printed, with non-ASCII text preserved unescaped.
/// An empty batch prints a notice and writes nothing.
pub(crate) fn export_json(records: &[LaunchRecord], path: &Path) -> Result<(), ExportError> {
    if records.is_empty() {
        println!("No data to save");
        return Ok(());
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    println!("\nData saved to file: {}", path.display());
    Ok(())
}
