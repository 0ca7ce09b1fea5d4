use std::fmt::Write;

use crate::consts::{DISPLAY_DETAILS_LIMIT, SEPARATOR_WIDTH, UNTITLED};
use crate::launch::{LaunchRecord, Outcome};
use crate::output::format::{format_launch_date, truncate_with_ellipsis};

/// Build the console view of a launch batch: a count summary followed by
/// one block per record, in input order (the fetch already sorts by
/// `date_utc` descending).
pub(crate) fn render_launches(records: &[LaunchRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nReceived {} launches", records.len());
    let _ = writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH));

    for (i, record) in records.iter().enumerate() {
        let name = record.name.as_deref().unwrap_or(UNTITLED);
        let _ = writeln!(out, "{}. {}", i + 1, name);
        let _ = writeln!(
            out,
            "   Date: {}",
            format_launch_date(record.date_utc.as_deref())
        );
        let _ = writeln!(
            out,
            "   Status: {}",
            Outcome::from_flag(record.success).display_label()
        );
        if let Some(details) = record.details.as_deref()
            && !details.is_empty()
        {
            let _ = writeln!(
                out,
                "   {}",
                truncate_with_ellipsis(details, DISPLAY_DETAILS_LIMIT)
            );
        }
        let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
    }

    out
}
