use chrono::{DateTime, Utc};

use crate::consts::DATE_UNKNOWN;

/// Render `date_utc` for console display: RFC 3339 input becomes
/// `DD.MM.YYYY HH:MM UTC`, anything else passes through raw, absent or
/// empty becomes the unknown-date marker.
pub(super) fn format_launch_date(date_utc: Option<&str>) -> String {
    let raw = match date_utc {
        None | Some("") => return DATE_UNKNOWN.to_string(),
        Some(raw) => raw,
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Utc)
            .format("%d.%m.%Y %H:%M UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Cut `text` to at most `limit` characters (code points, not bytes),
/// appending "..." when anything was cut
pub(super) fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let cut: String = text.chars().take(limit).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

/// Cut `text` to at most `limit` characters with no marker
pub(super) fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        text.chars().take(limit).collect()
    } else {
        text.to_string()
    }
}
