//! Common display helpers

use chrono::{DateTime, NaiveDateTime};

/// Placeholder for values the service did not send
pub const MISSING: &str = "--";

/// Show a value, or the placeholder when it is absent or blank
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => MISSING.to_string(),
    }
}

/// Truncate to at most `max_chars` characters, marking the cut with an ellipsis
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// Normalize the service's timestamps to `YYYY-MM-DD HH:MM`.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` and Unix seconds; anything else
/// is shown as sent.
pub fn format_timestamp(raw: &str) -> String {
    const OUT: &str = "%Y-%m-%d %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(OUT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format(OUT).to_string();
    }
    if let Ok(secs) = raw.parse::<i64>() {
        if let Some(dt) = DateTime::from_timestamp(secs, 0) {
            return dt.format(OUT).to_string();
        }
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("crawler")), "crawler");
        assert_eq!(or_dash(Some("  ")), MISSING);
        assert_eq!(or_dash(None), MISSING);
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a long description", 7), "a long…");
        assert_eq!(truncate_string("每日抓取任务说明", 5), "每日抓取…");
    }

    #[test]
    fn test_format_timestamp_variants() {
        assert_eq!(format_timestamp("2024-03-01T08:15:00Z"), "2024-03-01 08:15");
        assert_eq!(format_timestamp("2024-03-01 08:15:42"), "2024-03-01 08:15");
        assert_eq!(format_timestamp("0"), "1970-01-01 00:00");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
