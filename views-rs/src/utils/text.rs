//! Small text helpers shared by the formatters

use chrono::{DateTime, Utc};

/// Format a timestamp the way every view shows it
pub fn format_utc(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Pick the singular form for exactly one item, the plural form otherwise
/// (zero included).
pub fn pluralize(count: u64, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Returns the trimmed value, or `None` when nothing but whitespace remains
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
