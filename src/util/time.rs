//! Human-readable timestamps for generation log entries.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use std::fmt::Write;

use chrono::{DateTime, Local, TimeZone};

/// Format used when a configured format string cannot be rendered.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Current local time rendered with `format`.
pub fn local_timestamp(format: &str) -> String {
    format_timestamp(&Local::now(), format)
}

/// Render `at` with a strftime-style `format`, falling back to
/// [`DEFAULT_TIMESTAMP_FORMAT`] when `format` contains invalid specifiers.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", at.format(format)).is_ok() {
        return out;
    }
    log::warn!("invalid timestamp format {format:?}; using default");
    out.clear();
    if write!(out, "{}", at.format(DEFAULT_TIMESTAMP_FORMAT)).is_err() {
        out.clear();
    }
    out
}
