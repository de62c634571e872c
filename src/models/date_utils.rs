//! Module for handling wire date parsing.

use chrono::{NaiveDate, NaiveDateTime};

/// Configuration for date format handling
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing dates
    pub date_formats: Vec<String>,
    /// List of date-time format strings to try when parsing timestamps
    pub datetime_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2023-01-15
                "%d-%m-%Y".to_string(), // European: 15-01-2023
                "%d.%m.%Y".to_string(), // German/Danish: 15.01.2023
                "%Y%m%d".to_string(),   // Compact: 20230115
            ],
            datetime_formats: vec![
                "%Y-%m-%dT%H:%M:%S%.f".to_string(), // 2023-01-15T10:30:00.123
                "%Y-%m-%dT%H:%M:%S".to_string(),    // 2023-01-15T10:30:00
                "%Y-%m-%d %H:%M:%S".to_string(),    // 2023-01-15 10:30:00
            ],
            enable_format_detection: true,
        }
    }
}

/// Parse a date string with multiple format attempts
///
/// Server payloads sometimes carry full timestamps in date fields; when no
/// date format matches, the date part of a recognised timestamp is used.
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();

    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, detected_format) {
                return Some(date);
            }
        }
    }

    parse_datetime_string(s, config).map(|dt| dt.date())
}

/// Parse a timestamp string with multiple format attempts
#[must_use]
pub fn parse_datetime_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDateTime> {
    let s = s.trim();

    config
        .datetime_formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}

/// Try to detect the date format based on string patterns
fn detect_date_format(s: &str) -> Option<&'static str> {
    // YYYY/MM/DD or DD/MM/YYYY
    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d");
            } else if parts[2].len() == 4 {
                return Some("%d/%m/%Y");
            }
        }
    }

    None
}
