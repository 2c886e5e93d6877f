//! Timestamp parsing and canonical rendering.
//!
//! Catalog rows carry textual timestamps in `SS`, `MM:SS`, or `HH:MM:SS`
//! form, with optional fractional seconds. [`Timestamp`] keeps the
//! canonical text alongside the converted seconds so filtering and export
//! math never re-parse the raw string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Timestamp parsing error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimestampError {
    /// Timestamp string is empty
    #[error("timestamp cannot be empty")]
    Empty,
    /// Timestamp contains a negative component
    #[error("timestamp cannot be negative")]
    Negative,
    /// Invalid numeric value for a component
    #[error("invalid {0} value: '{1}'")]
    InvalidValue(&'static str, String),
    /// Too many colon-separated components
    #[error("invalid timestamp format '{0}': use SS, MM:SS, or HH:MM:SS")]
    InvalidFormat(String),
}

/// Parse a timestamp string to total seconds.
///
/// Supports `SS`, `MM:SS`, and `HH:MM:SS`, each with an optional
/// fractional part on the seconds component. Negative and non-finite
/// components are rejected.
///
/// # Examples
/// ```
/// use clipsift_models::timestamp::parse_timestamp;
/// assert_eq!(parse_timestamp("01:30:00").unwrap(), 5400.0);
/// assert_eq!(parse_timestamp("05:30").unwrap(), 330.0);
/// assert_eq!(parse_timestamp("90").unwrap(), 90.0);
/// ```
pub fn parse_timestamp(ts: &str) -> Result<f64, TimestampError> {
    const UNITS: [&str; 3] = ["seconds", "minutes", "hours"];

    let ts = ts.trim();
    if ts.is_empty() {
        return Err(TimestampError::Empty);
    }

    let parts: Vec<&str> = ts.split(':').collect();
    if parts.len() > 3 {
        return Err(TimestampError::InvalidFormat(ts.to_string()));
    }

    let mut total = 0.0;
    for (magnitude, part) in parts.iter().rev().enumerate() {
        let value: f64 = part
            .trim()
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| TimestampError::InvalidValue(UNITS[magnitude], part.to_string()))?;
        if value < 0.0 {
            return Err(TimestampError::Negative);
        }
        total += value * 60f64.powi(magnitude as i32);
    }
    Ok(total)
}

/// Render non-negative seconds as canonical `MM:SS` or `HH:MM:SS` text,
/// keeping a millisecond fraction only when one is present.
pub fn format_seconds(total_secs: f64) -> String {
    debug_assert!(total_secs >= 0.0);

    let hours = (total_secs / 3600.0).floor() as u32;
    let mins = ((total_secs % 3600.0) / 60.0).floor() as u32;
    let secs = total_secs % 60.0;

    let secs_text = if (secs - secs.floor()).abs() > 0.0005 {
        format!("{:06.3}", secs)
    } else {
        format!("{:02}", secs.floor() as u32)
    };

    if hours > 0 {
        format!("{:02}:{:02}:{}", hours, mins, secs_text)
    } else {
        format!("{:02}:{}", mins, secs_text)
    }
}

/// A clip timestamp: canonical text plus the converted seconds.
///
/// Deserializes from the raw catalog string, so an unparseable value is
/// rejected at ingestion rather than at comparison time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp {
    text: String,
    seconds: f64,
}

impl Timestamp {
    /// Build a timestamp directly from seconds.
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            text: format_seconds(seconds),
            seconds,
        }
    }

    /// Converted value in seconds.
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Canonical textual form (`MM:SS` or `HH:MM:SS`).
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let seconds = parse_timestamp(s)?;
        Ok(Self::from_seconds(seconds))
    }
}

impl TryFrom<String> for Timestamp {
    type Error = TimestampError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.text
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
