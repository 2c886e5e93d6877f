//! Catalog record types.

use crate::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic validation error for a single catalog record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Rating outside the 0-10 scale
    #[error("rating {0} is out of range (0-10)")]
    RatingOutOfRange(u8),
    /// Duration is negative or not finite
    #[error("duration {0} is not a non-negative finite number")]
    InvalidDuration(f64),
    /// Start timestamp does not precede the end timestamp
    #[error("start '{start}' is not before end '{end}'")]
    StartNotBeforeEnd { start: String, end: String },
}

/// One row of catalog metadata describing a time range within a source
/// media stream.
///
/// Records are owned by the catalog and read-only after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipRecord {
    /// Display name, not required to be unique.
    pub name: String,
    /// Grouping key.
    pub tag: String,
    /// Sequence number within the tag, used only for display prefixes.
    pub nclip: u32,
    /// Quality rating on a 0-10 scale; 0 is reserved for placeholder
    /// entries.
    pub rating: u8,
    /// Clip length in seconds.
    pub duration: f64,
    /// Start of the range within the source stream.
    pub t1: Timestamp,
    /// End of the range within the source stream.
    pub t2: Timestamp,
    /// Source locator handed to the exporter (URL or local path).
    pub link: String,
}

impl ClipRecord {
    /// Semantic checks the serde layer cannot express: rating scale,
    /// finite non-negative duration, and `t1 < t2`.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.rating > 10 {
            return Err(RecordError::RatingOutOfRange(self.rating));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(RecordError::InvalidDuration(self.duration));
        }
        if self.t1.seconds() >= self.t2.seconds() {
            return Err(RecordError::StartNotBeforeEnd {
                start: self.t1.to_string(),
                end: self.t2.to_string(),
            });
        }
        Ok(())
    }

    /// Identity used for duplicate-row detection: the fields that make a
    /// row the same clip, ignoring rating/duration annotations.
    pub fn dedup_key(&self) -> (String, String, String, String, String) {
        (
            self.name.clone(),
            self.tag.clone(),
            self.t1.to_string(),
            self.t2.to_string(),
            self.link.clone(),
        )
    }

    /// Whether this record is a placeholder entry, by case-insensitive
    /// name comparison.
    pub fn is_placeholder(&self) -> bool {
        self.name.eq_ignore_ascii_case("placeholder")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, rating: u8, t1: &str, t2: &str) -> ClipRecord {
        ClipRecord {
            name: name.to_string(),
            tag: "raid".to_string(),
            nclip: 1,
            rating,
            duration: 30.0,
            t1: t1.parse().unwrap(),
            t2: t2.parse().unwrap(),
            link: "https://example.com/vod/123".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_record() {
        assert!(record("Opener", 7, "1:00", "1:30").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_rating_out_of_range() {
        let result = record("Opener", 11, "1:00", "1:30").validate();
        assert_eq!(result, Err(RecordError::RatingOutOfRange(11)));
    }

    #[test]
    fn test_validate_rejects_inverted_time_range() {
        let result = record("Opener", 7, "2:00", "1:30").validate();
        assert!(matches!(result, Err(RecordError::StartNotBeforeEnd { .. })));
    }

    #[test]
    fn test_validate_rejects_equal_timestamps() {
        let result = record("Opener", 7, "1:30", "90").validate();
        assert!(matches!(result, Err(RecordError::StartNotBeforeEnd { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_duration() {
        let mut rec = record("Opener", 7, "1:00", "1:30");
        rec.duration = f64::NAN;
        assert!(matches!(rec.validate(), Err(RecordError::InvalidDuration(_))));
        rec.duration = -1.0;
        assert!(matches!(rec.validate(), Err(RecordError::InvalidDuration(_))));
    }

    #[test]
    fn test_is_placeholder_ignores_case() {
        assert!(record("Placeholder", 0, "1:00", "1:30").is_placeholder());
        assert!(record("PLACEHOLDER", 5, "1:00", "1:30").is_placeholder());
        assert!(record("placeholder", 9, "1:00", "1:30").is_placeholder());
        assert!(!record("Placeholder2", 0, "1:00", "1:30").is_placeholder());
    }

    #[test]
    fn test_dedup_key_uses_normalized_timestamps() {
        let a = record("Opener", 7, "90", "120");
        let b = record("Opener", 3, "1:30", "2:00");
        assert_eq!(a.dedup_key(), b.dedup_key());
    }
}
