//! Export jobs derived from a filtered selection.

use crate::clip::ClipRecord;

/// One unit of export work: a selected record plus its computed time
/// range and destination path.
///
/// Jobs are created after filtering, consumed exactly once by a worker,
/// and discarded when the run ends. Nothing about a job is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportJob {
    /// The originating catalog record.
    pub clip: ClipRecord,
    /// Range start in seconds: `t1 - prepad`. Never clamped, so a prepad
    /// larger than `t1` produces a negative start that reaches the
    /// transcoder as-is.
    pub start_secs: f64,
    /// Range end in seconds: `t2 + postpad`.
    pub end_secs: f64,
    /// Sanitized destination path.
    pub output_path: String,
    /// 0-based submission order, used for diagnostics only.
    pub sequence_index: usize,
}

impl ExportJob {
    /// Length of the padded range in seconds.
    pub fn span_secs(&self) -> f64 {
        self.end_secs - self.start_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::Timestamp;

    #[test]
    fn test_span_includes_padding() {
        let job = ExportJob {
            clip: ClipRecord {
                name: "Opener".to_string(),
                tag: "raid".to_string(),
                nclip: 1,
                rating: 7,
                duration: 30.0,
                t1: Timestamp::from_seconds(60.0),
                t2: Timestamp::from_seconds(90.0),
                link: "https://example.com/vod/123".to_string(),
            },
            start_secs: 58.0,
            end_secs: 93.0,
            output_path: "export/raid_C01_R07_Opener.mp3".to_string(),
            sequence_index: 0,
        };
        assert_eq!(job.span_secs(), 35.0);
    }
}
