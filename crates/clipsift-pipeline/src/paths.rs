//! Output path derivation for export jobs.
//!
//! Every job writes to `<export_dir>/<prefix><name>.<ext>` where the prefix
//! encodes the clip's tag, clip number and rating. The whole path is
//! sanitized for shell friendliness: spaces become underscores, commas and
//! single quotes are dropped.

use clipsift_models::{ClipRecord, OutputFormat};

/// Derives output file paths for clip records.
#[derive(Debug, Clone)]
pub struct OutputPathBuilder {
    export_dir: String,
    format: OutputFormat,
    with_prefix: bool,
}

impl OutputPathBuilder {
    /// Create a builder targeting `export_dir` with the given output format.
    ///
    /// The metadata prefix is enabled by default.
    pub fn new(export_dir: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            export_dir: export_dir.into(),
            format,
            with_prefix: true,
        }
    }

    /// Enable or disable the `<tag>_C<nclip>_R<rating>_` prefix.
    pub fn with_prefix(mut self, with_prefix: bool) -> Self {
        self.with_prefix = with_prefix;
        self
    }

    /// Derive the sanitized output path for a record.
    pub fn build(&self, clip: &ClipRecord) -> String {
        let prefix = if self.with_prefix {
            format!("{}_C{:02}_R{:02}_", clip.tag, clip.nclip, clip.rating)
        } else {
            String::new()
        };
        let raw = format!(
            "{}/{}{}.{}",
            self.export_dir,
            prefix,
            clip.name,
            self.format.extension()
        );
        sanitize_path(&raw)
    }
}

/// Replace spaces with underscores and drop commas and single quotes.
///
/// Applied to the entire derived path, directory components included, so the
/// result is stable under re-application.
pub fn sanitize_path(path: &str) -> String {
    path.chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            ',' | '\'' => None,
            other => Some(other),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipsift_models::Timestamp;

    fn record(name: &str, tag: &str, nclip: u32, rating: u8) -> ClipRecord {
        ClipRecord {
            name: name.to_string(),
            tag: tag.to_string(),
            nclip,
            rating,
            duration: 20.0,
            t1: Timestamp::from_seconds(60.0),
            t2: Timestamp::from_seconds(80.0),
            link: "https://example.com/v".to_string(),
        }
    }

    #[test]
    fn prefix_zero_pads_clip_number_and_rating() {
        let paths = OutputPathBuilder::new("export", OutputFormat::Mp3);
        let got = paths.build(&record("opener", "raids", 3, 7));
        assert_eq!(got, "export/raids_C03_R07_opener.mp3");
    }

    #[test]
    fn no_prefix_drops_metadata() {
        let paths = OutputPathBuilder::new("export", OutputFormat::Mp4).with_prefix(false);
        let got = paths.build(&record("opener", "raids", 3, 7));
        assert_eq!(got, "export/opener.mp4");
    }

    #[test]
    fn sanitization_covers_the_whole_path() {
        let paths = OutputPathBuilder::new("my exports", OutputFormat::Mp3);
        let got = paths.build(&record("it's a long story, really", "raid night", 1, 2));
        assert_eq!(got, "my_exports/raid_night_C01_R02_its_a_long_story_really.mp3");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let once = sanitize_path("a b,c'd e");
        let twice = sanitize_path(&once);
        assert_eq!(once, "a_bcd_e");
        assert_eq!(once, twice);
    }

    #[test]
    fn distinct_names_can_collide_after_sanitization() {
        let paths = OutputPathBuilder::new("export", OutputFormat::Mp3).with_prefix(false);
        let a = paths.build(&record("clip one", "raids", 1, 5));
        let b = paths.build(&record("clip,one", "raids", 2, 6));
        assert_eq!(a, b);
    }
}
