//! Output container formats for exported clips.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported export container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Audio only, MP3 encoded
    Mp3,
    /// Video with audio, H.264/AAC
    Mp4,
    /// Silent animated GIF
    Gif,
    /// Audio only, uncompressed PCM
    Wav,
}

impl OutputFormat {
    /// All supported formats.
    pub const ALL: &'static [OutputFormat] = &[
        OutputFormat::Mp3,
        OutputFormat::Mp4,
        OutputFormat::Gif,
        OutputFormat::Wav,
    ];

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "mp3",
            OutputFormat::Mp4 => "mp4",
            OutputFormat::Gif => "gif",
            OutputFormat::Wav => "wav",
        }
    }

    /// Whether the output carries a video stream.
    pub fn has_video(&self) -> bool {
        matches!(self, OutputFormat::Mp4 | OutputFormat::Gif)
    }

    /// Whether the output carries an audio stream.
    pub fn has_audio(&self) -> bool {
        !matches!(self, OutputFormat::Gif)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mp3" => Ok(OutputFormat::Mp3),
            "mp4" => Ok(OutputFormat::Mp4),
            "gif" => Ok(OutputFormat::Gif),
            "wav" => Ok(OutputFormat::Wav),
            _ => Err(FormatParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown output format '{0}': use mp3, mp4, gif, or wav")]
pub struct FormatParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_all_formats() {
        for format in OutputFormat::ALL {
            assert_eq!(format.extension().parse::<OutputFormat>().unwrap(), *format);
        }
        assert_eq!("MP4".parse::<OutputFormat>().unwrap(), OutputFormat::Mp4);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("flv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_stream_layout() {
        assert!(OutputFormat::Mp4.has_video());
        assert!(OutputFormat::Mp4.has_audio());
        assert!(OutputFormat::Gif.has_video());
        assert!(!OutputFormat::Gif.has_audio());
        assert!(!OutputFormat::Mp3.has_video());
        assert!(!OutputFormat::Wav.has_video());
    }
}
