//! FFmpeg argument assembly for clip extraction.

use clipsift_models::OutputFormat;

/// Palette-based GIF rendering filter (single pass).
const GIF_FILTER: &str =
    "fps=12,scale=480:-1:flags=lanczos,split[s0][s1];[s0]palettegen[p];[s1][p]paletteuse";

/// EBU R128 loudness target for normalized audio.
const LOUDNORM_FILTER: &str = "loudnorm=I=-16:TP=-1.5:LRA=11";

/// Builder for one clip-extraction invocation.
///
/// The time range maps onto input-level `-ss`/`-to`, so the (start, end)
/// pair is handed to ffmpeg exactly as computed by the pipeline: a
/// negative start appears in the argv verbatim and ffmpeg's own seek
/// handling decides what happens.
#[derive(Debug, Clone)]
pub struct FfmpegCommand {
    source: String,
    output: String,
    start_secs: f64,
    end_secs: f64,
    format: OutputFormat,
    normalize_audio: bool,
}

impl FfmpegCommand {
    /// Create a command for one source range and destination.
    pub fn new(
        source: impl Into<String>,
        output: impl Into<String>,
        start_secs: f64,
        end_secs: f64,
    ) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            start_secs,
            end_secs,
            format: OutputFormat::Mp3,
            normalize_audio: false,
        }
    }

    /// Set the output container format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Request loudness normalization; only consulted for mp4 output.
    pub fn normalize_audio(mut self, normalize: bool) -> Self {
        self.normalize_audio = normalize;
        self
    }

    /// Build the full argv, without the leading program name.
    pub fn build_args(&self) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "-hide_banner".into(),
            "-loglevel".into(),
            "error".into(),
            "-y".into(),
            "-ss".into(),
            format!("{:.3}", self.start_secs),
            "-to".into(),
            format!("{:.3}", self.end_secs),
            "-i".into(),
            self.source.clone(),
        ];
        args.extend(self.format_args());
        args.push(self.output.clone());
        args
    }

    /// Codec and filter arguments per output format. Formats without a
    /// video stream lead with `-vn`; formats without audio trail their
    /// filter chain with `-an`.
    fn format_args(&self) -> Vec<String> {
        let owned = |items: &[&str]| -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        };
        let mut args = Vec::new();
        if !self.format.has_video() {
            args.push("-vn".to_string());
        }
        match self.format {
            OutputFormat::Mp3 => args.extend(owned(&["-c:a", "libmp3lame", "-b:a", "192k"])),
            OutputFormat::Mp4 => {
                args.extend(owned(&[
                    "-c:v",
                    "libx264",
                    "-preset",
                    "veryfast",
                    "-c:a",
                    "aac",
                    "-movflags",
                    "+faststart",
                ]));
                if self.normalize_audio {
                    args.push("-af".to_string());
                    args.push(LOUDNORM_FILTER.to_string());
                }
            }
            OutputFormat::Gif => args.extend(owned(&["-vf", GIF_FILTER])),
            OutputFormat::Wav => args.extend(owned(&["-c:a", "pcm_s16le"])),
        }
        if !self.format.has_audio() {
            args.push("-an".to_string());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(format: OutputFormat) -> FfmpegCommand {
        FfmpegCommand::new(
            "https://example.com/vod/123",
            "export/raid_C01_R07_Opener.mp3",
            58.0,
            93.0,
        )
        .format(format)
    }

    #[test]
    fn test_build_args_common_prefix() {
        let args = command(OutputFormat::Mp3).build_args();
        assert_eq!(args[0], "-hide_banner");
        assert!(args.contains(&"-y".to_string()));

        let ss = args.iter().position(|a| a == "-ss").unwrap();
        assert_eq!(args[ss + 1], "58.000");
        let to = args.iter().position(|a| a == "-to").unwrap();
        assert_eq!(args[to + 1], "93.000");

        let input = args.iter().position(|a| a == "-i").unwrap();
        assert!(ss < input && to < input);
        assert_eq!(args[input + 1], "https://example.com/vod/123");
        assert_eq!(args.last().unwrap(), "export/raid_C01_R07_Opener.mp3");
    }

    #[test]
    fn test_negative_start_is_passed_through() {
        let args = FfmpegCommand::new("src", "out.mp3", -2.0, 10.0).build_args();
        let ss = args.iter().position(|a| a == "-ss").unwrap();
        assert_eq!(args[ss + 1], "-2.000");
    }

    #[test]
    fn test_mp3_args_drop_video() {
        let args = command(OutputFormat::Mp3).build_args();
        assert!(args.contains(&"-vn".to_string()));
        assert!(args.contains(&"libmp3lame".to_string()));
        assert!(!args.contains(&"-c:v".to_string()));
        assert!(!args.contains(&"-an".to_string()));
    }

    #[test]
    fn test_mp4_args_encode_both_streams() {
        let args = command(OutputFormat::Mp4).build_args();
        assert!(args.contains(&"libx264".to_string()));
        assert!(args.contains(&"aac".to_string()));
        assert!(!args.contains(&"-af".to_string()));
        assert!(!args.contains(&"-vn".to_string()));
        assert!(!args.contains(&"-an".to_string()));
    }

    #[test]
    fn test_mp4_normalize_adds_loudnorm() {
        let args = command(OutputFormat::Mp4).normalize_audio(true).build_args();
        let af = args.iter().position(|a| a == "-af").unwrap();
        assert!(args[af + 1].starts_with("loudnorm="));
    }

    #[test]
    fn test_normalize_ignored_for_audio_only_output() {
        let args = command(OutputFormat::Mp3).normalize_audio(true).build_args();
        assert!(!args.contains(&"-af".to_string()));
    }

    #[test]
    fn test_gif_args_use_palette_and_drop_audio() {
        let args = command(OutputFormat::Gif).build_args();
        let vf = args.iter().position(|a| a == "-vf").unwrap();
        assert!(args[vf + 1].contains("palettegen"));
        assert!(args.contains(&"-an".to_string()));
        assert!(!args.contains(&"-vn".to_string()));
    }

    #[test]
    fn test_wav_args_use_pcm() {
        let args = command(OutputFormat::Wav).build_args();
        assert!(args.contains(&"pcm_s16le".to_string()));
        assert!(args.contains(&"-vn".to_string()));
    }
}
