//! Command-line argument definitions.

use clap::{Parser, ValueEnum};
use clipsift_catalog::ClipQuery;
use clipsift_models::OutputFormat;
use clipsift_pipeline::Padding;

/// Query a clip catalog and export the matching clips with ffmpeg.
#[derive(Parser, Debug)]
#[command(name = "clipsift", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the catalog CSV file
    #[arg(long, default_value = "clips.csv")]
    pub catalog: String,

    /// Print the matching clips instead of exporting them
    #[arg(long)]
    pub list: bool,

    /// Listing output format
    #[arg(long, value_enum, default_value_t = ListingFormat::Pretty)]
    pub output: ListingFormat,

    /// Only export clips with exactly this name
    #[arg(short = 'n', long)]
    pub clipname: Option<String>,

    /// Only export clips with rating >= minrating
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub minrating: u8,

    /// Only export clips with rating <= maxrating
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub maxrating: u8,

    /// Only export clips with duration >= minduration, in seconds
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub minduration: f64,

    /// Only export clips with duration <= maxduration, in seconds
    #[arg(long, default_value_t = f64::INFINITY, allow_negative_numbers = true)]
    pub maxduration: f64,

    /// Regex selecting which tags to export, matched as a substring
    #[arg(short = 't', long)]
    pub tag: Option<String>,

    /// Only export clips with t1 >= mint1, in seconds
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub mint1: f64,

    /// Only export clips with t1 <= maxt1, in seconds
    #[arg(long, default_value_t = f64::INFINITY, allow_negative_numbers = true)]
    pub maxt1: f64,

    /// Only export clips with t2 >= mint2, in seconds
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub mint2: f64,

    /// Only export clips with t2 <= maxt2, in seconds
    #[arg(long, default_value_t = f64::INFINITY, allow_negative_numbers = true)]
    pub maxt2: f64,

    /// Pad the start of each clip with this many seconds
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub prepad: f64,

    /// Pad the end of each clip with this many seconds
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub postpad: f64,

    /// Filetype to export as: mp3, mp4, gif, or wav
    #[arg(short = 'f', long, default_value_t = OutputFormat::Mp3)]
    pub filetype: OutputFormat,

    /// Normalize the loudness of the exported audio (mp4 only)
    #[arg(long)]
    pub normalize_audio: bool,

    /// Name output files without the tag/clip-number/rating prefix
    #[arg(long)]
    pub no_prefix: bool,

    /// Directory the exported files are written into
    #[arg(long, default_value = "export")]
    pub export_dir: String,

    /// Clear the export directory before exporting; runs that stop at
    /// --list or an empty selection never touch the directory
    #[arg(long)]
    pub clear_export: bool,

    /// Abort if two selected clips derive the same output path
    #[arg(long)]
    pub detect_collisions: bool,

    /// Keep placeholder records in the selection
    #[arg(long)]
    pub include_placeholder: bool,

    /// Suppress the per-clip progress lines
    #[arg(long)]
    pub silent: bool,

    /// Number of concurrent export workers
    #[arg(short = 'w', long, default_value_t = 4)]
    pub workers: usize,
}

impl Args {
    /// The query described by the filter flags.
    pub fn query(&self) -> ClipQuery {
        ClipQuery {
            name: self.clipname.clone(),
            min_rating: self.minrating,
            max_rating: self.maxrating,
            min_duration: self.minduration,
            max_duration: self.maxduration,
            tag_pattern: self.tag.clone(),
            min_t1: self.mint1,
            max_t1: self.maxt1,
            min_t2: self.mint2,
            max_t2: self.maxt2,
            include_placeholder: self.include_placeholder,
        }
    }

    /// The clip padding described by the padding flags.
    pub fn padding(&self) -> Padding {
        Padding {
            before: self.prepad,
            after: self.postpad,
        }
    }
}

/// How `--list` renders the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ListingFormat {
    /// Aligned text table
    #[default]
    Pretty,
    /// JSON array of catalog records
    Json,
}
