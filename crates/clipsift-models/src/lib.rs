//! Shared data model for the clipsift workspace.
//!
//! This crate provides the types every other crate consumes:
//! - Catalog clip records and their validation rules
//! - Timestamp parsing and canonical rendering
//! - Output container formats
//! - Export jobs derived from a filtered selection

pub mod clip;
pub mod format;
pub mod job;
pub mod timestamp;

// Re-export common types
pub use clip::{ClipRecord, RecordError};
pub use format::{FormatParseError, OutputFormat};
pub use job::ExportJob;
pub use timestamp::{format_seconds, parse_timestamp, Timestamp, TimestampError};
