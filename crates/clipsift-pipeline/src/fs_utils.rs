//! Filesystem helpers for the export directory.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{PipelineError, PipelineResult};

/// Ensure the export directory exists, optionally clearing it first.
///
/// With `clear` set, an existing directory is removed together with its
/// contents before being recreated. Creation is recursive, so nested export
/// paths work out of the box.
pub async fn prepare_export_dir(dir: impl AsRef<Path>, clear: bool) -> PipelineResult<()> {
    let dir = dir.as_ref();

    if clear && dir.exists() {
        info!(dir = %dir.display(), "clearing export directory");
        tokio::fs::remove_dir_all(dir)
            .await
            .map_err(|e| PipelineError::export_dir(dir, e))?;
    }

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| PipelineError::export_dir(dir, e))?;
    debug!(dir = %dir.display(), "export directory ready");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::{sanitize_path, OutputPathBuilder};
    use clipsift_models::{ClipRecord, OutputFormat, Timestamp};
    use tempfile::TempDir;

    #[tokio::test]
    async fn creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("export/nested");

        prepare_export_dir(&dir, false).await.unwrap();

        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn keeps_existing_files_without_clear() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("export");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("old.mp3"), b"x").unwrap();

        prepare_export_dir(&dir, false).await.unwrap();

        assert!(dir.join("old.mp3").exists());
    }

    #[tokio::test]
    async fn clear_removes_previous_contents() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("export");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("old.mp3"), b"x").unwrap();

        prepare_export_dir(&dir, true).await.unwrap();

        assert!(dir.is_dir());
        assert!(!dir.join("old.mp3").exists());
    }

    // The directory that gets created and the directory embedded in job
    // paths must come from the same sanitized string, or every job
    // targets a directory that was never made.
    #[tokio::test]
    async fn sanitized_export_dir_matches_derived_job_paths() {
        let tmp = TempDir::new().unwrap();
        let raw = tmp.path().join("my exports").to_string_lossy().into_owned();

        let export_dir = sanitize_path(&raw);
        prepare_export_dir(&export_dir, false).await.unwrap();

        let paths = OutputPathBuilder::new(export_dir.as_str(), OutputFormat::Mp3);
        let output = paths.build(&ClipRecord {
            name: "opener".to_string(),
            tag: "raids".to_string(),
            nclip: 1,
            rating: 5,
            duration: 20.0,
            t1: Timestamp::from_seconds(60.0),
            t2: Timestamp::from_seconds(80.0),
            link: "https://example.com/v".to_string(),
        });

        let parent = Path::new(&output).parent().unwrap();
        assert_eq!(parent, Path::new(export_dir.as_str()));
        assert!(parent.is_dir());
    }
}
