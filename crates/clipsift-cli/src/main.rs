//! The clipsift binary: query a clip catalog, then list or export the
//! selection through the concurrent ffmpeg pipeline.

mod cli;
mod listing;

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use clipsift_catalog::{load_catalog, Catalog, ClipQuery, EmptyReason};
use clipsift_media::{check_ffmpeg, FfmpegExporter};
use clipsift_pipeline::{
    build_jobs, prepare_export_dir, sanitize_path, ExportProgress, OutputPathBuilder,
    PathCollision, PipelineError, TaskQueue, WorkerPool,
};

use crate::cli::{Args, ListingFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let started = Instant::now();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Keep machine-readable listings clean of decoration.
    let show_banner = !(args.list && args.output == ListingFormat::Json);
    if show_banner {
        banner();
    }

    init_tracing();

    run(args, started).await
}

fn banner() {
    println!("=============================================");
    println!("  clipsift - clip catalog query and export");
    println!("=============================================");
    println!();
}

/// Diagnostics go to stderr so stdout stays the product surface.
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_env("CLIPSIFT_LOG").unwrap_or_else(|_| EnvFilter::new("clipsift=warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(true)
                .with_target(true)
                .with_writer(io::stderr),
        )
        .with(env_filter)
        .init();
}

async fn run(args: Args, started: Instant) -> anyhow::Result<()> {
    let padding = args.padding();
    padding.validate()?;

    let catalog = load_catalog(&args.catalog)
        .with_context(|| format!("failed to load catalog '{}'", args.catalog))?;

    let query = args.query();
    debug!(
        ?query,
        filetype = %args.filetype,
        workers = args.workers,
        "run configured"
    );
    let selection = query.evaluate(&catalog)?;

    if selection.is_empty() {
        report_empty(&query, &catalog);
        return Ok(());
    }

    let records = selection.records(&catalog);

    if args.list {
        match args.output {
            ListingFormat::Pretty => print!("{}", listing::render_table(&records)),
            ListingFormat::Json => println!("{}", listing::render_json(&records)?),
        }
        return Ok(());
    }

    if records.len() > 1 {
        confirm(records.len())?;
    }

    // Job paths are sanitized whole, directory segment included, so the
    // directory created on disk has to be the sanitized one as well.
    let export_dir = sanitize_path(&args.export_dir);
    let paths =
        OutputPathBuilder::new(export_dir.as_str(), args.filetype).with_prefix(!args.no_prefix);
    // Jobs are derived before the export dir is touched so a tripped
    // collision check aborts without clearing anything.
    let jobs = match build_jobs(&records, &paths, padding, args.detect_collisions) {
        Ok(jobs) => jobs,
        Err(PipelineError::PathCollisions { collisions }) => {
            report_collisions(&collisions);
            return Err(PipelineError::PathCollisions { collisions }.into());
        }
        Err(err) => return Err(err.into()),
    };

    prepare_export_dir(&export_dir, args.clear_export).await?;
    check_ffmpeg()?;

    let total = jobs.len();
    let queue = Arc::new(TaskQueue::new(jobs));
    let progress = Arc::new(ExportProgress::new(total, args.silent));
    let exporter = Arc::new(FfmpegExporter::new(args.filetype, args.normalize_audio));

    let summary = WorkerPool::new(args.workers)
        .run(queue, exporter, progress)
        .await;
    // Per-job outcomes already reached the console; totals are debug-only.
    debug!(
        completed = summary.completed,
        failed = summary.failed,
        "export run finished"
    );

    println!();
    println!(
        "Time elapsed: {:.2} seconds.",
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

fn report_empty(query: &ClipQuery, catalog: &Catalog) {
    match query.diagnose_empty(catalog) {
        EmptyReason::NameNotFound { suggestions, .. } => {
            println!("There are no clips with the specified name.");
            if !suggestions.is_empty() {
                println!("Did you perhaps mean {}?", suggestions.join(", "));
            }
        }
        EmptyReason::NoMatch => println!("No clips met the specified query."),
    }
}

fn report_collisions(collisions: &[PathCollision]) {
    println!("These output paths would be written by more than one clip:");
    for collision in collisions {
        println!("  {} ({})", collision.path, collision.clip_names.join(", "));
    }
}

/// Gate multi-clip exports behind an explicit confirmation.
fn confirm(count: usize) -> anyhow::Result<()> {
    print!("A total of {count} clips were found. Press enter to export. ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    println!();
    Ok(())
}
