//! Catalogue a directory: discover rasters, process them on the worker pool, flush batches.

use anyhow::{Context, Result};
use kdam::Animation;
use log::debug;
use std::path::Path;
use std::sync::Arc;

use crate::engine::catalogue_writer::{CatalogueWriter, FlushOutcome, flush};
use crate::engine::crs::{CrsParser, DefaultCrsParser};
use crate::engine::gpkg::GeoPackageWriter;
use crate::engine::processor::FileProcessor;
use crate::engine::progress::{
    ProgressBarConfig, create_progress_bar, finish_progress_bar, progress_callback,
};
use crate::engine::raster::{FileRasterReader, RasterReader};
use crate::pipeline::{BatchScheduler, DiscoverOpts, RunContext, SkipPolicy, discover};
use crate::utils::config::WorkerThreadLimits;
use crate::utils::max_workers_by_fd_limit;
use crate::{Opts, RunSummary};

/// Pool size: the explicit override, else available parallelism capped by the FD limit.
pub fn resolve_threads(opts: &Opts) -> usize {
    if let Some(n) = opts.num_threads {
        return n.max(1);
    }
    let limits = WorkerThreadLimits::current();
    let avail = limits.all_threads.max(limits.floor);
    match max_workers_by_fd_limit() {
        Some(cap) => avail.min(cap).max(limits.floor),
        None => avail,
    }
}

/// Catalogue `root` with the default reader, CRS parser and GeoPackage writer.
pub fn catalogue_dir(root: &Path, opts: &Opts, ctx: &RunContext) -> Result<RunSummary> {
    catalogue_dir_with(
        root,
        opts,
        ctx,
        &FileProcessor::new(FileRasterReader, DefaultCrsParser),
        &GeoPackageWriter,
    )
}

/// Catalogue `root` with caller-supplied collaborators.
///
/// Discovery errors end the run (strict mode). Per-file and per-batch failures only produce log
/// lines and are counted in the returned [`RunSummary`].
pub fn catalogue_dir_with<R, C>(
    root: &Path,
    opts: &Opts,
    ctx: &RunContext,
    processor: &FileProcessor<R, C>,
    writer: &dyn CatalogueWriter,
) -> Result<RunSummary>
where
    R: RasterReader,
    C: CrsParser,
{
    let log = &ctx.log;
    log.emit("Starting discovery...");
    let policy = SkipPolicy::new(&opts.skip_keywords);
    let discover_opts = DiscoverOpts {
        include_subfolders: opts.include_subfolders,
        follow_links: opts.follow_links,
        strict: opts.strict,
    };
    let files = discover(root, &policy, &opts.extensions, &discover_opts, log)?;
    log.emit(format!("Discovered {} files.", files.len()));

    let mut summary = RunSummary {
        discovered: files.len(),
        ..Default::default()
    };

    if !files.is_empty()
        && let Some(parent) = opts.output_base.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let crs_target = opts.effective_crs().to_string();
    let num_threads = resolve_threads(opts);
    debug!("Declaring {crs_target} for every batch; {num_threads} workers");

    let bar = (opts.show_progress && !files.is_empty()).then(|| {
        create_progress_bar(ProgressBarConfig::new(
            files.len(),
            "Cataloguing",
            Animation::Classic,
        ))
    });
    let mut scheduler =
        BatchScheduler::new(opts.batch_size, num_threads).with_cancel(Arc::clone(&ctx.cancel));
    if let Some(cb) = progress_callback(&bar) {
        scheduler = scheduler.with_progress(cb);
    }

    let stats = scheduler.run(
        &files,
        |path| processor.process_logged(path, log),
        |records, batch_id| match flush(
            writer,
            &records,
            &crs_target,
            batch_id,
            &opts.output_base,
            log,
        ) {
            FlushOutcome::Written { path, .. } => summary.written.push(path),
            FlushOutcome::Failed { .. } => summary.flush_failures += 1,
            FlushOutcome::Skipped => {}
        },
    )?;
    if let Some(bar) = &bar {
        finish_progress_bar(bar);
    }

    summary.processed = stats.succeeded;
    summary.failed = stats.failed;
    summary.flushes = stats.flushes;
    summary.cancelled = stats.cancelled;

    if summary.cancelled {
        log.emit("Processing cancelled; completed batches were saved.");
    } else {
        log.emit("Processing complete!");
    }
    debug!("Run summary: {summary:?}");
    Ok(summary)
}
