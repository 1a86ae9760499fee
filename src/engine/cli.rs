//! CLI command handler: merge config file and flags, run the catalogue, report the summary.

use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::arg_parser::Cli;
use crate::pipeline::Observer;
use crate::utils::rastercat_toml::{apply_file_to_opts, load_rastercat_toml};
use crate::utils::{log_progress_line, setup_logging};
use crate::{Opts, RunSummary, catalogue_dir_cancellable};

/// Renders progress-log lines through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleObserver;

impl Observer for ConsoleObserver {
    fn on_message(&mut self, message: &str) {
        log_progress_line(message);
    }
}

/// Defaults, then `.rastercat.toml` in DIR, then flags.
pub fn setup_opts(cli: &Cli) -> Opts {
    let mut opts = Opts::default();
    if let Some(file) = load_rastercat_toml(&cli.dir) {
        apply_file_to_opts(&file, &mut opts);
    }
    if let Some(v) = &cli.output {
        opts.output_base = v.clone();
    }
    if let Some(v) = &cli.crs {
        opts.crs_target = Some(v.clone());
    }
    if let Some(v) = &cli.default_crs {
        opts.default_crs = v.clone();
    }
    if let Some(v) = cli.subfolders {
        opts.include_subfolders = v;
    }
    if let Some(v) = cli.batch_size {
        opts.batch_size = v;
    }
    if let Some(v) = cli.threads {
        opts.num_threads = Some(v);
    }
    if !cli.skip.is_empty() {
        opts.skip_keywords = cli.skip.clone();
    }
    if !cli.ext.is_empty() {
        opts.extensions = cli.ext.clone();
    }
    if let Some(v) = cli.follow_links {
        opts.follow_links = v;
    }
    if let Some(v) = cli.strict {
        opts.strict = v;
    }
    if let Some(v) = cli.progress {
        opts.show_progress = v;
    }
    if let Some(v) = cli.verbose {
        opts.verbose = v;
    }
    opts
}

fn report(summary: &RunSummary) {
    info!(
        "Catalogued {} of {} files into {} artifact(s); {} failed.",
        summary.processed,
        summary.discovered,
        summary.written.len(),
        summary.failed
    );
    if summary.flush_failures > 0 {
        warn!(
            "{} batch(es) could not be saved; their records are not in any artifact",
            summary.flush_failures
        );
    }
}

/// Catalogue `cli.dir`. Ctrl+C stops new files from starting; finished work is still flushed.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let opts = setup_opts(cli);
    setup_logging(opts.verbose);
    if opts.batch_size == 0 {
        return Err(anyhow!("--batch-size must be at least 1"));
    }

    let cancel_requested = Arc::new(AtomicBool::new(false));
    let cancel_requested_handler = Arc::clone(&cancel_requested);
    ctrlc::set_handler(move || {
        cancel_requested_handler.store(true, Ordering::Relaxed);
    })
    .context("set Ctrl+C handler")?;

    debug!("Cataloguing {}...", cli.dir.display());
    let summary = catalogue_dir_cancellable(
        &cli.dir,
        &opts,
        ConsoleObserver,
        Arc::clone(&cancel_requested),
    )?;
    report(&summary);

    if summary.cancelled {
        return Err(anyhow!(
            "Cataloguing cancelled by user; completed batches were flushed"
        ));
    }
    Ok(())
}
