//! rastercat: concurrent raster cataloguer.
//!
//! Walks a directory tree, finds GeoTIFF/PNG rasters, extracts each file's footprint and CRS,
//! and writes the records in batches to GeoPackage files while streaming progress lines to an
//! observer.

pub mod catalogue;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::debug;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::pipeline::{Observer, RunContext, spawn_observer};
use crate::utils::config::CatalogueDefaults;

/// Result alias used by public rastercat API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: catalogue `root` with `opts`, streaming progress lines to `observer`.
///
/// Uses the default collaborators (file raster reader, default CRS parser, GeoPackage writer).
/// The observer drains the log every [`CatalogueDefaults::LOG_DRAIN_INTERVAL`] on its own thread and
/// has seen every line by the time this returns. For custom collaborators build a [`RunContext`]
/// and call [`catalogue::catalogue_dir_with`].
///
/// ```ignore
/// let opts = rastercat::Opts { output_base: "out/catalogue".into(), ..Default::default() };
/// let summary = rastercat::catalogue_dir(Path::new("/data/rasters"), &opts, |line: &str| println!("{line}"))?;
/// ```
pub fn catalogue_dir<O>(root: &Path, opts: &Opts, observer: O) -> Result<RunSummary>
where
    O: Observer + 'static,
{
    catalogue_dir_cancellable(root, opts, observer, Arc::new(AtomicBool::new(false)))
}

/// [`catalogue_dir`] with a caller-owned stop flag. Raising it stops new file tasks from starting;
/// whatever was already completed is still flushed.
pub fn catalogue_dir_cancellable<O>(
    root: &Path,
    opts: &Opts,
    observer: O,
    cancel: Arc<AtomicBool>,
) -> Result<RunSummary>
where
    O: Observer + 'static,
{
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );

    let (ctx, drain) = RunContext::with_cancel(cancel);
    let observer_handle = spawn_observer(drain, CatalogueDefaults::LOG_DRAIN_INTERVAL, observer);
    let result = catalogue::catalogue_dir(root, opts, &ctx);
    // Last producer gone: the observer drains what is left and exits.
    drop(ctx);
    observer_handle
        .join()
        .map_err(|_| anyhow::anyhow!("observer thread panicked"))?;
    result
}
