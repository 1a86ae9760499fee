//! Application configuration constants.
//! Defaults and tuning in one place.

use std::sync::OnceLock;
use std::time::Duration;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    config_filename: String,
    worker_prefix: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                config_filename: format!(".{pkg}.toml"),
                worker_prefix: format!("{pkg}-worker"),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Per-directory config file read by the CLI (e.g. `.rastercat.toml`).
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }

    /// Thread name prefix for the file-processing pool.
    pub fn worker_prefix(&self) -> &str {
        &self.worker_prefix
    }
}

// ---- Catalogue defaults ----

/// Defaults for a run when neither the config file nor the CLI sets a value.
pub struct CatalogueDefaults;

impl CatalogueDefaults {
    /// Completed tasks between flushes.
    pub const BATCH_SIZE: usize = 50;
    /// Declared CRS when no target is given (OSGB 1936 / British National Grid).
    pub const DEFAULT_CRS: &'static str = "EPSG:27700";
    /// Output base when none is given.
    pub const OUTPUT_BASE: &'static str = "catalogue";
    /// Extension of every written artifact.
    pub const ARTIFACT_EXTENSION: &'static str = "gpkg";
    /// Recognized raster extensions.
    pub const EXTENSIONS: [&'static str; 2] = [".tif", ".png"];
    /// Directory names pruned from discovery.
    pub const SKIP_KEYWORDS: [&'static str; 2] = ["admin", "archiving"];
    /// Directory-name prefix pruned from discovery.
    pub const SKIP_PREFIX: &'static str = "00000";
    /// How often the observer drains the progress log.
    pub const LOG_DRAIN_INTERVAL: Duration = Duration::from_millis(100);

    pub fn extensions() -> Vec<String> {
        Self::EXTENSIONS.iter().map(|s| s.to_string()).collect()
    }

    pub fn skip_keywords() -> Vec<String> {
        Self::SKIP_KEYWORDS.iter().map(|s| s.to_string()).collect()
    }
}

// ---- Worker threads ----

/// Thread limits for the file-processing pool.
/// Use [`WorkerThreadLimits::current()`] to fill `all_threads` from rayon.
#[derive(Clone, Copy, Debug)]
pub struct WorkerThreadLimits {
    /// Available threads (from rayon); set by [`WorkerThreadLimits::current()`].
    pub all_threads: usize,
    /// Minimum pool size.
    pub floor: usize,
}

impl Default for WorkerThreadLimits {
    fn default() -> Self {
        Self {
            all_threads: 0,
            floor: Self::FLOOR_THREADS,
        }
    }
}

impl WorkerThreadLimits {
    pub const FLOOR_THREADS: usize = 1;

    /// Build limits with `all_threads` set from `rayon::current_num_threads()`.
    pub fn current() -> Self {
        Self {
            all_threads: rayon::current_num_threads(),
            ..Self::default()
        }
    }
}

// ---- Scheduler ----

/// Capacity of the worker → coordinator result channel. Workers block when the coordinator
/// is busy flushing and the channel is full.
pub const RESULT_CHANNEL_CAP: usize = 1024;
