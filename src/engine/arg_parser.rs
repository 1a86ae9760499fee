use clap::Parser;
use std::path::PathBuf;

struct DefaultArgs;

impl DefaultArgs {
    pub const DIR: &'static str = ".";
}

/// Catalogue georeferenced rasters into GeoPackage footprint layers.
#[derive(Clone, Parser)]
#[command(name = "rastercat")]
#[command(about = "Find GeoTIFF/PNG rasters under DIR and write their footprints to GeoPackage batches.")]
pub struct Cli {
    /// Directory to catalogue. Default: current directory.
    #[arg(value_name = "DIR", default_value = DefaultArgs::DIR)]
    pub dir: PathBuf,

    /// Output base path; each batch is written to `{OUTPUT}_{batch_id}.gpkg`.
    #[arg(long, short = 'o', value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// CRS declared for every written batch (e.g. EPSG:27700). Falls back to --default-crs.
    #[arg(long)]
    pub crs: Option<String>,

    /// Fallback CRS when --crs is not given.
    #[arg(long)]
    pub default_crs: Option<String>,

    /// Descend into subfolders (default true).
    #[arg(long, short = 's', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub subfolders: Option<bool>,

    /// Completed files between catalogue flushes.
    #[arg(long, short = 'b', value_parser = clap::value_parser!(usize))]
    pub batch_size: Option<usize>,

    /// Worker threads. Default: available parallelism capped by the open-file limit.
    #[arg(long, short = 't', value_parser = clap::value_parser!(usize))]
    pub threads: Option<usize>,

    /// Folder names to skip with their subfolders (case-insensitive). Replaces the defaults: --skip admin old
    #[arg(long, num_args = 1..)]
    pub skip: Vec<String>,

    /// Raster extensions to pick up. Replaces the defaults: --ext .tif .tiff .png
    #[arg(long, num_args = 1..)]
    pub ext: Vec<String>,

    /// Follow symbolic links.
    #[arg(long, short = 'f', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub follow_links: Option<bool>,

    /// Strict mode: fail on the first unreadable folder instead of skipping it (default true).
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub strict: Option<bool>,

    /// Show a progress bar of completed files.
    #[arg(long, short = 'p', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub progress: Option<bool>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}
