//! Public and internal types for the rastercat API and pipeline.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::engine::tools::{file_name_string, normalize_path};
use crate::utils::config::CatalogueDefaults;

/// Sentinel stored in [`RasterRecord::crs`] when a raster has no `.prj` sidecar.
pub const CRS_NOT_AVAILABLE: &str = "N/A";

/// A geographic (x, y) pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The six affine coefficients mapping pixel (column, row) to geographic (x, y):
/// origin-x, pixel-width, row-rotation, origin-y, column-rotation, pixel-height.
/// Pixel-height is usually negative (north-up rasters).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoTransform(pub [f64; 6]);

impl GeoTransform {
    pub fn origin_x(&self) -> f64 {
        self.0[0]
    }

    pub fn pixel_width(&self) -> f64 {
        self.0[1]
    }

    pub fn row_rotation(&self) -> f64 {
        self.0[2]
    }

    pub fn origin_y(&self) -> f64 {
        self.0[3]
    }

    pub fn column_rotation(&self) -> f64 {
        self.0[4]
    }

    pub fn pixel_height(&self) -> f64 {
        self.0[5]
    }

    /// Move an origin that addresses the centre of the top-left pixel to that pixel's outer corner.
    pub fn centre_to_corner(self) -> Self {
        let [x, a, b, y, d, e] = self.0;
        GeoTransform([x - 0.5 * a - 0.5 * b, a, b, y - 0.5 * d - 0.5 * e, d, e])
    }
}

/// What a [`RasterReader`](crate::engine::raster::RasterReader) reports for one opened file.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterInfo {
    pub width: u32,
    pub height: u32,
    /// `None` when the file carries no affine transform at all (no GeoTIFF tags, no world file).
    pub geotransform: Option<GeoTransform>,
}

/// Closed footprint ring: bottom-left, top-left, top-right, bottom-right, bottom-left.
#[derive(Clone, Debug, PartialEq)]
pub struct Footprint {
    ring: [Coord; 5],
}

impl Footprint {
    pub fn from_corners(corners: [Coord; 4]) -> Self {
        Self {
            ring: [corners[0], corners[1], corners[2], corners[3], corners[0]],
        }
    }

    /// Rebuild from a decoded ring. Accepts 4 open or 5 closed vertices.
    pub fn from_ring(ring: &[Coord]) -> Option<Self> {
        match ring.len() {
            4 => Some(Self::from_corners([ring[0], ring[1], ring[2], ring[3]])),
            5 if ring[0] == ring[4] => Some(Self::from_corners([ring[0], ring[1], ring[2], ring[3]])),
            _ => None,
        }
    }

    pub fn ring(&self) -> &[Coord; 5] {
        &self.ring
    }

    /// Axis-aligned extent `(min_x, min_y, max_x, max_y)` of the ring, whatever the corner order.
    pub fn envelope(&self) -> (f64, f64, f64, f64) {
        self.ring.iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(min_x, min_y, max_x, max_y), c| {
                (min_x.min(c.x), min_y.min(c.y), max_x.max(c.x), max_y.max(c.y))
            },
        )
    }
}

/// One catalogued raster. Built by the file processor, consumed by the catalogue writer.
///
/// `minx`/`miny` come from the first corner and `maxx`/`maxy` from the third, exactly as the
/// geotransform arithmetic produced them; a rotated or south-up transform can make them degenerate.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterRecord {
    pub filepath: PathBuf,
    pub filename: String,
    pub crs: String,
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
    pub geometry: Footprint,
}

impl RasterRecord {
    pub fn new(path: &Path, corners: [Coord; 4], crs: String) -> Self {
        Self {
            filepath: normalize_path(path),
            filename: file_name_string(path),
            crs,
            minx: corners[0].x,
            miny: corners[0].y,
            maxx: corners[2].x,
            maxy: corners[2].y,
            geometry: Footprint::from_corners(corners),
        }
    }
}

/// Identifier appended to the output base path for one flushed batch. Unique within a run.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BatchId(String);

impl BatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Counters for one catalogue run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files found by discovery.
    pub discovered: usize,
    /// Files that produced a record.
    pub processed: usize,
    /// Files that failed (one log line each).
    pub failed: usize,
    /// Times the batch-ready hook fired (including empty batches, which write nothing).
    pub flushes: usize,
    /// Artifacts actually written.
    pub written: Vec<PathBuf>,
    /// Batches whose write failed; their records are lost.
    pub flush_failures: usize,
    /// True when the stop flag cut the run short.
    pub cancelled: bool,
}

/// Full options for a run (CLI, config file, lib).
#[derive(Clone, Debug)]
pub struct Opts {
    /// Output base path; each batch lands in `{output_base}_{batch_id}.gpkg`.
    pub output_base: PathBuf,
    /// Declared CRS for every written batch. Falls back to [`Self::default_crs`] when unset or blank.
    pub crs_target: Option<String>,
    /// Fallback CRS.
    pub default_crs: String,
    /// Descend into subdirectories. When false only the root's own files are considered.
    pub include_subfolders: bool,
    /// Completed tasks between flushes.
    pub batch_size: usize,
    /// Worker count override. When None, available parallelism capped by the FD limit.
    pub num_threads: Option<usize>,
    /// Directory names (case-insensitive) pruned from discovery.
    pub skip_keywords: Vec<String>,
    /// Raster extensions, with leading dot, matched case-insensitively.
    pub extensions: Vec<String>,
    /// Follow symbolic links during discovery.
    pub follow_links: bool,
    /// Halt discovery on the first unreadable directory instead of skipping it.
    pub strict: bool,
    /// Debug logging.
    pub verbose: bool,
    /// Show a progress bar of completed files.
    pub show_progress: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            output_base: PathBuf::from(CatalogueDefaults::OUTPUT_BASE),
            crs_target: None,
            default_crs: CatalogueDefaults::DEFAULT_CRS.to_string(),
            include_subfolders: true,
            batch_size: CatalogueDefaults::BATCH_SIZE,
            num_threads: None,
            skip_keywords: CatalogueDefaults::skip_keywords(),
            extensions: CatalogueDefaults::extensions(),
            follow_links: false,
            strict: true,
            verbose: false,
            show_progress: false,
        }
    }
}

impl Opts {
    /// Target CRS if set and non-blank, else the default CRS.
    pub fn effective_crs(&self) -> &str {
        self.crs_target
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.default_crs)
    }
}
