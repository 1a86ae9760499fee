//! Typed errors for discovery and per-file processing.
//!
//! Application-level plumbing uses `anyhow`; these enums exist where callers branch on the kind
//! of failure (per-file errors are logged and swallowed, discovery errors halt the run).

use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a raster reader.
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{reason}")]
    Unsupported { reason: String },

    #[error("invalid world file {path}: {reason}")]
    WorldFile { path: PathBuf, reason: String },
}

/// Failure to turn a projection definition into a CRS string.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CrsParseError {
    #[error("empty projection definition")]
    Empty,

    #[error("unknown EPSG code: {0}")]
    UnknownEpsg(String),

    #[error("invalid PROJ string: {0}")]
    InvalidProj(String),

    #[error("malformed WKT: {0}")]
    MalformedWkt(String),
}

/// Why one file produced no record.
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Unsupported file format for {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: RasterError,
    },

    #[error("No geotransformation available.")]
    NoGeoTransform,

    #[error("Non-georeferenced raster: {path}")]
    NonGeoreferenced { path: PathBuf },

    #[error("Processing panicked: {reason}")]
    Panicked { reason: String },
}

/// Discovery could not walk the input tree.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Input folder does not exist or is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Cannot read directory {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },
}
