//! Per-file processing: open, extract corners, validate georeferencing, resolve CRS.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::engine::corners::{corners_of, is_georeferenced};
use crate::engine::crs::{CrsParser, DefaultCrsParser};
use crate::engine::raster::{FileRasterReader, RasterReader};
use crate::engine::tools::sidecar_path;
use crate::error::ProcessingError;
use crate::pipeline::ProgressLog;
use crate::{CRS_NOT_AVAILABLE, RasterRecord};

/// Turns one raster path into a [`RasterRecord`]. Shared by every worker, so collaborators must be
/// `Send + Sync`.
pub struct FileProcessor<R = FileRasterReader, C = DefaultCrsParser> {
    reader: R,
    crs_parser: C,
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new(FileRasterReader, DefaultCrsParser)
    }
}

impl<R: RasterReader, C: CrsParser> FileProcessor<R, C> {
    pub fn new(reader: R, crs_parser: C) -> Self {
        Self { reader, crs_parser }
    }

    /// Open → corners → georeferencing check → CRS → record. The first failing step wins.
    pub fn process(&self, path: &Path) -> Result<RasterRecord, ProcessingError> {
        let info = self
            .reader
            .open(path)
            .map_err(|source| ProcessingError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let corners = corners_of(&info)?;
        if !is_georeferenced(&corners) {
            return Err(ProcessingError::NonGeoreferenced {
                path: path.to_path_buf(),
            });
        }
        let crs = self.resolve_crs(path);
        Ok(RasterRecord::new(path, corners, crs))
    }

    /// [`Self::process`], with any error turned into exactly one log line and `None`. A panic in
    /// a reader or parser counts as a failure of that file only.
    pub fn process_logged(&self, path: &Path, log: &ProgressLog) -> Option<RasterRecord> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.process(path)))
            .unwrap_or_else(|payload| {
                Err(ProcessingError::Panicked {
                    reason: panic_reason(payload.as_ref()),
                })
            });
        match outcome {
            Ok(record) => Some(record),
            Err(e) => {
                log.emit(format!("Error processing {}: {}", path.display(), e));
                None
            }
        }
    }

    /// CRS from the `.prj` sidecar, `N/A` without one. Parse or read failures are stored as the
    /// CRS text instead of dropping the record.
    fn resolve_crs(&self, path: &Path) -> String {
        let prj = sidecar_path(path, "prj");
        if !prj.is_file() {
            return CRS_NOT_AVAILABLE.to_string();
        }
        let parsed = std::fs::read_to_string(&prj)
            .map_err(|e| e.to_string())
            .and_then(|text| self.crs_parser.parse(&text).map_err(|e| e.to_string()));
        match parsed {
            Ok(crs) => crs,
            Err(e) => format!("ERROR parsing CRS: {e}"),
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
