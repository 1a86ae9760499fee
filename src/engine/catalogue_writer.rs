//! Catalogue writer seam and the per-batch flush.

use anyhow::Result;
use log::warn;
use std::path::{Path, PathBuf};

use crate::pipeline::ProgressLog;
use crate::utils::config::CatalogueDefaults;
use crate::{BatchId, RasterRecord};

/// Persists one batch of records to `destination`, declaring `crs_target` for the whole batch.
/// Returns the path actually written.
pub trait CatalogueWriter: Send + Sync {
    fn write(&self, records: &[RasterRecord], crs_target: &str, destination: &Path)
    -> Result<PathBuf>;
}

/// What happened to one batch.
#[derive(Debug)]
pub enum FlushOutcome {
    /// Nothing to write.
    Skipped,
    Written { path: PathBuf, count: usize },
    /// The batch is lost; the run goes on.
    Failed { path: PathBuf, error: String },
}

/// `{output_base}_{batch_id}.gpkg`. A trailing `.gpkg` on the base is dropped first so it is not
/// doubled.
pub fn artifact_path(output_base: &Path, batch_id: &BatchId) -> PathBuf {
    let ext = CatalogueDefaults::ARTIFACT_EXTENSION;
    let base = output_base.to_string_lossy();
    let stem = match base.rsplit_once('.') {
        Some((stem, e)) if e.eq_ignore_ascii_case(ext) && !stem.is_empty() => stem,
        _ => base.as_ref(),
    };
    PathBuf::from(format!("{stem}_{batch_id}.{ext}"))
}

/// Write a non-empty batch through `writer` and log the outcome. Never fails the run.
pub fn flush(
    writer: &dyn CatalogueWriter,
    records: &[RasterRecord],
    crs_target: &str,
    batch_id: &BatchId,
    output_base: &Path,
    log: &ProgressLog,
) -> FlushOutcome {
    if records.is_empty() {
        return FlushOutcome::Skipped;
    }
    let destination = artifact_path(output_base, batch_id);
    match writer.write(records, crs_target, &destination) {
        Ok(path) => {
            log.emit(format!("Saved results to {}", path.display()));
            FlushOutcome::Written {
                path,
                count: records.len(),
            }
        }
        Err(e) => {
            let error = format!("{e:#}");
            warn!("batch {batch_id} lost: {error}");
            log.emit(format!(
                "Failed to save batch {} to {}: {}",
                batch_id,
                destination.display(),
                error
            ));
            FlushOutcome::Failed {
                path: destination,
                error,
            }
        }
    }
}
