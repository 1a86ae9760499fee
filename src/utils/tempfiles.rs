use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::config::CatalogueDefaults;

/// Temporary path a catalogue artifact is built at before the atomic rename.
pub fn temp_path_for(artifact: &Path) -> PathBuf {
    let name = artifact
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("batch.{}", CatalogueDefaults::ARTIFACT_EXTENSION));
    artifact
        .parent()
        .unwrap_or(Path::new("."))
        .join(format!("{name}.tmp"))
}

/// Remove SQLite journal/WAL/SHM sidecars left next to a temp path.
pub fn remove_temp_sidecars(temp_path: &Path) {
    let file_name = temp_path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let parent = temp_path.parent().unwrap_or(Path::new("."));
    for suffix in ["journal", "wal", "shm"] {
        let _ = fs::remove_file(parent.join(format!("{file_name}-{suffix}")));
    }
}

/// Remove a stale temp file (and its sidecars) from an earlier interrupted write.
pub fn discard_stale_temp(temp_path: &Path) -> Result<()> {
    remove_temp_sidecars(temp_path);
    if temp_path.exists() {
        fs::remove_file(temp_path)
            .with_context(|| format!("remove stale temp artifact at {}", temp_path.display()))?;
    }
    Ok(())
}

pub fn rename_temp_to_final(temp_path: &Path, final_path: &Path) -> Result<()> {
    fs::rename(temp_path, final_path).with_context(|| {
        format!(
            "atomic rename temp artifact to final path ({} -> {})",
            temp_path.display(),
            final_path.display()
        )
    })?;
    remove_temp_sidecars(temp_path);
    Ok(())
}
