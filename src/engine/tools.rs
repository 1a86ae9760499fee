//! Path and filter utilities

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.`, fold `name/..`. Does not touch the filesystem, so it
/// keeps relative inputs relative and never resolves symlinks.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Final component as a `String` (lossy), or empty when there is none.
pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Lowercased extension with its leading dot (e.g. `.tif`).
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
}

/// True if `path`'s extension is in `extensions` (case-insensitive, leading dot optional).
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = dotted_extension(path) else {
        return false;
    };
    extensions.iter().any(|wanted| {
        let wanted = wanted.trim();
        let wanted = wanted.strip_prefix('.').unwrap_or(wanted);
        ext[1..].eq_ignore_ascii_case(wanted)
    })
}

/// Sibling file with the same stem and a different extension (e.g. `tile.tif` → `tile.prj`).
pub fn sidecar_path(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}

/// World-file candidates for a raster, in lookup order: first+last letter of the extension plus
/// `w` (`.tfw`, `.pgw`), the extension plus `w` (`.tifw`, `.pngw`), then `.wld`.
pub fn world_file_candidates(path: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(3);
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        let mut chars = ext.chars();
        if let (Some(first), Some(last)) = (chars.next(), ext.chars().last())
            && ext.len() >= 2
        {
            candidates.push(sidecar_path(path, &format!("{first}{last}w")));
        }
        candidates.push(sidecar_path(path, &format!("{ext}w")));
    }
    candidates.push(sidecar_path(path, "wld"));
    candidates
}
