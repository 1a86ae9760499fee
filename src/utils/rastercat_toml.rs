//! Load `.rastercat.toml` from the input directory (CLI only). Lib callers pass [`Opts`] directly.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub struct RastercatToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    output: Option<String>,
    crs: Option<String>,
    default_crs: Option<String>,
    subfolders: Option<bool>,
    batch_size: Option<usize>,
    threads: Option<usize>,
    skip_keywords: Option<Vec<String>>,
    extensions: Option<Vec<String>>,
    follow_links: Option<bool>,
    strict: Option<bool>,
    verbose: Option<bool>,
    progress: Option<bool>,
}

/// Parse config text. Errors are reported as strings so the caller can log and ignore them.
pub fn parse_rastercat_toml(text: &str) -> Result<RastercatToml, String> {
    toml::from_str(text).map_err(|e| e.to_string())
}

/// Load the config file from `dir` if present. Returns None if missing or unparseable.
pub fn load_rastercat_toml(dir: &Path) -> Option<RastercatToml> {
    let path = dir.join(PackagePaths::get().config_filename());
    let s = std::fs::read_to_string(&path).ok()?;
    parse_rastercat_toml(&s)
        .map_err(|e| log::warn!("{}: {}", path.display(), e))
        .ok()
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($file:expr, $opts:expr, $file_field:ident => $opts_field:ident) => {
        if let Some(v) = $file.$file_field.clone() {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI flags.
pub fn apply_file_to_opts(file: &RastercatToml, opts: &mut Opts) {
    let s = &file.settings;
    if let Some(ref p) = s.output {
        opts.output_base = PathBuf::from(p);
    }
    if let Some(ref crs) = s.crs {
        opts.crs_target = Some(crs.clone());
    }
    if let Some(n) = s.threads {
        opts.num_threads = Some(n);
    }
    apply_file_opt!(s, opts, default_crs => default_crs);
    apply_file_opt!(s, opts, subfolders => include_subfolders);
    apply_file_opt!(s, opts, batch_size => batch_size);
    apply_file_opt!(s, opts, skip_keywords => skip_keywords);
    apply_file_opt!(s, opts, extensions => extensions);
    apply_file_opt!(s, opts, follow_links => follow_links);
    apply_file_opt!(s, opts, strict => strict);
    apply_file_opt!(s, opts, verbose => verbose);
    apply_file_opt!(s, opts, progress => show_progress);
}
