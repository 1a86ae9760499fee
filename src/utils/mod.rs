pub mod config;
pub mod fd_limit;
pub mod logger;
pub mod rastercat_toml;
pub mod tempfiles;

pub use config::*;
pub use fd_limit::{FDS_PER_WORKER, max_open_fds, max_workers_by_fd_limit};
pub use logger::{log_progress_line, setup_logging};
pub use tempfiles::{discard_stale_temp, remove_temp_sidecars, rename_temp_to_final, temp_path_for};
