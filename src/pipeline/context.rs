//! Per-run context: the progress log producer and the stop flag, passed to every stage.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::pipeline::log::{LogDrain, ProgressLog, progress_log};

/// Shared state for one catalogue run. Built per run and dropped at the end; dropping the last
/// [`ProgressLog`] clone is what lets the observer finish.
#[derive(Clone, Debug)]
pub struct RunContext {
    pub log: ProgressLog,
    pub cancel: Arc<AtomicBool>,
}

impl RunContext {
    /// Fresh context plus the drain for its log. The stop flag starts lowered.
    pub fn new() -> (Self, LogDrain) {
        let (log, drain) = progress_log();
        let ctx = Self {
            log,
            cancel: Arc::new(AtomicBool::new(false)),
        };
        (ctx, drain)
    }

    /// Context whose stop flag is shared with a caller (e.g. a Ctrl+C handler).
    pub fn with_cancel(cancel: Arc<AtomicBool>) -> (Self, LogDrain) {
        let (log, drain) = progress_log();
        (Self { log, cancel }, drain)
    }

    pub fn request_cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }
}
