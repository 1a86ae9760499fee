//! Batch scheduler: fan file tasks out to a rayon pool, funnel results to one coordinator that
//! owns the accumulator and flushes at every batch boundary and at the end.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use anyhow::{Context, Result};
use crossbeam_channel::bounded;
use log::debug;
use rand::Rng;
use rayon::prelude::*;

use crate::utils::config::{PackagePaths, RESULT_CHANNEL_CAP};
use crate::{BatchId, RasterRecord};

/// Counters from one [`BatchScheduler::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    pub completed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub flushes: usize,
    pub cancelled: bool,
}

/// Hands out batch ids that are unique for the life of the generator.
#[derive(Debug, Default)]
pub struct BatchIds {
    issued: HashSet<String>,
}

impl BatchIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Eight lowercase hex characters, re-drawn until unseen.
    pub fn next_id(&mut self) -> BatchId {
        let mut rng = rand::rng();
        loop {
            let candidate = format!("{:08x}", rng.random::<u32>());
            if self.issued.insert(candidate.clone()) {
                return BatchId::new(candidate);
            }
        }
    }
}

type CompletionCallback = Box<dyn Fn(usize) + Send + Sync>;

/// Runs file tasks on a bounded pool and calls back once per batch.
pub struct BatchScheduler {
    batch_size: usize,
    num_threads: usize,
    cancel: Option<Arc<AtomicBool>>,
    on_complete: Option<CompletionCallback>,
}

impl BatchScheduler {
    /// `batch_size` and `num_threads` are clamped to at least 1.
    pub fn new(batch_size: usize, num_threads: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            num_threads: num_threads.max(1),
            cancel: None,
            on_complete: None,
        }
    }

    /// Stop flag checked before each task starts.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Called on the coordinator with `1` after every completion (progress bars).
    pub fn with_progress(mut self, on_complete: CompletionCallback) -> Self {
        self.on_complete = Some(on_complete);
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|c| c.load(Ordering::Relaxed))
    }

    /// Process every file in `files` with `process` and hand each batch to `on_batch_ready`.
    ///
    /// `process` runs on the pool and returns `None` for a failed file (it is expected to have
    /// logged the failure already). Failures count toward the batch trigger but never appear in a
    /// batch. `on_batch_ready` always runs on the calling thread, in flush order, after every
    /// `batch_size`-th completion and once more for any remainder. An empty file list never calls
    /// it. If the stop flag is raised, tasks not yet started are dropped and the partial batch is
    /// still handed over.
    pub fn run<P, F>(
        &self,
        files: &[PathBuf],
        process: P,
        mut on_batch_ready: F,
    ) -> Result<SchedulerStats>
    where
        P: Fn(&Path) -> Option<RasterRecord> + Sync,
        F: FnMut(Vec<RasterRecord>, &BatchId),
    {
        let mut stats = SchedulerStats::default();
        if files.is_empty() {
            return Ok(stats);
        }

        let prefix = PackagePaths::get().worker_prefix().to_string();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .thread_name(move |i| format!("{prefix}-{i}"))
            .build()
            .context("build worker pool")?;
        debug!(
            "Scheduling {} files on {} workers, batch size {}",
            files.len(),
            self.num_threads,
            self.batch_size
        );

        let (result_tx, result_rx) = bounded::<Option<RasterRecord>>(RESULT_CHANNEL_CAP);
        let mut ids = BatchIds::new();
        let mut batch: Vec<RasterRecord> = Vec::new();
        let mut since_flush = 0usize;

        let process = &process;
        thread::scope(|scope| {
            let pool = &pool;
            scope.spawn(move || {
                pool.install(|| {
                    files.par_iter().for_each_with(result_tx, |tx, path| {
                        if self.is_cancelled() {
                            return;
                        }
                        let _ = tx.send(process(path.as_path()));
                    });
                });
            });

            // Coordinator: sole owner of the accumulator and the counter.
            for outcome in result_rx.iter() {
                stats.completed += 1;
                since_flush += 1;
                match outcome {
                    Some(record) => {
                        stats.succeeded += 1;
                        batch.push(record);
                    }
                    None => stats.failed += 1,
                }
                if let Some(cb) = &self.on_complete {
                    cb(1);
                }
                if since_flush == self.batch_size {
                    on_batch_ready(std::mem::take(&mut batch), &ids.next_id());
                    stats.flushes += 1;
                    since_flush = 0;
                }
            }
        });

        if since_flush > 0 {
            on_batch_ready(std::mem::take(&mut batch), &ids.next_id());
            stats.flushes += 1;
        }
        stats.cancelled = self.is_cancelled() && stats.completed < files.len();
        debug!("Scheduler done: {stats:?}");
        Ok(stats)
    }
}
