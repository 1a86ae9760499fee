//! Pipeline components: skip policy, discovery walk, batch scheduler, progress log, run context.

pub mod context;
pub mod discover;
pub mod log;
pub mod scheduler;
pub mod skip;

pub use context::RunContext;
pub use discover::{DiscoverOpts, discover};
pub use self::log::{LogDrain, Observer, ProgressLog, progress_log, spawn_observer};
pub use scheduler::{BatchIds, BatchScheduler, SchedulerStats};
pub use skip::SkipPolicy;
