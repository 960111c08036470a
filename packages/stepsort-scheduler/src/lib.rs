pub mod metrics;
pub mod scheduler;

/// The driving surface a host implements its playback policy against.
/// The scheduler owns *when* steps execute (a tight loop, or a pause
/// between invocations), never *what* a step does.
pub trait Scheduler {
    /// Execute at most one pending step from every active run.
    /// Returns `true` while any run still has work queued.
    fn tick(&mut self) -> Result<bool, SchedulerError>;

    /// Whether every queue has drained.
    fn is_idle(&self) -> bool;

    /// Tick until idle.
    fn run_to_completion(&mut self) -> Result<(), SchedulerError>;
}

pub use metrics::SchedulerMetrics;
pub use scheduler::{LocalScheduler, RunId, SchedulerError};
