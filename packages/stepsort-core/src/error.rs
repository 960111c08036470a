use thiserror::Error;

/// Errors surfaced by the engine and its collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// Dequeued with nothing pending. This is the termination signal of a
    /// drained sort, not a failure; drivers either check `is_empty` first or
    /// treat it as "nothing left to do".
    #[error("work queue is empty")]
    EmptyQueue,

    /// A step addressed a position outside the sequence. Contract violation;
    /// the sort must be aborted, never clamped.
    #[error("index {index} out of range for sequence of {size} elements")]
    IndexOutOfRange { index: usize, size: usize },
}
