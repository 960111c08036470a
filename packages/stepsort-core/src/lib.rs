mod algorithms;
pub mod context;
pub mod engine;
pub mod error;
pub mod queue;
pub mod step;

pub use context::{ContextStats, SliceContext, SortContext, VecContext};
pub use engine::{advance, apply, drain, start};
pub use error::SortError;
pub use queue::WorkQueue;
pub use step::{ALL_ALGORITHMS, Algorithm, HeapPhase, Step};
