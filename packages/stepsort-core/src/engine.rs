use rand::Rng;
use smallvec::SmallVec;

use crate::algorithms::{bubble, heap, insertion, quick};
use crate::context::SortContext;
use crate::error::SortError;
use crate::queue::WorkQueue;
use crate::step::{Algorithm, Step};

/// Follow-up records produced by a single step. Never more than two.
pub type Continuations = SmallVec<[Step; 2]>;

/// Build the queue for a fresh sort: the chosen algorithm's first step, or
/// nothing at all for sequences of fewer than two elements.
pub fn start<C: SortContext>(algorithm: Algorithm, ctx: &C) -> WorkQueue {
    let mut queue = WorkQueue::new();
    if let Some(step) = algorithm.initial_step(ctx.size()) {
        queue.enqueue(step);
    }
    tracing::debug!(
        "queued {} sort of {} elements ({} pending)",
        algorithm.name(),
        ctx.size(),
        queue.len()
    );
    queue
}

/// Run one step to completion against the context. The single dispatch
/// point over the step records; steps are not divisible, so the context is
/// never left half-updated.
pub fn apply<C, R>(step: Step, ctx: &mut C, rng: &mut R) -> Result<Continuations, SortError>
where
    C: SortContext,
    R: Rng,
{
    match step {
        Step::BubbleScan { x, y } => bubble::scan(ctx, x, y),
        Step::InsertionScan { x, y } => insertion::scan(ctx, x, y),
        Step::BuildHeap { start } => heap::build(ctx, start),
        Step::SiftDown { end, root, after } => heap::sift_down(ctx, end, root, after),
        Step::ExtractMax { end } => heap::extract_max(ctx, end),
        Step::Quicksort { lo, hi } => quick::sort_range(rng, lo, hi),
        Step::Partition { lo, hi, pivot } => quick::begin_partition(ctx, lo, hi, pivot),
        Step::PartitionScan { lo, hi, i, j } => quick::scan(ctx, lo, hi, i, j),
    }
}

/// Dequeue one step, execute it, and enqueue its follow-ups in order.
/// Returns the executed step's label; `EmptyQueue` signals a finished sort.
pub fn advance<C, R>(
    queue: &mut WorkQueue,
    ctx: &mut C,
    rng: &mut R,
) -> Result<&'static str, SortError>
where
    C: SortContext,
    R: Rng,
{
    let step = queue.dequeue_one()?;
    tracing::trace!("executing {:?}", step);
    let followups = apply(step, ctx, rng)?;
    for next in followups {
        queue.enqueue(next);
    }
    Ok(step.label())
}

/// Drain the queue to completion. Returns the number of executed steps.
pub fn drain<C, R>(queue: &mut WorkQueue, ctx: &mut C, rng: &mut R) -> Result<u64, SortError>
where
    C: SortContext,
    R: Rng,
{
    let mut executed = 0;
    while !queue.is_empty() {
        advance(queue, ctx, rng)?;
        executed += 1;
    }
    tracing::debug!("queue drained after {} steps", executed);
    Ok(executed)
}
