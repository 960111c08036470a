use std::cmp::Ordering;

use smallvec::{SmallVec, smallvec};

use crate::context::SortContext;
use crate::engine::Continuations;
use crate::error::SortError;
use crate::step::{HeapPhase, Step};

/// Start sifting the subtree rooted at `start`. The chain's `after` tag
/// brings control back here for `start - 1`, then into extraction once the
/// whole array is a max-heap. Entry point: `start = size/2 - 1`.
pub(crate) fn build<C: SortContext>(ctx: &C, start: usize) -> Result<Continuations, SortError> {
    Ok(smallvec![Step::SiftDown {
        end: ctx.size() - 1,
        root: start,
        after: HeapPhase::Build { start },
    }])
}

/// One level of sift-down over the heap `[0, end]`: pick the greater child,
/// swap if the root sorts before it, and continue at the child. The chain
/// bottoms out at a leaf or an already-ordered node, at which point the
/// owning phase resumes.
pub(crate) fn sift_down<C: SortContext>(
    ctx: &mut C,
    end: usize,
    root: usize,
    after: HeapPhase,
) -> Result<Continuations, SortError> {
    let mut child = 2 * root + 1;
    if child > end {
        return Ok(smallvec![phase_exit(ctx.size(), after)]);
    }
    if child < end && ctx.compare(child, child + 1)? == Ordering::Less {
        child += 1;
    }
    if ctx.compare(root, child)? == Ordering::Less {
        ctx.swap(root, child)?;
        Ok(smallvec![Step::SiftDown {
            end,
            root: child,
            after,
        }])
    } else {
        Ok(smallvec![phase_exit(ctx.size(), after)])
    }
}

/// Move the current max to its final slot and re-heapify the shrunken
/// prefix. `end == 0` is the terminal configuration: one element left,
/// nothing emitted, queue drains.
pub(crate) fn extract_max<C: SortContext>(
    ctx: &mut C,
    end: usize,
) -> Result<Continuations, SortError> {
    let mut next = SmallVec::new();
    if end > 0 {
        ctx.swap(0, end)?;
        next.push(Step::SiftDown {
            end: end - 1,
            root: 0,
            after: HeapPhase::Extract { end: end - 1 },
        });
    }
    Ok(next)
}

fn phase_exit(size: usize, after: HeapPhase) -> Step {
    match after {
        HeapPhase::Build { start } if start > 0 => Step::BuildHeap { start: start - 1 },
        HeapPhase::Build { .. } => Step::ExtractMax { end: size - 1 },
        HeapPhase::Extract { end } => Step::ExtractMax { end },
    }
}
