use std::cmp::Ordering;

use rand::Rng;
use smallvec::{SmallVec, smallvec};

use crate::context::SortContext;
use crate::engine::Continuations;
use crate::error::SortError;
use crate::step::Step;

/// Entry for a sub-range `[lo, hi)`. Fewer than two elements ends the
/// branch; otherwise pick a pivot uniformly at random (randomized to dodge
/// adversarial and already-sorted worst cases) and hand off to partitioning.
pub(crate) fn sort_range<R: Rng>(
    rng: &mut R,
    lo: usize,
    hi: usize,
) -> Result<Continuations, SortError> {
    let mut next = SmallVec::new();
    if hi - lo > 1 {
        let pivot = rng.random_range(lo..hi);
        next.push(Step::Partition { lo, hi, pivot });
    }
    Ok(next)
}

/// Park the pivot at the end of the range, then start the Lomuto scan.
pub(crate) fn begin_partition<C: SortContext>(
    ctx: &mut C,
    lo: usize,
    hi: usize,
    pivot: usize,
) -> Result<Continuations, SortError> {
    ctx.swap(pivot, hi - 1)?;
    Ok(smallvec![Step::PartitionScan {
        lo,
        hi,
        i: lo,
        j: lo,
    }])
}

/// One Lomuto comparison: elements not greater than the pivot move left of
/// `j`. When the scan reaches the pivot slot, place it at `j` and split
/// into the two sibling sub-sorts.
pub(crate) fn scan<C: SortContext>(
    ctx: &mut C,
    lo: usize,
    hi: usize,
    mut i: usize,
    mut j: usize,
) -> Result<Continuations, SortError> {
    let last = hi - 1;
    let mut next = SmallVec::new();
    if i < last {
        if ctx.compare(i, last)? != Ordering::Greater {
            ctx.swap(i, j)?;
            j += 1;
        }
        i += 1;
        next.push(Step::PartitionScan { lo, hi, i, j });
    } else {
        ctx.swap(j, last)?;
        next.push(Step::Quicksort { lo, hi: j });
        next.push(Step::Quicksort { lo: j + 1, hi });
    }
    Ok(next)
}
