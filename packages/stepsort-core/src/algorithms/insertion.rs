use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::context::SortContext;
use crate::engine::Continuations;
use crate::error::SortError;
use crate::step::Step;

/// One insertion comparison. `x` is the element being inserted, `y` its
/// current position while it walks left; an ordered pair ends the inner
/// scan early. At most one swap per step, so the executed step count
/// mirrors the number of inversions resolved.
pub(crate) fn scan<C: SortContext>(
    ctx: &mut C,
    mut x: usize,
    mut y: usize,
) -> Result<Continuations, SortError> {
    if ctx.compare(y, y - 1)? == Ordering::Less {
        ctx.swap(y, y - 1)?;
        y -= 1;
        if y == 0 {
            x += 1;
            y = x;
        }
    } else {
        x += 1;
        y = x;
    }
    let mut next = SmallVec::new();
    if x < ctx.size() {
        next.push(Step::InsertionScan { x, y });
    }
    Ok(next)
}
