use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::context::SortContext;
use crate::engine::Continuations;
use crate::error::SortError;
use crate::step::Step;

/// One bubble comparison. Outer index `x` grows to `size`, inner `y` sweeps
/// `[0, x)`; exactly one comparison per step, `n(n-1)/2` in total.
pub(crate) fn scan<C: SortContext>(
    ctx: &mut C,
    mut x: usize,
    mut y: usize,
) -> Result<Continuations, SortError> {
    if ctx.compare(x, y)? == Ordering::Less {
        ctx.swap(x, y)?;
    }
    y += 1;
    if y == x {
        y = 0;
        x += 1;
    }
    let mut next = SmallVec::new();
    if x < ctx.size() {
        next.push(Step::BubbleScan { x, y });
    }
    Ok(next)
}
