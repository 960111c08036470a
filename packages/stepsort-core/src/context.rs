use std::cmp::Ordering;

use crate::error::SortError;

/// The capability a sort operates through: an indexed mutable sequence with
/// a strict weak order over its positions.
///
/// Steps never touch elements directly; everything goes through `compare`
/// and `swap`, so storage and comparator stay substitutable. While a sort is
/// in progress the context has exclusive write access to the sequence.
pub trait SortContext {
    /// Number of elements. Fixed for the duration of a sort.
    fn size(&self) -> usize;

    /// Order of the element at `i` relative to the element at `j`.
    /// `Ordering::Less` means the element at `i` sorts before the one at
    /// `j`. Pure with respect to current contents: only an intervening swap
    /// of either position may change the result.
    fn compare(&mut self, i: usize, j: usize) -> Result<Ordering, SortError>;

    /// Exchange the elements at `i` and `j`. Its own inverse; `swap(i, i)`
    /// is a no-op.
    fn swap(&mut self, i: usize, j: usize) -> Result<(), SortError>;
}

/// Comparison and swap counters, kept by the concrete contexts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContextStats {
    pub compares: u64,
    pub swaps: u64,
}

fn check_index(index: usize, size: usize) -> Result<(), SortError> {
    if index < size {
        Ok(())
    } else {
        Err(SortError::IndexOutOfRange { index, size })
    }
}

/// Context over a borrowed slice. The `&mut` borrow is the exclusivity
/// guarantee: nothing else can touch the sequence while steps are queued.
#[derive(Debug)]
pub struct SliceContext<'a, T: Ord> {
    data: &'a mut [T],
    stats: ContextStats,
}

impl<'a, T: Ord> SliceContext<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self {
            data,
            stats: ContextStats::default(),
        }
    }

    pub fn stats(&self) -> ContextStats {
        self.stats
    }

    /// Current contents, for rendering between steps.
    pub fn as_slice(&self) -> &[T] {
        self.data
    }
}

impl<T: Ord> SortContext for SliceContext<'_, T> {
    fn size(&self) -> usize {
        self.data.len()
    }

    fn compare(&mut self, i: usize, j: usize) -> Result<Ordering, SortError> {
        check_index(i, self.data.len())?;
        check_index(j, self.data.len())?;
        self.stats.compares += 1;
        Ok(self.data[i].cmp(&self.data[j]))
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<(), SortError> {
        check_index(i, self.data.len())?;
        check_index(j, self.data.len())?;
        self.stats.swaps += 1;
        self.data.swap(i, j);
        Ok(())
    }
}

/// Context owning its storage. This is the shape a driver keeps when it
/// holds several runs at once; `into_inner` hands the sequence back once
/// the queue has drained.
#[derive(Debug, Clone)]
pub struct VecContext<T: Ord> {
    data: Vec<T>,
    stats: ContextStats,
}

impl<T: Ord> VecContext<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            stats: ContextStats::default(),
        }
    }

    pub fn stats(&self) -> ContextStats {
        self.stats
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T: Ord> SortContext for VecContext<T> {
    fn size(&self) -> usize {
        self.data.len()
    }

    fn compare(&mut self, i: usize, j: usize) -> Result<Ordering, SortError> {
        check_index(i, self.data.len())?;
        check_index(j, self.data.len())?;
        self.stats.compares += 1;
        Ok(self.data[i].cmp(&self.data[j]))
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<(), SortError> {
        check_index(i, self.data.len())?;
        check_index(j, self.data.len())?;
        self.stats.swaps += 1;
        self.data.swap(i, j);
        Ok(())
    }
}
