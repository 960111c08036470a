use serde::{Deserialize, Serialize};

/// Which logical heap phase a sift chain belongs to, and therefore which
/// step the chain emits once it bottoms out. Build descends through the
/// internal nodes; extract alternates swap-to-tail with a re-heapify chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeapPhase {
    Build { start: usize },
    Extract { end: usize },
}

/// One deferred unit of sorting work: just enough indices to resume, no
/// shared state outside the record itself. Consumed exactly once; a step
/// that needs to continue emits a fresh record.
///
/// Quick ranges are half-open `[lo, hi)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    BubbleScan { x: usize, y: usize },
    InsertionScan { x: usize, y: usize },
    BuildHeap { start: usize },
    SiftDown { end: usize, root: usize, after: HeapPhase },
    ExtractMax { end: usize },
    Quicksort { lo: usize, hi: usize },
    Partition { lo: usize, hi: usize, pivot: usize },
    PartitionScan { lo: usize, hi: usize, i: usize, j: usize },
}

impl Step {
    /// Stable label naming the logical phase, for tracing and per-phase
    /// progress display.
    pub fn label(&self) -> &'static str {
        match self {
            Step::BubbleScan { .. } => "bubble.scan",
            Step::InsertionScan { .. } => "insertion.scan",
            Step::BuildHeap { .. } => "heap.build",
            Step::SiftDown { .. } => "heap.sift",
            Step::ExtractMax { .. } => "heap.extract",
            Step::Quicksort { .. } => "quick.sort",
            Step::Partition { .. } => "quick.partition",
            Step::PartitionScan { .. } => "quick.scan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Heap,
    Quick,
}

pub const ALL_ALGORITHMS: [Algorithm; 4] = [
    Algorithm::Bubble,
    Algorithm::Insertion,
    Algorithm::Heap,
    Algorithm::Quick,
];

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Heap => "heap",
            Algorithm::Quick => "quick",
        }
    }

    /// First step of a sort over `size` elements, or `None` when fewer than
    /// two elements leave nothing to do.
    pub fn initial_step(self, size: usize) -> Option<Step> {
        if size < 2 {
            return None;
        }
        let step = match self {
            Algorithm::Bubble => Step::BubbleScan { x: 1, y: 0 },
            Algorithm::Insertion => Step::InsertionScan { x: 1, y: 1 },
            Algorithm::Heap => Step::BuildHeap {
                start: size / 2 - 1,
            },
            Algorithm::Quick => Step::Quicksort { lo: 0, hi: size },
        };
        Some(step)
    }
}
