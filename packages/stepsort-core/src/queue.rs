use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::SortError;
use crate::step::Step;

/// FIFO of pending steps. Strict arrival order is load-bearing: sibling
/// sub-sorts flatten into breadth-first pending work instead of a call
/// stack, and the dequeue order is the visualized operation order.
///
/// One queue per sort run; emptiness is the sole completion signal.
/// Cancellation is whole-queue: drop it.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct WorkQueue {
    steps: VecDeque<Step>,
}

impl WorkQueue {
    pub fn new() -> Self {
        Self {
            steps: VecDeque::new(),
        }
    }

    /// Append a step at the tail.
    pub fn enqueue(&mut self, step: Step) {
        self.steps.push_back(step);
    }

    /// Remove and return the head step, or `EmptyQueue` once drained.
    pub fn dequeue_one(&mut self) -> Result<Step, SortError> {
        self.steps.pop_front().ok_or(SortError::EmptyQueue)
    }

    /// Head step without removing it.
    pub fn peek(&self) -> Option<&Step> {
        self.steps.front()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Pending steps in dequeue order, for inspection.
    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }
}
