use rand::rngs::StdRng;
use rand::SeedableRng;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use thiserror::Error;

use stepsort_core::{Algorithm, SortContext, SortError, WorkQueue, engine};

use crate::Scheduler;
use crate::metrics::SchedulerMetrics;

new_key_type! {
    pub struct RunId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchedulerError {
    #[error("no run registered under {0:?}")]
    UnknownRun(RunId),

    /// A step violated the context contract. Carries the label that was
    /// active and, through the source, the offending indices.
    #[error("step `{label}` failed")]
    Step {
        label: &'static str,
        #[source]
        source: SortError,
    },
}

struct Run<C> {
    algorithm: Algorithm,
    ctx: C,
    queue: WorkQueue,
    rng: StdRng,
}

/// Single-threaded driver over any number of sort runs, each with its own
/// context, queue and RNG. `tick` steps every active run once in insertion
/// order, which is what a side-by-side algorithm race renders from; a host
/// that wants finer control single-steps one run via `step_run`.
pub struct LocalScheduler<C: SortContext> {
    runs: SlotMap<RunId, Run<C>>,
    order: SmallVec<[RunId; 4]>,
    metrics: SchedulerMetrics,
}

impl<C: SortContext> LocalScheduler<C> {
    pub fn new() -> Self {
        Self {
            runs: SlotMap::with_key(),
            order: SmallVec::new(),
            metrics: SchedulerMetrics::default(),
        }
    }

    /// Register a sort over `ctx` and queue its first step. The run's pivot
    /// RNG is OS-seeded; use [`add_run_seeded`](Self::add_run_seeded) for
    /// reproducible runs.
    pub fn add_run(&mut self, algorithm: Algorithm, ctx: C) -> RunId {
        self.insert_run(algorithm, ctx, StdRng::from_os_rng())
    }

    /// Register a sort with a fixed RNG seed, for deterministic replays.
    pub fn add_run_seeded(&mut self, algorithm: Algorithm, ctx: C, seed: u64) -> RunId {
        self.insert_run(algorithm, ctx, StdRng::seed_from_u64(seed))
    }

    fn insert_run(&mut self, algorithm: Algorithm, ctx: C, rng: StdRng) -> RunId {
        let queue = engine::start(algorithm, &ctx);
        let id = self.runs.insert(Run {
            algorithm,
            ctx,
            queue,
            rng,
        });
        self.order.push(id);
        tracing::debug!("added {} run {:?}", algorithm.name(), id);
        id
    }

    /// Execute one step of one run. `Ok(None)` once that run's queue has
    /// drained: the sort is finished, not failed.
    pub fn step_run(&mut self, id: RunId) -> Result<Option<&'static str>, SchedulerError> {
        let run = self.runs.get_mut(id).ok_or(SchedulerError::UnknownRun(id))?;
        let Some(label) = run.queue.peek().map(|step| step.label()) else {
            return Ok(None);
        };
        engine::advance(&mut run.queue, &mut run.ctx, &mut run.rng)
            .map_err(|source| SchedulerError::Step { label, source })?;
        self.metrics.record(label);
        Ok(Some(label))
    }

    /// Drain one run to completion and hand its sequence back.
    pub fn finish(&mut self, id: RunId) -> Result<C, SchedulerError> {
        while self.step_run(id)?.is_some() {}
        let run = self.take(id)?;
        tracing::info!("{} run {:?} finished", run.algorithm.name(), id);
        Ok(run.ctx)
    }

    /// Stop a run early: its queue is discarded, the sequence comes back in
    /// whatever order the executed steps left it. Swaps are atomic, so no
    /// rollback is needed.
    pub fn cancel(&mut self, id: RunId) -> Result<C, SchedulerError> {
        let run = self.take(id)?;
        tracing::debug!(
            "cancelled {} run {:?} with {} steps pending",
            run.algorithm.name(),
            id,
            run.queue.len()
        );
        Ok(run.ctx)
    }

    fn take(&mut self, id: RunId) -> Result<Run<C>, SchedulerError> {
        let run = self.runs.remove(id).ok_or(SchedulerError::UnknownRun(id))?;
        self.order.retain(|other| *other != id);
        Ok(run)
    }

    pub fn context(&self, id: RunId) -> Result<&C, SchedulerError> {
        self.runs
            .get(id)
            .map(|run| &run.ctx)
            .ok_or(SchedulerError::UnknownRun(id))
    }

    pub fn algorithm(&self, id: RunId) -> Result<Algorithm, SchedulerError> {
        self.runs
            .get(id)
            .map(|run| run.algorithm)
            .ok_or(SchedulerError::UnknownRun(id))
    }

    /// Steps still queued for a run.
    pub fn pending(&self, id: RunId) -> Result<usize, SchedulerError> {
        self.runs
            .get(id)
            .map(|run| run.queue.len())
            .ok_or(SchedulerError::UnknownRun(id))
    }

    pub fn metrics(&self) -> &SchedulerMetrics {
        &self.metrics
    }
}

impl<C: SortContext> Default for LocalScheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SortContext> Scheduler for LocalScheduler<C> {
    fn tick(&mut self) -> Result<bool, SchedulerError> {
        self.metrics.ticks += 1;
        for idx in 0..self.order.len() {
            let id = self.order[idx];
            self.step_run(id)?;
        }
        Ok(!self.is_idle())
    }

    fn is_idle(&self) -> bool {
        self.runs.values().all(|run| run.queue.is_empty())
    }

    fn run_to_completion(&mut self) -> Result<(), SchedulerError> {
        while self.tick()? {}
        tracing::info!(
            "all runs idle after {} steps in {} ticks",
            self.metrics.steps_executed,
            self.metrics.ticks
        );
        Ok(())
    }
}
