use rustc_hash::FxHashMap;

/// Execution counters for a scheduler, grouped by step label so a host can
/// show per-phase progress.
#[derive(Debug, Default, Clone)]
pub struct SchedulerMetrics {
    pub ticks: u64,
    pub steps_executed: u64,
    pub steps_by_label: FxHashMap<&'static str, u64>,
}

impl SchedulerMetrics {
    pub(crate) fn record(&mut self, label: &'static str) {
        self.steps_executed += 1;
        *self.steps_by_label.entry(label).or_default() += 1;
    }
}
