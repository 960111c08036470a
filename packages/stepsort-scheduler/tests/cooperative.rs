use stepsort_core::{Algorithm, VecContext};
use stepsort_scheduler::{LocalScheduler, Scheduler};

#[test]
fn scheduler_tick_lifecycle() {
    let mut scheduler: LocalScheduler<VecContext<u64>> = LocalScheduler::new();

    // Initially idle, and ticking an empty scheduler is a no-op.
    assert!(scheduler.is_idle());
    assert!(!scheduler.tick().unwrap());

    // A two-element bubble sort is a single comparison: one tick drains it.
    let id = scheduler.add_run(Algorithm::Bubble, VecContext::new(vec![2, 1]));
    assert!(!scheduler.is_idle());
    assert_eq!(scheduler.pending(id).unwrap(), 1);

    assert!(!scheduler.tick().unwrap());
    assert!(scheduler.is_idle());

    let ctx = scheduler.finish(id).unwrap();
    assert_eq!(ctx.into_inner(), vec![1, 2]);
}

#[test]
fn metrics_count_steps_by_label() {
    let mut scheduler = LocalScheduler::new();
    scheduler.add_run(Algorithm::Bubble, VecContext::new(vec![3_u64, 1, 2]));
    scheduler.run_to_completion().unwrap();

    let metrics = scheduler.metrics();
    assert_eq!(metrics.steps_executed, 3);
    assert_eq!(metrics.ticks, 3);
    assert_eq!(metrics.steps_by_label.get("bubble.scan"), Some(&3));
}

#[test]
fn step_run_reports_completion_as_none() {
    let mut scheduler = LocalScheduler::new();
    let id = scheduler.add_run(Algorithm::Bubble, VecContext::new(vec![2_u64, 1]));

    assert_eq!(scheduler.step_run(id).unwrap(), Some("bubble.scan"));
    assert_eq!(scheduler.step_run(id).unwrap(), None);
    assert_eq!(scheduler.step_run(id).unwrap(), None);

    assert_eq!(scheduler.finish(id).unwrap().into_inner(), vec![1, 2]);
}
