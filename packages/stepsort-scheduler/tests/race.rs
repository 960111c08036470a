use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;

use stepsort_core::{ALL_ALGORITHMS, Algorithm, VecContext};
use stepsort_scheduler::{LocalScheduler, Scheduler, SchedulerError};

fn random_data(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<u64>() % 64).collect()
}

#[test]
fn round_robin_steps_every_active_run() {
    let data = random_data(16, 1);
    let mut scheduler = LocalScheduler::new();
    let bubble = scheduler.add_run(Algorithm::Bubble, VecContext::new(data.clone()));
    let insertion = scheduler.add_run(Algorithm::Insertion, VecContext::new(data));

    let bubble_before = scheduler.pending(bubble).unwrap();
    let insertion_before = scheduler.pending(insertion).unwrap();

    assert!(scheduler.tick().unwrap());

    // One step each: both queues replaced their head with its continuation.
    assert_eq!(scheduler.metrics().steps_executed, 2);
    assert_eq!(scheduler.pending(bubble).unwrap(), bubble_before);
    assert_eq!(scheduler.pending(insertion).unwrap(), insertion_before);
    assert_eq!(scheduler.metrics().ticks, 1);
}

#[test]
fn all_algorithms_race_to_the_same_result() {
    let data = random_data(48, 2);
    let mut expected = data.clone();
    expected.sort_unstable();

    let mut scheduler = LocalScheduler::new();
    let ids: Vec<_> = ALL_ALGORITHMS
        .iter()
        .map(|&algorithm| scheduler.add_run_seeded(algorithm, VecContext::new(data.clone()), 42))
        .collect();

    scheduler.run_to_completion().unwrap();

    for id in ids {
        let ctx = scheduler.finish(id).unwrap();
        assert_eq!(ctx.into_inner(), expected);
    }
}

#[test]
fn cancel_discards_queue_but_preserves_elements() {
    let data = random_data(32, 3);
    let mut scheduler = LocalScheduler::new();
    let id = scheduler.add_run_seeded(Algorithm::Quick, VecContext::new(data.clone()), 9);

    for _ in 0..10 {
        scheduler.tick().unwrap();
    }

    let mut partial = scheduler.cancel(id).unwrap().into_inner();
    assert!(scheduler.is_idle());

    // Steps only ever swap, so whatever ran so far is a permutation.
    let mut expected = data;
    partial.sort_unstable();
    expected.sort_unstable();
    assert_eq!(partial, expected);
}

#[test]
fn seeded_runs_replay_identically() {
    let data = random_data(24, 4);

    let labels = |seed: u64| {
        let mut scheduler = LocalScheduler::new();
        let id = scheduler.add_run_seeded(Algorithm::Quick, VecContext::new(data.clone()), seed);
        let mut labels = Vec::new();
        while let Some(label) = scheduler.step_run(id).unwrap() {
            labels.push(label);
        }
        labels
    };

    assert_eq!(labels(7), labels(7));

    // Pivot choice is the only nondeterminism; across a spread of seeds the
    // traces cannot all collapse to one shape.
    let distinct: std::collections::HashSet<Vec<&'static str>> =
        (0..16u64).map(labels).collect();
    assert!(distinct.len() > 1);
}

#[test]
fn unknown_run_is_an_error() {
    let mut scheduler = LocalScheduler::new();
    let id = scheduler.add_run(Algorithm::Heap, VecContext::new(vec![2_u64, 1]));
    scheduler.cancel(id).unwrap();

    assert_eq!(scheduler.step_run(id), Err(SchedulerError::UnknownRun(id)));
    assert!(scheduler.context(id).is_err());
    assert!(scheduler.pending(id).is_err());
}
