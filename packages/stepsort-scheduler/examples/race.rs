//! Races bubble sort against heapsort on the same shuffled input, one step
//! per run per tick, then prints what each algorithm spent.

use rand::seq::SliceRandom;

use stepsort_core::{Algorithm, VecContext};
use stepsort_scheduler::{LocalScheduler, Scheduler};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut data: Vec<u64> = (0..32).collect();
    data.shuffle(&mut rand::rng());

    let mut scheduler = LocalScheduler::new();
    let bubble = scheduler.add_run(Algorithm::Bubble, VecContext::new(data.clone()));
    let heap = scheduler.add_run(Algorithm::Heap, VecContext::new(data));

    scheduler.run_to_completion().expect("runs are well-formed");

    let mut by_label: Vec<_> = scheduler.metrics().steps_by_label.iter().collect();
    by_label.sort();
    for (label, count) in by_label {
        println!("{label:16} {count:6} steps");
    }

    for (name, id) in [("bubble", bubble), ("heap", heap)] {
        let ctx = scheduler.finish(id).expect("run exists");
        let stats = ctx.stats();
        println!(
            "{name:8} {} compares, {} swaps -> {:?}...",
            stats.compares,
            stats.swaps,
            &ctx.as_slice()[..4]
        );
    }
}
