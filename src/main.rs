// this is mainly useful for checking the assembly output of the increment loops

use std::sync::atomic::AtomicIsize;

use tracing::{info, Level};

use randomfill::buffer;

const SIZE: usize = 1 << 20;
const TRIALS: usize = 10_000_000;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let fillme = buffer::zeroed(SIZE);
    let collisions = AtomicIsize::new(0);

    for &cardinality in &[1, 1 << 10, SIZE] {
        let naive = naive(&fillme, cardinality);
        let atomic = atomic(&fillme, cardinality);
        let cassafe = cassafe(&fillme, cardinality, &collisions);
        info!(cardinality, naive, atomic, cassafe, "elapsed seconds");
    }

    info!(total = buffer::total(&fillme), collisions = collisions.into_inner(), "done");
}

#[inline(never)]
fn naive(fillme: &[AtomicIsize], cardinality: usize) -> f64 {
    randomfill::naive(fillme, SIZE, TRIALS, cardinality)
}

#[inline(never)]
fn atomic(fillme: &[AtomicIsize], cardinality: usize) -> f64 {
    randomfill::atomic(fillme, SIZE, TRIALS, cardinality)
}

#[inline(never)]
fn cassafe(fillme: &[AtomicIsize], cardinality: usize, collisions: &AtomicIsize) -> f64 {
    randomfill::cassafe(fillme, SIZE, TRIALS, cardinality, collisions)
}
