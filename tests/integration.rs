use std::sync::atomic::{AtomicBool, AtomicIsize, Ordering};
use std::sync::Barrier;
use std::thread;

use randomfill::buffer;

const THREADS: usize = 4;
const TRIALS: usize = 100_000;
const SIZE: usize = 1024;

/// Calls `f` from `THREADS` threads at once, released together by a barrier.
fn run_concurrently<F>(f: F)
where
    F: Fn() + Sync,
{
    let barrier = Barrier::new(THREADS);
    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                barrier.wait();
                f();
            });
        }
    });
}

#[test]
fn concurrent_atomic_loses_no_updates() {
    for &cardinality in &[1, 16, SIZE] {
        let fillme = buffer::zeroed(SIZE);
        run_concurrently(|| {
            let elapsed = randomfill::atomic(&fillme, SIZE, TRIALS, cardinality);
            assert!(elapsed >= 0.0);
        });

        assert_eq!(buffer::total(&fillme), (THREADS * TRIALS) as isize);
    }
}

#[test]
fn concurrent_naive_never_gains_updates() {
    let fillme = buffer::zeroed(SIZE);
    run_concurrently(|| {
        randomfill::naive(&fillme, SIZE, TRIALS, 1);
    });

    // racing load/store pairs can only ever drop increments
    let total = buffer::total(&fillme);
    assert!(total > 0);
    assert!(total <= (THREADS * TRIALS) as isize);
    assert_eq!(total, fillme[0].load(Ordering::Relaxed));
}

#[test]
fn concurrent_cassafe_loses_no_updates() {
    let fillme = buffer::zeroed(SIZE);
    let collisions = AtomicIsize::new(0);
    let done = AtomicBool::new(false);

    thread::scope(|scope| {
        // the shared collision counter must never go backwards
        let monitor = scope.spawn(|| {
            let mut last = 0;
            while !done.load(Ordering::Acquire) {
                let curr = collisions.load(Ordering::Relaxed);
                assert!(curr >= last, "collision counter decreased from {} to {}", last, curr);
                last = curr;
            }
        });

        run_concurrently(|| {
            randomfill::cassafe(&fillme, SIZE, TRIALS, 1, &collisions);
        });
        done.store(true, Ordering::Release);
        monitor.join().unwrap();
    });

    assert_eq!(buffer::total(&fillme), (THREADS * TRIALS) as isize);
    assert!(collisions.load(Ordering::Relaxed) >= 0);
}

#[test]
fn concurrent_cassafe_with_separate_counters() {
    let fillme = buffer::zeroed(SIZE);
    let counters: Vec<_> = (0..THREADS).map(|_| AtomicIsize::new(0)).collect();

    thread::scope(|scope| {
        for collisions in &counters {
            let fillme = &fillme;
            scope.spawn(move || randomfill::cassafe(fillme, SIZE, TRIALS, 4, collisions));
        }
    });

    assert_eq!(buffer::total(&fillme), (THREADS * TRIALS) as isize);
    assert!(counters.iter().all(|collisions| collisions.load(Ordering::Relaxed) >= 0));
}

#[test]
fn concurrent_atomic_with_collisions_never_counts() {
    let fillme = buffer::zeroed(SIZE);
    let collisions = AtomicIsize::new(0);
    run_concurrently(|| {
        randomfill::atomic_with_collisions(&fillme, SIZE, TRIALS, 1, &collisions);
    });

    assert_eq!(buffer::total(&fillme), (THREADS * TRIALS) as isize);
    assert_eq!(fillme[0].load(Ordering::Relaxed), (THREADS * TRIALS) as isize);
    assert_eq!(collisions.load(Ordering::Relaxed), 0);
}

#[test]
fn elapsed_grows_with_trials() {
    let fillme = buffer::zeroed(SIZE);
    let none = randomfill::atomic(&fillme, SIZE, 0, SIZE);
    let many = randomfill::atomic(&fillme, SIZE, 1_000_000, SIZE);
    assert!(none >= 0.0);
    assert!(many >= none);
}
