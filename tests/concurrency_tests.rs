#![cfg(feature = "effect")]
//! Parallel applicative combination and lock-guarded effects.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use kleisli::effect::{ApplyMode, IO, IOEither};
use parking_lot::Mutex;
use rstest::rstest;

fn slow_io(
    value: usize,
    duration: Duration,
    active: &Arc<AtomicUsize>,
    peak: &Arc<AtomicUsize>,
) -> IO<usize> {
    let (active, peak) = (Arc::clone(active), Arc::clone(peak));
    IO::new(move || {
        let now = active.fetch_add(1, Ordering::SeqCst) + 1;
        peak.fetch_max(now, Ordering::SeqCst);
        std::thread::sleep(duration);
        active.fetch_sub(1, Ordering::SeqCst);
        value
    })
}

#[rstest]
fn sequential_traverse_never_overlaps() {
    let (active, peak) = (Arc::new(AtomicUsize::new(0)), Arc::new(AtomicUsize::new(0)));
    let (task_active, task_peak) = (Arc::clone(&active), Arc::clone(&peak));

    let io = IO::traverse(
        (0..8).collect(),
        move |n| slow_io(n, Duration::from_millis(2), &task_active, &task_peak),
        ApplyMode::Sequential,
    );

    assert_eq!(io.run_unsafe(), (0..8).collect::<Vec<_>>());
    assert_eq!(peak.load(Ordering::SeqCst), 1);
}

#[rstest]
fn parallel_traverse_keeps_order() {
    let (active, peak) = (Arc::new(AtomicUsize::new(0)), Arc::new(AtomicUsize::new(0)));
    let (task_active, task_peak) = (Arc::clone(&active), Arc::clone(&peak));

    let io = IO::traverse(
        (0..32).collect(),
        move |n: usize| {
            let duration = Duration::from_millis(32 - n as u64);
            slow_io(n * 2, duration, &task_active, &task_peak)
        },
        ApplyMode::Parallel,
    );

    assert_eq!(io.run_unsafe(), (0..32).map(|n| n * 2).collect::<Vec<_>>());
    assert_eq!(active.load(Ordering::SeqCst), 0);
}

#[rstest]
#[case(ApplyMode::Sequential)]
#[case(ApplyMode::Parallel)]
fn ap_argument_failure_reported_when_function_succeeds(#[case] mode: ApplyMode) {
    let function = IOEither::<&str, _>::right(|n: i32| n + 1);
    let argument = IOEither::<&str, i32>::left("bad argument");

    assert_eq!(function.ap(argument, mode).run_unsafe(), Err("bad argument"));
}

#[rstest]
fn with_lock_serialises_invocations() {
    let lock = Arc::new(Mutex::new(()));
    let (active, peak) = (Arc::new(AtomicUsize::new(0)), Arc::new(AtomicUsize::new(0)));

    let guarded: Vec<IO<usize>> = (0..8)
        .map(|n| {
            let lock = Arc::clone(&lock);
            slow_io(n, Duration::from_millis(2), &active, &peak).with_lock(move || lock.lock_arc())
        })
        .collect();

    let results = IO::sequence(guarded, ApplyMode::Parallel).run_unsafe();

    assert_eq!(results, (0..8).collect::<Vec<_>>());
    assert_eq!(peak.load(Ordering::SeqCst), 1);
}

#[rstest]
fn with_lock_releases_after_run() {
    let lock = Arc::new(Mutex::new(()));
    let guard_source = Arc::clone(&lock);

    let io = IOEither::<String, u8>::right(1).with_lock(move || guard_source.lock_arc());

    assert_eq!(io.run_unsafe(), Ok(1));
    assert!(!lock.is_locked());
}
