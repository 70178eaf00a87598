use std::panic::{self, AssertUnwindSafe};

use seqkit::SeqIteratorsExt;
use seqkit_testkit::Probe;

#[test]
fn test_early_abandonment_drops_source_once() {
    let (probe, stats) = Probe::new(0..1_000u32);
    let mut windows = probe.window(3).unwrap();
    assert_eq!(windows.next(), Some(vec![0, 1, 2]));
    assert_eq!(stats.drops(), 0);
    drop(windows);
    assert_eq!(stats.drops(), 1);

    let (probe, stats) = Probe::new(0..1_000u32);
    for chunk in probe.batch(10).unwrap() {
        if chunk[0] >= 20 {
            break;
        }
    }
    assert_eq!(stats.drops(), 1);
}

#[test]
fn test_exhaustion_releases_before_adapter_drop() {
    let (probe, stats) = Probe::new(0..5u32);
    let mut it = probe.lead_default(1, |a, b| (a, b)).unwrap();
    let collected: Vec<_> = it.by_ref().collect();
    assert_eq!(collected.len(), 5);
    assert_eq!(stats.drops(), 1);
    assert_eq!(it.next(), None);
    drop(it);
    assert_eq!(stats.drops(), 1);
}

#[test]
fn test_window_does_not_pull_past_first_window() {
    // Elements past the third would panic; taking the first window must not reach them.
    let (probe, stats) = Probe::new(0..10u32);
    let mut windows = probe.panic_after(3).window(3).unwrap();
    assert_eq!(windows.next(), Some(vec![0, 1, 2]));
    assert_eq!(stats.pulls(), 3);
    drop(windows);
    assert_eq!(stats.drops(), 1);
}

#[test]
fn test_move_does_not_pull_past_needed_span() {
    let (probe, stats) = Probe::new(0..10u32);
    let mut moved = probe.panic_after(5).move_range(3, 2, 0).unwrap();
    assert_eq!(moved.next(), Some(3));
    assert_eq!(moved.next(), Some(4));
    assert_eq!(moved.next(), Some(0));
    assert_eq!(stats.pulls(), 5);
}

#[test]
fn test_lag_pulls_one_per_output() {
    let (probe, stats) = Probe::new(0..10u32);
    let mut lagged = probe.lag_default(3, |a, b| (a, b)).unwrap();
    for expected in 1..=4 {
        lagged.next();
        assert_eq!(stats.pulls(), expected);
    }
}

#[test]
fn test_fault_mid_stream_releases_source_once() {
    let (probe, stats) = Probe::new(0..10u32);
    let batches = probe.panic_after(4).batch(2).unwrap();
    let result = panic::catch_unwind(AssertUnwindSafe(move || batches.collect::<Vec<_>>()));
    assert!(result.is_err());
    assert_eq!(stats.pulls(), 4);
    assert_eq!(stats.drops(), 1);
}

#[test]
fn test_fault_while_buffering_releases_source_once() {
    let (probe, stats) = Probe::new(0..10u32);
    let swapped = probe.panic_after(5).swap_range(1, 6, 2).unwrap();
    let result = panic::catch_unwind(AssertUnwindSafe(move || swapped.collect::<Vec<_>>()));
    assert!(result.is_err());
    assert_eq!(stats.drops(), 1);
}

#[test]
fn test_selector_fault_releases_source_once() {
    let (probe, stats) = Probe::new(0..10u32);
    let sums = probe
        .batch_map(3, |chunk: Vec<u32>| {
            if chunk[0] >= 3 {
                panic!("chunk starting at {} rejected", chunk[0]);
            }
            chunk.iter().sum::<u32>()
        })
        .unwrap();
    let result = panic::catch_unwind(AssertUnwindSafe(move || sums.collect::<Vec<_>>()));
    assert!(result.is_err());
    assert_eq!(stats.pulls(), 6);
    assert_eq!(stats.drops(), 1);

    let (probe, stats) = Probe::new(0..10u32);
    let mut lagged = probe
        .lag_default(2, |current, previous| {
            assert!(current < 5, "element {current} rejected");
            current + previous
        })
        .unwrap();
    assert_eq!(lagged.next(), Some(0));
    let result = panic::catch_unwind(AssertUnwindSafe(move || lagged.count()));
    assert!(result.is_err());
    assert_eq!(stats.drops(), 1);
}
