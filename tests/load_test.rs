//! Concurrency load testing for the fault gauge.

use fault_gauge::{FaultGauge, WindowCounts};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

mod common;

const THREADS: usize = 20;
const CALLS_PER_THREAD: usize = 500;

#[test]
fn test_no_lost_updates_on_system_clock() {
    // A window far longer than the epoch offset: every call lands in window 0.
    let gauge = Arc::new(FaultGauge::new(Duration::from_secs(1 << 40)));
    let start = Instant::now();

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let gauge = gauge.clone();
            thread::spawn(move || {
                for n in 0..CALLS_PER_THREAD {
                    if (i + n) % 2 == 0 {
                        gauge.record_failure();
                    } else {
                        gauge.record_success();
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let expected = (THREADS * CALLS_PER_THREAD) as u64;
    assert_eq!(gauge.total_count(), (expected, 0));
    assert_eq!(gauge.fail_count(), (expected / 2, 0));
    assert_eq!(gauge.success_count(), (expected / 2, 0));
    assert_eq!(gauge.fail_rate().0, 0.5);

    println!("{} concurrent increments in {:?}", expected, start.elapsed());
}

#[test]
fn test_counts_stay_consistent_while_windows_rotate() {
    let (gauge, clock) = common::manual_gauge(0, Duration::from_secs(1));
    let gauge = Arc::new(gauge);
    let done = Arc::new(AtomicBool::new(false));

    let ticker = {
        let done = done.clone();
        thread::spawn(move || {
            while !done.load(Ordering::Relaxed) {
                clock.advance(Duration::from_millis(250));
                thread::yield_now();
            }
        })
    };

    let reader = {
        let gauge = gauge.clone();
        let done = done.clone();
        thread::spawn(move || {
            let mut reads = 0u64;
            while !done.load(Ordering::Relaxed) {
                let snap = gauge.snapshot();
                assert_consistent(&snap.current);
                assert_consistent(&snap.previous);
                if let (Some(current), Some(previous)) = (snap.current_start, snap.previous_start) {
                    assert!(current != previous);
                }
                reads += 1;
            }
            reads
        })
    };

    let writers: Vec<_> = (0..THREADS)
        .map(|i| {
            let gauge = gauge.clone();
            thread::spawn(move || {
                for n in 0..CALLS_PER_THREAD {
                    if (i * n) % 3 == 0 {
                        gauge.record_failure();
                    } else {
                        gauge.record_success();
                    }
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    done.store(true, Ordering::Relaxed);
    ticker.join().unwrap();
    let reads = reader.join().unwrap();

    let snap = gauge.snapshot();
    assert_consistent(&snap.current);
    assert_consistent(&snap.previous);
    let seen = snap.current.total + snap.previous.total;
    assert!((1..=(THREADS * CALLS_PER_THREAD) as u64).contains(&seen));
    assert!(reads > 0);
}

fn assert_consistent(counts: &WindowCounts) {
    assert_eq!(counts.total, counts.fail + counts.success, "torn window: {counts:?}");
}
