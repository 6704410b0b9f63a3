use std::sync::{Arc, Barrier};
use std::thread;

use crate::tests::test_utils::{assert_ids_monotonic, assert_unique_ids, ManualClock, BASE_MILLIS};
use crate::{TsidConfig, TsidGenerator};

#[test]
fn test_concurrent_generation() {
    let generator = Arc::new(TsidGenerator::new(TsidConfig::new(7, 0).unwrap()));
    let num_threads = 8;
    let ids_per_thread = 1000;
    let mut handles = Vec::with_capacity(num_threads);

    for _ in 0..num_threads {
        let generator = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut ids = Vec::with_capacity(ids_per_thread);
            for _ in 0..ids_per_thread {
                ids.push(generator.generate().unwrap());
            }
            ids
        }));
    }

    let mut all_ids = Vec::with_capacity(num_threads * ids_per_thread);
    for handle in handles {
        let ids = handle.join().expect("thread panicked");
        // Each thread observes its own IDs in generation order
        assert_ids_monotonic(&ids);
        all_ids.extend(ids);
    }

    assert_unique_ids(&all_ids, num_threads * ids_per_thread);
}

#[test]
fn test_high_contention_frozen_clock() {
    // Every thread hammers the same millisecond, forcing repeated rollovers
    let clock = ManualClock::new(BASE_MILLIS);
    let generator = Arc::new(TsidGenerator::with_clock(
        TsidConfig::new(1, 0).unwrap(),
        clock,
    ));
    let barrier = Arc::new(Barrier::new(4));
    let mut handles = vec![];

    for _ in 0..4 {
        let generator = Arc::clone(&generator);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            (0..5000)
                .map(|_| generator.generate().unwrap())
                .collect::<Vec<_>>()
        }));
    }

    let mut all_ids = vec![];
    for handle in handles {
        let ids = handle.join().unwrap();
        assert_ids_monotonic(&ids);
        all_ids.extend(ids);
    }

    assert_unique_ids(&all_ids, 20_000);
    assert!(all_ids
        .iter()
        .any(|id| id.timestamp_delta() > BASE_MILLIS as u64));
}
