use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tsid::{TsidConfig, TsidGenerator};

fn main() {
    // One shared generator per node; no external lock needed
    let generator = Arc::new(TsidGenerator::new(TsidConfig::new(1, 0).unwrap()));
    let mut handles = vec![];

    for thread_id in 0..4 {
        let generator = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();

            for i in 0..5 {
                let id = generator.generate().unwrap();
                let (ts, node, seq) = id.decompose();

                println!(
                    "Thread {} generated ID {} {} (ts={}, node={}, seq={})",
                    thread_id, i, id, ts, node, seq
                );

                assert!(ids.insert(id), "Duplicate ID generated!");
                thread::sleep(Duration::from_millis((thread_id * 3 + i) % 7));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }
    println!("\nTotal unique IDs generated: {}", all_ids.len());

    // Separate nodes never collide with each other
    let other = TsidGenerator::new(TsidConfig::new(2, 0).unwrap());
    for _ in 0..1000 {
        assert!(all_ids.insert(other.generate().unwrap()));
    }
    println!("Node 2 added 1000 more IDs without collision");
}
