use tsid::{Tsid, TsidConfig, TsidGenerator};

fn main() {
    // Create a generator with node ID 1 and the Unix epoch
    let config = TsidConfig::new(1, 0).unwrap();
    let generator = TsidGenerator::new(config);

    // Generate some IDs
    let id1 = generator.generate().unwrap();
    let id2 = generator.generate().unwrap();
    let id3 = generator.generate().unwrap();

    println!("Generated IDs (guaranteed to be monotonic):");
    print_id(id1, &config);
    print_id(id2, &config);
    print_id(id3, &config);

    // Or extract components individually
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Timestamp: {} ms since epoch", id2.timestamp_delta());
    println!("  Node ID: {}", id2.node());
    println!("  Sequence: {}", id2.sequence());
}

fn print_id(id: Tsid, config: &TsidConfig) {
    let (since_epoch, node, sequence) = id.decompose();
    let datetime = id.datetime(config.epoch()).unwrap();

    println!(
        "  ID: {} ({id}), Timestamp: {since_epoch}, Human date: {datetime}, Node ID: {node}, Sequence: {sequence}",
        id.as_i64()
    );
}
