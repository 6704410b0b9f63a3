use tsid::{TsidConfig, TsidGenerator};

fn main() {
    // Node 42, timestamps counted from 2024-01-01
    let config = TsidConfig::builder()
        .node(42)
        .epoch(1_704_067_200_000)
        .build()
        .unwrap();

    let generator = TsidGenerator::new(config);

    println!("Generator configuration:");
    println!("  Node: {}", generator.config().node());
    println!("  Epoch: {} ms", generator.config().epoch());

    // Generate and analyze an ID
    let id = generator.generate().unwrap();
    let (ts, node, seq) = id.decompose();

    println!("\nGenerated ID: {} ({})", id, id.as_i64());
    println!("Components:");
    println!("  Timestamp: {} ms since epoch", ts);
    println!("  Node ID: {}", node);
    println!("  Sequence: {}", seq);

    // Configuration can also come from TSID_NODE / TSID_EPOCH
    match TsidConfig::from_env() {
        Ok(config) => println!("\nFrom environment: node {}, epoch {}", config.node(), config.epoch()),
        Err(err) => println!("\nEnvironment configuration rejected: {err}"),
    }
}
