use tsid::{global_generate, Tsid};

fn main() {
    let id = Tsid::from_i64(175928847299117063).unwrap();
    println!("{} -> {}", id.as_i64(), id.to_text());

    // Lowercase and the I/L/O look-alikes are accepted when parsing
    for text in ["09RGCPP108007", "09rgcpp108007", "O9RGCPPIO8OO7", "ABCD$FGHIJKLM", "ABC"] {
        match text.parse::<Tsid>() {
            Ok(parsed) => println!("{text:>15} -> {}", parsed.as_i64()),
            Err(err) => println!("{text:>15} -> error: {err}"),
        }
    }

    // Process-wide generator configured from TSID_NODE / TSID_EPOCH
    match global_generate() {
        Ok(id) => println!("\nGlobal generator produced {id} (node {})", id.node()),
        Err(err) => println!("\nGlobal generator unavailable: {err}"),
    }
}
