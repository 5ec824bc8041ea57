//! Merging several sources into one flat mapping and back.
//!
//! Run with: cargo run --example accumulate

use flatpath::{flat, flatten_into, unflatten_into, Map, PathOptions, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let options = PathOptions::default();

    // Namespace two documents into one mapping
    let primary = flat!({"host": "db1.internal", "port": 5432});
    let replica = flat!({"host": "db2.internal", "port": 5433});

    let mut flat = Map::new();
    flatten_into(&primary, &mut flat, &options, "primary.");
    flatten_into(&replica, &mut flat, &options, "replica.");

    println!("Merged entries:");
    for (path, leaf) in flat.iter() {
        println!("  {} = {}", path, leaf);
    }
    println!();

    // Rebuild additively from separate flat sources
    let first: Map = [("servers[0]".to_string(), Value::from("db1"))]
        .into_iter()
        .collect();
    let second: Map = [("servers[1]".to_string(), Value::from("db2"))]
        .into_iter()
        .collect();

    let mut destination = Map::new();
    unflatten_into(&first, &mut destination, &options, "")?;
    unflatten_into(&second, &mut destination, &options, "")?;

    // Promotion runs once, after every source is merged
    let mut value = Value::Object(destination);
    value.promote_lists();
    assert_eq!(value, flat!({"servers": ["db1", "db2"]}));
    println!("✓ Additive expansion successful");

    Ok(())
}
