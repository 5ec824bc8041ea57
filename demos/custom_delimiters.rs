//! Reshaping paths with PathOptions.
//!
//! Run with: cargo run --example custom_delimiters

use flatpath::{flat, flatten, unflatten, PathOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let value = flat!({
        "server": {
            "host": "localhost",
            "ports": [8080, 8081]
        },
        "debug": true
    });

    // Default format (dot separator, bracketed indices)
    println!("Default (dots and brackets):");
    let default = PathOptions::default();
    for (path, leaf) in flatten(&value, &default).iter() {
        println!("  {} = {}", path, leaf);
    }
    println!();

    // Wrapped keys (query-string style)
    println!("Wrapped keys:");
    let wrapped = PathOptions::default()
        .with_prefix("{")
        .with_suffix("}")
        .with_suffix_end(true);
    for (path, leaf) in flatten(&value, &wrapped).iter() {
        println!("  {} = {}", path, leaf);
    }
    println!();

    // Slash separator, indices as plain segments
    println!("Slashes, no list markers:");
    let slashed = PathOptions::default()
        .with_suffix("/")
        .with_list_prefix("")
        .with_list_suffix("");
    for (path, leaf) in flatten(&value, &slashed).iter() {
        println!("  {} = {}", path, leaf);
    }
    println!();

    // Expansion uses the same options the paths were encoded with
    let flat = flatten(&value, &wrapped);
    let rebuilt = unflatten(&flat, &wrapped)?;
    assert_eq!(value, rebuilt);
    println!("✓ Wrapped round-trip successful");

    Ok(())
}
