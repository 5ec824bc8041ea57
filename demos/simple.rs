//! Basic flattening and expansion with default delimiters.
//!
//! Run with: cargo run --example simple

use flatpath::{flatten, from_value, to_value, unflatten, PathOptions};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    tags: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let user = User {
        id: 42,
        name: "Alice Johnson".to_string(),
        tags: vec!["admin".to_string(), "staff".to_string()],
    };

    // Flatten to path-keyed entries
    let options = PathOptions::default();
    let value = to_value(&user)?;
    let flat = flatten(&value, &options);

    println!("Flat entries:");
    for (path, leaf) in flat.iter() {
        println!("  {} = {}", path, leaf);
    }
    println!();

    // Expand back to the nested form
    let rebuilt = unflatten(&flat, &options)?;
    let user_back: User = from_value(rebuilt)?;
    assert_eq!(user, user_back);
    println!("✓ Round-trip successful");

    Ok(())
}
