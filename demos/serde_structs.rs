//! Typed round trips between Rust structs and flat entries.
//!
//! Run with: cargo run --example serde_structs

use flatpath::{flatten, from_value, to_value, unflatten, PathOptions};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Customer {
    name: String,
    email: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Item {
    sku: String,
    quantity: u32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Order {
    id: u32,
    customer: Customer,
    items: Vec<Item>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let order = Order {
        id: 1001,
        customer: Customer {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        },
        items: vec![
            Item {
                sku: "SKU1".to_string(),
                quantity: 2,
            },
            Item {
                sku: "SKU2".to_string(),
                quantity: 1,
            },
        ],
    };

    // Struct to Value to flat entries
    let options = PathOptions::default();
    let flat = flatten(&to_value(&order)?, &options);

    println!("Order as flat entries:");
    for (path, leaf) in flat.iter() {
        println!("  {} = {}", path, leaf);
    }
    println!();

    // Flat entries back to Value, then back to the struct
    let order_back: Order = from_value(unflatten(&flat, &options)?)?;
    assert_eq!(order, order_back);
    println!("✓ Typed round-trip successful");

    Ok(())
}
