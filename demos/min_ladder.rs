//! Minimum queries over a ladder of single-cell assignments
//!
//! Run with: cargo run --example min_ladder

use anyhow::Result;
use dynamic_segment_tree::presets::min_tree;

fn main() -> Result<()> {
    let mut floors = min_tree(0i64, 42, 0);

    let mut rung = 1;
    for key in 34..42 {
        floors.set(key, key + 1, rung);
        rung *= 10;
    }

    println!("lowest of [0, 42): {}", floors.range_get(0, 42));
    println!("lowest of [36, 42): {}", floors.range_get(36, 42));
    println!("lowest of [39, 42): {}", floors.range_get(39, 42));
    println!("cell 41 holds {}", *floors.get(41)?);

    Ok(())
}
