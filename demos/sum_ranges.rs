//! Range-sum bookkeeping over a huge key span
//!
//! Run with: cargo run --example sum_ranges

use anyhow::Result;
use dynamic_segment_tree::presets::sum_tree;

fn main() -> Result<()> {
    // Two billion addressable meters, all starting at zero.
    let mut meters = sum_tree(-1_000_000_000i64, 1_000_000_000, 0);

    meters.set(10, 1_000, 3);
    meters.update(100, 2_000, 2);
    meters.update(-500, 50, 1);

    let at_150 = *meters.get(150)?;
    println!("meter 150 reads {at_150}");
    println!("district [0, 200) total: {}", meters.range_get(0, 200));
    println!("district [-600, 0) total: {}", meters.range_get(-600, 0));
    println!(
        "materialized nodes: {} (for 2_000_000_000 keys)",
        meters.node_count()
    );

    Ok(())
}
