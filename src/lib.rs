//! # Dynamic segment tree
//!
//! An in-memory map from a contiguous range of integer keys to values,
//! with logarithmic range assignment (`set`), range updates (`update`),
//! point queries (`get`), and range aggregation (`range_get`).
//!
//! The tree is *dynamic*: it starts as a single leaf and grows nodes
//! only where value runs actually split, collapsing back when an
//! assignment makes a subtree uniform again. Memory is proportional to
//! the number of distinct runs, so enormous key spans cost nothing up
//! front:
//!
//! ```
//! use dynamic_segment_tree::presets::sum_tree;
//!
//! let mut meters = sum_tree(-1_000_000_000i64, 1_000_000_000, 0);
//! meters.set(10, 1_000, 3);
//! meters.update(100, 2_000, 2);
//! assert_eq!(*meters.get(150).unwrap(), 5);
//! assert_eq!(meters.range_get(0, 200), 90 * 3 + 100 * 5);
//! ```
//!
//! The generic core is configured at construction through the builder:
//! an update operator (none, nullary, or binary with an argument) and a
//! range-aggregation pair (combiner plus segment initializer), each
//! erased from the public surface when absent. The [`presets`] module
//! covers the common sum/min/max/avg/negate configurations.

#![warn(missing_docs, missing_debug_implementations)]

pub mod algebra; // operator algebra: update and range-get variations
pub mod key; // integer key abstraction
pub mod presets; // curried trees (sum / min / max / avg / negate)
pub mod tree; // the tree core

// Re-exports for convenience
pub use algebra::{
    BinaryUpdate, NoRangeGet, NoUpdate, NullaryUpdate, Plain, RangeGet, WithBorders,
};
pub use key::TreeKey;
pub use tree::{Builder, DynamicSegmentTree};

use thiserror::Error;

/// Errors surfaced to callers.
///
/// Only point lookup can fail for user reasons; every other
/// out-of-domain call is either a documented no-op or a documented
/// panic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError<K>
where
    K: std::fmt::Debug + std::fmt::Display,
{
    /// Point lookup outside the tree's key range.
    #[error("key {key} is out of the tree range [{begin}, {end})")]
    OutOfRange {
        /// The offending key.
        key: K,
        /// Beginning of the tree's key range.
        begin: K,
        /// One past the tree's last key.
        end: K,
    },
}
