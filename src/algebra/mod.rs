//! Operator algebra
//!
//! The two capability axes of a tree, chosen at construction time:
//! which update operator it carries (none, nullary, or binary with an
//! argument) and whether range aggregation is available (a combiner
//! paired with a segment initializer). Disabled capabilities erase the
//! corresponding operations from the tree's public surface.

mod combiner;
mod update;

pub use combiner::{
    NoRangeGet, Plain, RangeGet, RangeGetPolicy, SegmentCombiner, SegmentInitializer, WithBorders,
};
pub use update::{BinaryUpdate, NoUpdate, NullaryUpdate, UpdatePolicy};
