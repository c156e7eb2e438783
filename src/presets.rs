//! Curried trees
//!
//! Pre-specialized configurations of the generic core for the common
//! aggregates over `i64` values. Each is a thin alias: a choice of
//! combiner, initializer, and update operator, plus a constructor.
//! Anything beyond these shapes goes through
//! [`DynamicSegmentTree::builder`].

use crate::algebra::{BinaryUpdate, NoRangeGet, NullaryUpdate, Plain, RangeGet, WithBorders};
use crate::key::TreeKey;
use crate::tree::DynamicSegmentTree;

type PlainCombine = Plain<fn(i64, i64) -> i64>;
type IdentityInit = Plain<fn(&i64) -> i64>;
type SpanInit<K> = WithBorders<fn(&i64, K, K) -> i64>;
type AddDelta = BinaryUpdate<fn(&i64, &i64) -> i64, i64>;

fn add(left: i64, right: i64) -> i64 {
    left + right
}

fn identity(value: &i64) -> i64 {
    *value
}

fn add_delta(value: &i64, delta: &i64) -> i64 {
    value + delta
}

fn span_sum<K: TreeKey>(value: &i64, begin: K, end: K) -> i64 {
    *value * K::distance(begin, end) as i64
}

/// Sum over ranges; `update(begin, end, delta)` adds `delta` pointwise.
pub type SumTree<K> = DynamicSegmentTree<K, i64, RangeGet<i64, PlainCombine, SpanInit<K>>, AddDelta>;

/// Build a [`SumTree`] over `[begin, end)` filled with `fill`.
pub fn sum_tree<K: TreeKey>(begin: K, end: K, fill: i64) -> SumTree<K> {
    DynamicSegmentTree::builder(begin, end, fill)
        .range_get(
            Plain(add as fn(i64, i64) -> i64),
            WithBorders(span_sum::<K> as fn(&i64, K, K) -> i64),
        )
        .update(BinaryUpdate::new(add_delta as fn(&i64, &i64) -> i64))
        .build()
}

/// Minimum over ranges; `update(begin, end, delta)` adds `delta`.
pub type MinTree<K> = DynamicSegmentTree<K, i64, RangeGet<i64, PlainCombine, IdentityInit>, AddDelta>;

/// Build a [`MinTree`] over `[begin, end)` filled with `fill`.
pub fn min_tree<K: TreeKey>(begin: K, end: K, fill: i64) -> MinTree<K> {
    fn min(left: i64, right: i64) -> i64 {
        left.min(right)
    }
    DynamicSegmentTree::builder(begin, end, fill)
        .range_get(
            Plain(min as fn(i64, i64) -> i64),
            Plain(identity as fn(&i64) -> i64),
        )
        .update(BinaryUpdate::new(add_delta as fn(&i64, &i64) -> i64))
        .build()
}

/// Maximum over ranges; `update(begin, end, delta)` adds `delta`.
pub type MaxTree<K> = DynamicSegmentTree<K, i64, RangeGet<i64, PlainCombine, IdentityInit>, AddDelta>;

/// Build a [`MaxTree`] over `[begin, end)` filled with `fill`.
pub fn max_tree<K: TreeKey>(begin: K, end: K, fill: i64) -> MaxTree<K> {
    fn max(left: i64, right: i64) -> i64 {
        left.max(right)
    }
    DynamicSegmentTree::builder(begin, end, fill)
        .range_get(
            Plain(max as fn(i64, i64) -> i64),
            Plain(identity as fn(&i64) -> i64),
        )
        .update(BinaryUpdate::new(add_delta as fn(&i64, &i64) -> i64))
        .build()
}

/// Aggregate produced by [`avg_tree`]: the sum and key count of the
/// queried span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanAggregate {
    /// Sum of the values over the span.
    pub sum: i64,
    /// Number of keys in the span.
    pub len: u64,
}

impl SpanAggregate {
    /// Arithmetic mean over the span.
    pub fn mean(&self) -> f64 {
        self.sum as f64 / self.len as f64
    }
}

type AvgCombine = Plain<fn(SpanAggregate, SpanAggregate) -> SpanAggregate>;
type AvgInit<K> = WithBorders<fn(&i64, K, K) -> SpanAggregate>;

/// Average over ranges, carried as `(sum, len)` pairs;
/// `update(begin, end, delta)` adds `delta` pointwise.
pub type AvgTree<K> =
    DynamicSegmentTree<K, i64, RangeGet<SpanAggregate, AvgCombine, AvgInit<K>>, AddDelta>;

/// Build an [`AvgTree`] over `[begin, end)` filled with `fill`.
pub fn avg_tree<K: TreeKey>(begin: K, end: K, fill: i64) -> AvgTree<K> {
    fn merge(left: SpanAggregate, right: SpanAggregate) -> SpanAggregate {
        SpanAggregate {
            sum: left.sum + right.sum,
            len: left.len + right.len,
        }
    }
    fn span_aggregate<K: TreeKey>(value: &i64, begin: K, end: K) -> SpanAggregate {
        let len = K::distance(begin, end);
        SpanAggregate {
            sum: *value * len as i64,
            len,
        }
    }
    DynamicSegmentTree::builder(begin, end, fill)
        .range_get(
            Plain(merge as fn(SpanAggregate, SpanAggregate) -> SpanAggregate),
            WithBorders(span_aggregate::<K> as fn(&i64, K, K) -> SpanAggregate),
        )
        .update(BinaryUpdate::new(add_delta as fn(&i64, &i64) -> i64))
        .build()
}

type NegateOp = NullaryUpdate<fn(&i64) -> i64>;

/// No aggregation; `update(begin, end)` flips the sign of every key in
/// the range.
pub type NegateTree<K> = DynamicSegmentTree<K, i64, NoRangeGet, NegateOp>;

/// Build a [`NegateTree`] over `[begin, end)` filled with `fill`.
pub fn negate_tree<K: TreeKey>(begin: K, end: K, fill: i64) -> NegateTree<K> {
    fn negate(value: &i64) -> i64 {
        -value
    }
    DynamicSegmentTree::builder(begin, end, fill)
        .update(NullaryUpdate::new(negate as fn(&i64) -> i64))
        .build()
}
