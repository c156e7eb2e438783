//! Typed construction builder
//!
//! Capabilities are encoded in the builder's type, so `build` yields a
//! tree whose unsupported operations simply do not exist. Enabling
//! range aggregation takes the combiner and initializer together; one
//! without the other is unrepresentable.

use std::fmt;

use crate::algebra::{
    NoRangeGet, NoUpdate, RangeGet, SegmentCombiner, SegmentInitializer, UpdatePolicy,
};
use crate::key::TreeKey;
use crate::tree::DynamicSegmentTree;

/// Fluent builder refining which operations the tree supports.
///
/// Created by [`DynamicSegmentTree::builder`]; both capabilities
/// default to disabled, matching [`DynamicSegmentTree::new`].
pub struct Builder<K, V, G, U> {
    begin: K,
    end: K,
    fill: V,
    range_get: G,
    update: U,
}

impl<K, V> Builder<K, V, NoRangeGet, NoUpdate>
where
    K: TreeKey,
    V: Clone,
{
    pub(crate) fn new(begin: K, end: K, fill: V) -> Self {
        Self {
            begin,
            end,
            fill,
            range_get: NoRangeGet,
            update: NoUpdate,
        }
    }
}

impl<K, V, G, U> Builder<K, V, G, U>
where
    K: TreeKey,
    V: Clone,
{
    /// Enable `range_get` with a combiner and a segment initializer.
    ///
    /// Wrap the callables in [`Plain`](crate::algebra::Plain) or
    /// [`WithBorders`](crate::algebra::WithBorders) depending on
    /// whether they take the segment borders.
    pub fn range_get<T, C, I>(self, combiner: C, initializer: I) -> Builder<K, V, RangeGet<T, C, I>, U>
    where
        C: SegmentCombiner<T, K>,
        I: SegmentInitializer<V, T, K>,
    {
        Builder {
            begin: self.begin,
            end: self.end,
            fill: self.fill,
            range_get: RangeGet::new(combiner, initializer),
            update: self.update,
        }
    }

    /// Enable range updates with the given policy,
    /// [`NullaryUpdate`](crate::algebra::NullaryUpdate) or
    /// [`BinaryUpdate`](crate::algebra::BinaryUpdate).
    pub fn update<U2>(self, update: U2) -> Builder<K, V, G, U2>
    where
        U2: UpdatePolicy<V>,
    {
        Builder {
            begin: self.begin,
            end: self.end,
            fill: self.fill,
            range_get: self.range_get,
            update,
        }
    }

    /// Finish construction.
    pub fn build(self) -> DynamicSegmentTree<K, V, G, U>
    where
        U: UpdatePolicy<V>,
    {
        DynamicSegmentTree::with_policies(self.begin, self.end, self.fill, self.range_get, self.update)
    }
}

impl<K, V, G, U> fmt::Debug for Builder<K, V, G, U>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}
