//! Dynamic segment tree core
//!
//! The tree façade owns the root node, the key bounds, and the two
//! capability objects (update and range-get). Public operations
//! validate their inputs and hand off to four recursive walks that
//! bisect the span of an implicit binary tree, materializing nodes only
//! where value runs actually split.

mod builder;
mod node;

pub use builder::Builder;

use std::cmp::{max, min};
use std::fmt;

use crate::algebra::{BinaryUpdate, NoRangeGet, NoUpdate, NullaryUpdate, RangeGetPolicy, UpdatePolicy};
use crate::key::TreeKey;
use crate::TreeError;
use node::Node;

/// Map from a contiguous range of integer keys to values, with
/// logarithmic range assignment, range update, point lookup, and range
/// aggregation.
///
/// Memory is proportional to the number of distinct contiguous value
/// runs, not to the size of the key range: a subtree whose whole span
/// holds one value stays a single leaf. That makes spans like
/// `[-1_000_000_000, 1_000_000_000)` practical.
///
/// `G` and `U` select the range-get and update capabilities; operations
/// a configuration does not support are statically absent. Use
/// [`DynamicSegmentTree::builder`] to enable them.
///
/// Lookups take `&mut self`: queries push pending updates down and may
/// materialize nodes on the walk, so even logically read-only
/// operations physically mutate the tree. Consequently the tree must
/// not be shared between threads, not even for reading.
#[derive(Clone)]
pub struct DynamicSegmentTree<K, V, G = NoRangeGet, U = NoUpdate>
where
    U: UpdatePolicy<V>,
{
    root: Node<V, U::Pending>,
    begin: K,
    end: K,
    range_get: G,
    update: U,
}

impl<K, V> DynamicSegmentTree<K, V>
where
    K: TreeKey,
    V: Clone,
{
    /// Tree over `[begin, end)` with every key holding `fill`.
    ///
    /// Range aggregation and updates are disabled; see
    /// [`DynamicSegmentTree::builder`] to enable them.
    pub fn new(begin: K, end: K, fill: V) -> Self {
        Self::with_policies(begin, end, fill, NoRangeGet, NoUpdate)
    }

    /// Start building a tree with additional capabilities.
    pub fn builder(begin: K, end: K, fill: V) -> Builder<K, V, NoRangeGet, NoUpdate> {
        Builder::new(begin, end, fill)
    }
}

impl<K, V, G, U> DynamicSegmentTree<K, V, G, U>
where
    K: TreeKey,
    V: Clone,
    U: UpdatePolicy<V>,
{
    pub(crate) fn with_policies(begin: K, end: K, fill: V, range_get: G, update: U) -> Self {
        debug_assert!(begin <= end, "tree bounds out of order");
        Self {
            root: Node::new(fill),
            begin,
            end,
            range_get,
            update,
        }
    }

    /// Beginning of the key range.
    pub fn begin(&self) -> K {
        self.begin
    }

    /// One past the last key.
    pub fn end(&self) -> K {
        self.end
    }

    /// Number of materialized nodes, leaves and internal together.
    ///
    /// Memory use is proportional to this count, not to the key span;
    /// a freshly built or fully assigned tree reports `1`.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Assign `value` to every key in `[begin, end)`.
    ///
    /// An empty range is a no-op; portions outside the tree bounds are
    /// ignored. Assigning the whole range collapses the tree back to a
    /// single leaf.
    pub fn set(&mut self, begin: K, end: K, value: V) {
        let lo = max(begin, self.begin);
        let hi = min(end, self.end);
        if lo >= hi {
            return;
        }
        set_in(&mut self.root, &self.update, lo, hi, self.begin, self.end, value);
    }

    /// Value at `key`.
    ///
    /// Logically read-only, but sifts pending updates on the walk,
    /// hence `&mut self`.
    ///
    /// # Errors
    /// [`TreeError::OutOfRange`] when `key` lies outside the tree's
    /// key range.
    pub fn get(&mut self, key: K) -> Result<&V, TreeError<K>> {
        if key < self.begin || key >= self.end {
            return Err(TreeError::OutOfRange {
                key,
                begin: self.begin,
                end: self.end,
            });
        }
        Ok(get_in(&mut self.root, &self.update, key, self.begin, self.end))
    }
}

impl<K, V, G, F> DynamicSegmentTree<K, V, G, NullaryUpdate<F>>
where
    K: TreeKey,
    V: Clone,
    F: Fn(&V) -> V,
{
    /// Apply the configured operator to every key in `[begin, end)`.
    ///
    /// An empty range is a no-op; portions outside the tree bounds are
    /// ignored.
    pub fn update(&mut self, begin: K, end: K) {
        let lo = max(begin, self.begin);
        let hi = min(end, self.end);
        if lo >= hi {
            return;
        }
        update_in(&mut self.root, &self.update, lo, hi, self.begin, self.end, &());
    }
}

impl<K, V, G, F, A> DynamicSegmentTree<K, V, G, BinaryUpdate<F, A>>
where
    K: TreeKey,
    V: Clone,
    F: Fn(&V, &A) -> V,
    A: Clone,
{
    /// Apply the configured operator with `arg` to every key in
    /// `[begin, end)`.
    ///
    /// An empty range is a no-op; portions outside the tree bounds are
    /// ignored. Overlapping updates compose: the pending argument of a
    /// subtree is pushed one level down before a new one takes its
    /// place.
    pub fn update(&mut self, begin: K, end: K, arg: A) {
        let lo = max(begin, self.begin);
        let hi = min(end, self.end);
        if lo >= hi {
            return;
        }
        update_in(&mut self.root, &self.update, lo, hi, self.begin, self.end, &arg);
    }
}

impl<K, V, G, U> DynamicSegmentTree<K, V, G, U>
where
    K: TreeKey,
    V: Clone,
    G: RangeGetPolicy<K, V>,
    U: UpdatePolicy<V>,
{
    /// Aggregate of `[begin, end)` under the configured combiner and
    /// segment initializer.
    ///
    /// The query is clipped to the tree bounds; the clipped range must
    /// be nonempty. Logically read-only, but sifts pending updates and
    /// may grow nodes straddling the query borders, hence `&mut self`.
    ///
    /// # Panics
    /// When `begin >= end` or the query does not intersect the tree's
    /// key range.
    pub fn range_get(&mut self, begin: K, end: K) -> G::Aggregate {
        let lo = max(begin, self.begin);
        let hi = min(end, self.end);
        assert!(
            lo < hi,
            "range_get over [{begin}, {end}) misses the tree range [{}, {})",
            self.begin,
            self.end,
        );
        range_get_in(
            &mut self.root,
            &self.update,
            &self.range_get,
            lo,
            hi,
            self.begin,
            self.end,
        )
    }
}

impl<K, V, G, U> fmt::Debug for DynamicSegmentTree<K, V, G, U>
where
    K: fmt::Debug,
    U: UpdatePolicy<V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicSegmentTree")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .field("nodes", &self.root.subtree_size())
            .finish_non_exhaustive()
    }
}

/// Range assignment walk.
///
/// The value arrives by move: it moves through to whichever single side
/// recurses, and is cloned for the left only when both sides do.
fn set_in<K, V, U>(
    node: &mut Node<V, U::Pending>,
    update: &U,
    begin: K,
    end: K,
    curr_begin: K,
    curr_end: K,
    value: V,
) where
    K: TreeKey,
    V: Clone,
    U: UpdatePolicy<V>,
{
    debug_assert!(
        curr_begin < end && curr_end > begin && begin < end,
        "walk entered a span without overlap"
    );
    if begin <= curr_begin && end >= curr_end {
        node.set_value(value);
        return;
    }
    if node.is_leaf() {
        node.init_children(update.empty_pending());
    }
    let mid = K::midpoint(curr_begin, curr_end);
    node.sift(update);
    let children = node.children_mut();
    if end <= mid {
        // Right side has no overlap: move the value left.
        set_in(&mut children.left, update, begin, end, curr_begin, mid, value);
    } else if begin >= mid {
        // Left side has no overlap: move the value right.
        set_in(&mut children.right, update, begin, end, mid, curr_end, value);
    } else {
        // Copy to the left, move to the right.
        set_in(
            &mut children.left,
            update,
            begin,
            end,
            curr_begin,
            mid,
            value.clone(),
        );
        set_in(&mut children.right, update, begin, end, mid, curr_end, value);
    }
}

/// Range update walk; same shape as assignment with `apply` at full
/// cover.
fn update_in<K, V, U>(
    node: &mut Node<V, U::Pending>,
    update: &U,
    begin: K,
    end: K,
    curr_begin: K,
    curr_end: K,
    arg: &U::Arg,
) where
    K: TreeKey,
    V: Clone,
    U: UpdatePolicy<V>,
{
    debug_assert!(
        curr_begin < end && curr_end > begin && begin < end,
        "walk entered a span without overlap"
    );
    if begin <= curr_begin && end >= curr_end {
        node.apply(update, arg);
        return;
    }
    if node.is_leaf() {
        node.init_children(update.empty_pending());
    }
    let mid = K::midpoint(curr_begin, curr_end);
    node.sift(update);
    let children = node.children_mut();
    if mid > begin {
        update_in(&mut children.left, update, begin, end, curr_begin, mid, arg);
    }
    if mid < end {
        update_in(&mut children.right, update, begin, end, mid, curr_end, arg);
    }
}

/// Point lookup walk.
fn get_in<'t, K, V, U>(
    node: &'t mut Node<V, U::Pending>,
    update: &U,
    key: K,
    curr_begin: K,
    curr_end: K,
) -> &'t V
where
    K: TreeKey,
    V: Clone,
    U: UpdatePolicy<V>,
{
    if node.is_leaf() {
        // The leaf's value covers its whole span.
        return node.value();
    }
    node.sift(update);
    let mid = K::midpoint(curr_begin, curr_end);
    let children = node.children_mut();
    if key >= mid {
        get_in(&mut children.right, update, key, mid, curr_end)
    } else {
        get_in(&mut children.left, update, key, curr_begin, mid)
    }
}

/// Range aggregation walk.
///
/// Growing a straddling leaf is deliberate: pending updates live only
/// on internal nodes, so the sift below needs children to push into.
fn range_get_in<K, V, U, G>(
    node: &mut Node<V, U::Pending>,
    update: &U,
    range_get: &G,
    begin: K,
    end: K,
    curr_begin: K,
    curr_end: K,
) -> G::Aggregate
where
    K: TreeKey,
    V: Clone,
    U: UpdatePolicy<V>,
    G: RangeGetPolicy<K, V>,
{
    debug_assert!(
        curr_begin < end && curr_end > begin && begin < end,
        "walk entered a span without overlap"
    );
    if begin <= curr_begin && end >= curr_end && node.is_leaf() {
        return range_get.init(node.value(), curr_begin, curr_end);
    }
    if node.is_leaf() {
        node.init_children(update.empty_pending());
    }
    node.sift(update);
    let mid = K::midpoint(curr_begin, curr_end);
    let children = node.children_mut();
    if begin >= mid {
        return range_get_in(&mut children.right, update, range_get, begin, end, mid, curr_end);
    }
    if end <= mid {
        return range_get_in(&mut children.left, update, range_get, begin, end, curr_begin, mid);
    }
    // The right subtree is walked first; combination stays left-to-right.
    let right = range_get_in(&mut children.right, update, range_get, begin, end, mid, curr_end);
    let left = range_get_in(&mut children.left, update, range_get, begin, end, curr_begin, mid);
    range_get.combine(
        left,
        right,
        max(curr_begin, begin),
        mid,
        min(curr_end, end),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{Plain, WithBorders};

    #[test]
    fn plain_tree_set_and_get() {
        let mut tree = DynamicSegmentTree::new(0i64, 100, 7);
        assert_eq!(*tree.get(50).unwrap(), 7);

        tree.set(10, 20, 9);
        assert_eq!(*tree.get(9).unwrap(), 7);
        assert_eq!(*tree.get(10).unwrap(), 9);
        assert_eq!(*tree.get(19).unwrap(), 9);
        assert_eq!(*tree.get(20).unwrap(), 7);
    }

    #[test]
    fn full_assignment_collapses_to_one_leaf() {
        let mut tree = DynamicSegmentTree::new(0i64, 100, 7);
        tree.set(10, 20, 9);
        assert!(tree.node_count() > 1);

        tree.set(0, 100, 1);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn builder_composes_capabilities() {
        let mut tree = DynamicSegmentTree::builder(0i64, 8, 1i64)
            .range_get(
                Plain(|left: i64, right: i64| left + right),
                WithBorders(|value: &i64, begin: i64, end: i64| value * (end - begin)),
            )
            .update(BinaryUpdate::new(|value: &i64, delta: &i64| value + delta))
            .build();

        tree.update(2, 6, 10);
        assert_eq!(tree.range_get(0, 8), 8 + 4 * 10);
    }

    #[test]
    fn disjoint_ranges_are_ignored() {
        let mut tree = DynamicSegmentTree::new(0i64, 10, 5);
        tree.set(20, 30, 9);
        tree.set(-10, 0, 9);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(*tree.get(5).unwrap(), 5);
    }
}
