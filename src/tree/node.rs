//! Lazy tree node
//!
//! A node covers a half-open span of keys it never stores. It is either
//! a leaf holding the single value shared by every key in its span, or
//! an internal node owning a contiguous pair of children plus the
//! pending-update slot for its subtree.

use crate::algebra::UpdatePolicy;

/// One node of the lazy tree.
///
/// The value lives inline and is present exactly while the node is a
/// leaf; the absence of the child box signals the leaf state.
#[derive(Debug, Clone)]
pub(crate) struct Node<V, P> {
    value: Option<V>,
    children: Option<Box<Children<V, P>>>,
}

/// Child pair of an internal node, allocated as one block.
///
/// Keeping both nodes and the pending slot in a single box preserves
/// the contiguity of the pair: `right` sits directly after `left`, and
/// one grow costs exactly one allocation.
#[derive(Debug, Clone)]
pub(crate) struct Children<V, P> {
    pub(crate) left: Node<V, P>,
    pub(crate) right: Node<V, P>,
    pub(crate) pending: P,
}

impl<V, P> Node<V, P> {
    /// Leaf holding `value`.
    pub(crate) fn new(value: V) -> Self {
        Self {
            value: Some(value),
            children: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Value of a leaf.
    ///
    /// # Panics
    /// On an internal node; callers check `is_leaf` first.
    pub(crate) fn value(&self) -> &V {
        match &self.value {
            Some(value) => value,
            None => unreachable!("leaf node without a value"),
        }
    }

    /// Child pair of an internal node.
    ///
    /// # Panics
    /// On a leaf; callers grow the node first.
    pub(crate) fn children_mut(&mut self) -> &mut Children<V, P> {
        match self.children.as_deref_mut() {
            Some(children) => children,
            None => unreachable!("internal node without children"),
        }
    }

    /// Collapse the subtree to a leaf holding `value`.
    ///
    /// The child pair, its whole subtree, and any pending update are
    /// dropped with the box.
    pub(crate) fn set_value(&mut self, value: V) {
        self.children = None;
        self.value = Some(value);
    }

    /// Entry point of the pending-update protocol.
    ///
    /// On a leaf the operator rewrites the value in place. On an
    /// internal node an already-pending argument is first pushed into
    /// both children, then `arg` takes the slot.
    pub(crate) fn apply<U>(&mut self, update: &U, arg: &U::Arg)
    where
        U: UpdatePolicy<V, Pending = P>,
    {
        if let Some(children) = self.children.as_deref_mut() {
            if let Some(old) = update.take_pending(&mut children.pending) {
                children.left.apply(update, &old);
                children.right.apply(update, &old);
            }
            update.store_pending(&mut children.pending, arg);
        } else if let Some(value) = self.value.as_mut() {
            update.apply_to_value(value, arg);
        }
    }

    /// Push a pending update into both children and clear the slot.
    ///
    /// No-op on a leaf or when nothing is pending.
    pub(crate) fn sift<U>(&mut self, update: &U)
    where
        U: UpdatePolicy<V, Pending = P>,
    {
        if let Some(children) = self.children.as_deref_mut() {
            if let Some(old) = update.take_pending(&mut children.pending) {
                children.left.apply(update, &old);
                children.right.apply(update, &old);
            }
        }
    }

    /// Number of materialized nodes in this subtree, self included.
    pub(crate) fn subtree_size(&self) -> usize {
        match &self.children {
            Some(children) => 1 + children.left.subtree_size() + children.right.subtree_size(),
            None => 1,
        }
    }
}

impl<V: Clone, P> Node<V, P> {
    /// Grow a leaf into an internal node.
    ///
    /// The value is cloned into the left child and moved into the
    /// right one. The clone happens while the value is still in place,
    /// so a panicking `Clone` leaves the leaf untouched.
    pub(crate) fn init_children(&mut self, empty_pending: P) {
        let copy = match &self.value {
            Some(value) => value.clone(),
            None => {
                debug_assert!(false, "init_children called on an internal node");
                return;
            }
        };
        if let Some(original) = self.value.take() {
            self.children = Some(Box::new(Children {
                left: Node::new(copy),
                right: Node::new(original),
                pending: empty_pending,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{BinaryUpdate, NullaryUpdate};

    fn add(value: &i64, delta: &i64) -> i64 {
        value + delta
    }

    #[test]
    fn grow_copies_left_and_moves_right() {
        let mut node: Node<i64, ()> = Node::new(7);
        node.init_children(());

        assert!(!node.is_leaf());
        let children = node.children_mut();
        assert_eq!(*children.left.value(), 7);
        assert_eq!(*children.right.value(), 7);
    }

    #[test]
    fn collapse_drops_subtree() {
        let mut node: Node<i64, ()> = Node::new(7);
        node.init_children(());
        node.children_mut().left.init_children(());
        assert_eq!(node.subtree_size(), 5);

        node.set_value(3);
        assert!(node.is_leaf());
        assert_eq!(*node.value(), 3);
        assert_eq!(node.subtree_size(), 1);
    }

    #[test]
    fn apply_on_internal_composes_by_pushing_down() {
        let update = BinaryUpdate::<_, i64>::new(add);
        let mut node: Node<i64, Option<i64>> = Node::new(10);
        node.init_children(None);

        node.apply(&update, &5);
        node.apply(&update, &7);

        // The first argument was pushed into the children when the
        // second arrived; the second still sits in the slot.
        let children = node.children_mut();
        assert_eq!(children.pending, Some(7));
        assert_eq!(*children.left.value(), 15);
        assert_eq!(*children.right.value(), 15);
    }

    #[test]
    fn sift_clears_the_slot() {
        let update = BinaryUpdate::<_, i64>::new(add);
        let mut node: Node<i64, Option<i64>> = Node::new(10);
        node.init_children(None);
        node.apply(&update, &5);

        node.sift(&update);

        let children = node.children_mut();
        assert_eq!(children.pending, None);
        assert_eq!(*children.left.value(), 15);
        assert_eq!(*children.right.value(), 15);
    }

    #[test]
    fn nullary_flag_rearms_after_push_down() {
        let update = NullaryUpdate::new(|value: &i64| -value);
        let mut node: Node<i64, bool> = Node::new(4);
        node.init_children(false);

        node.apply(&update, &());
        node.apply(&update, &());

        let children = node.children_mut();
        assert!(children.pending);
        assert_eq!(*children.left.value(), -4);
        assert_eq!(*children.right.value(), -4);
    }

    #[test]
    fn clone_is_deep() {
        let mut node: Node<i64, ()> = Node::new(1);
        node.init_children(());

        let mut copy = node.clone();
        copy.children_mut().left.set_value(99);

        assert_eq!(*node.children_mut().left.value(), 1);
    }
}
