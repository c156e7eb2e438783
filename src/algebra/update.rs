//! Update variation
//!
//! Selects, at the type level, whether range updates are supported and
//! how their arguments flow: disabled, a nullary operator (`-v`), or a
//! binary operator taking a caller-supplied argument (`v + delta`).

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

/// Capability object for the update side of a tree.
///
/// `Pending` is the slot stored in every internal node; `Arg` is what a
/// single application pushes through the tree. A slot that already holds
/// an argument composes with a new one by pushing the old argument into
/// both children first, so `Arg` never has to form a monoid.
pub trait UpdatePolicy<V> {
    /// Pending-update slot type: `()`, `bool`, or `Option<A>`.
    type Pending: Clone;

    /// Argument of one operator application.
    type Arg: Clone;

    /// A slot with nothing pending.
    fn empty_pending(&self) -> Self::Pending;

    /// Remove and return the pending argument, if any.
    fn take_pending(&self, slot: &mut Self::Pending) -> Option<Self::Arg>;

    /// Put `arg` into the slot, overwriting previous contents.
    fn store_pending(&self, slot: &mut Self::Pending, arg: &Self::Arg);

    /// Rewrite a leaf value with the operator.
    fn apply_to_value(&self, value: &mut V, arg: &Self::Arg);
}

/// Updates disabled: the slot holds nothing and no argument can exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUpdate;

impl<V> UpdatePolicy<V> for NoUpdate {
    type Pending = ();
    type Arg = Infallible;

    fn empty_pending(&self) -> Self::Pending {}

    fn take_pending(&self, _slot: &mut Self::Pending) -> Option<Self::Arg> {
        None
    }

    fn store_pending(&self, _slot: &mut Self::Pending, arg: &Self::Arg) {
        match *arg {}
    }

    fn apply_to_value(&self, _value: &mut V, arg: &Self::Arg) {
        match *arg {}
    }
}

/// Operator taking no argument (`V -> V`), e.g. arithmetic negation.
///
/// The pending slot is a flag meaning "one application is owed to the
/// whole subtree". A second application on a flagged subtree pushes the
/// owed one into the children first, then re-arms the flag.
#[derive(Clone, Copy)]
pub struct NullaryUpdate<F> {
    op: F,
}

impl<F> NullaryUpdate<F> {
    /// Wrap an operator `F: Fn(&V) -> V`.
    pub fn new(op: F) -> Self {
        Self { op }
    }
}

impl<V, F> UpdatePolicy<V> for NullaryUpdate<F>
where
    F: Fn(&V) -> V,
{
    type Pending = bool;
    type Arg = ();

    fn empty_pending(&self) -> Self::Pending {
        false
    }

    fn take_pending(&self, slot: &mut Self::Pending) -> Option<Self::Arg> {
        if *slot {
            *slot = false;
            Some(())
        } else {
            None
        }
    }

    fn store_pending(&self, slot: &mut Self::Pending, _arg: &Self::Arg) {
        *slot = true;
    }

    fn apply_to_value(&self, value: &mut V, _arg: &Self::Arg) {
        *value = (self.op)(value);
    }
}

impl<F> fmt::Debug for NullaryUpdate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NullaryUpdate").finish_non_exhaustive()
    }
}

/// Operator with a caller-supplied argument (`V x A -> V`), e.g. adding
/// a delta to every key of a range.
#[derive(Clone, Copy)]
pub struct BinaryUpdate<F, A> {
    op: F,
    _arg: PhantomData<fn(A)>,
}

impl<F, A> BinaryUpdate<F, A> {
    /// Wrap an operator `F: Fn(&V, &A) -> V`.
    pub fn new(op: F) -> Self {
        Self {
            op,
            _arg: PhantomData,
        }
    }
}

impl<V, F, A> UpdatePolicy<V> for BinaryUpdate<F, A>
where
    F: Fn(&V, &A) -> V,
    A: Clone,
{
    type Pending = Option<A>;
    type Arg = A;

    fn empty_pending(&self) -> Self::Pending {
        None
    }

    fn take_pending(&self, slot: &mut Self::Pending) -> Option<Self::Arg> {
        slot.take()
    }

    fn store_pending(&self, slot: &mut Self::Pending, arg: &Self::Arg) {
        *slot = Some(arg.clone());
    }

    fn apply_to_value(&self, value: &mut V, arg: &Self::Arg) {
        *value = (self.op)(value, arg);
    }
}

impl<F, A> fmt::Debug for BinaryUpdate<F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryUpdate").finish_non_exhaustive()
    }
}
