//! Set node types: Nil, Cons
//!
//! A sequence is `Nil<K>` or `Cons<Head, Tail>`. Every node is a zero-sized marker;
//! the elements live in the type.

use core::marker::PhantomData;

use crate::primitives::{Element, Kind};

/// The empty sequence of kind `K`.
pub struct Nil<K>(PhantomData<K>);

/// A head element followed by the tail sequence.
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// The primitive type of a sequence's elements.
pub type Prim<Q> = <<Q as Sequence>::Kind as Kind>::Prim;

/// A compile-time sequence of elements of one kind.
///
/// Only length and runtime read-out live here; the algebra lives in
/// [`ops`](super::ops) and the predicates in [`predicate`](crate::predicate).
pub trait Sequence: 'static {
    type Kind: Kind;

    /// Number of elements.
    const LEN: usize;

    /// Calls `f` with each element value, head first.
    fn visit<F: FnMut(Prim<Self>)>(f: &mut F);

    /// Value at position `n`, if any.
    fn nth(n: usize) -> Option<Prim<Self>>;

    /// Position of the first element equal to `value`, if any.
    fn position(value: Prim<Self>) -> Option<usize>;
}

impl<K: Kind> Sequence for Nil<K> {
    type Kind = K;
    const LEN: usize = 0;

    #[inline(always)]
    fn visit<F: FnMut(Prim<Self>)>(_f: &mut F) {}

    #[inline(always)]
    fn nth(_n: usize) -> Option<Prim<Self>> {
        None
    }

    #[inline(always)]
    fn position(_value: Prim<Self>) -> Option<usize> {
        None
    }
}

impl<H, T> Sequence for Cons<H, T>
where
    H: Element,
    T: Sequence<Kind = H::Kind>,
{
    type Kind = H::Kind;
    const LEN: usize = 1 + T::LEN;

    #[inline(always)]
    fn visit<F: FnMut(Prim<Self>)>(f: &mut F) {
        f(H::VALUE);
        T::visit(f);
    }

    #[inline(always)]
    fn nth(n: usize) -> Option<Prim<Self>> {
        match n {
            0 => Some(H::VALUE),
            _ => T::nth(n - 1),
        }
    }

    #[inline(always)]
    fn position(value: Prim<Self>) -> Option<usize> {
        if H::VALUE == value {
            Some(0)
        } else {
            T::position(value).map(|i| i + 1)
        }
    }
}

// Manual Clone/Copy impls: don't require K/H/T: Clone
impl<K> Clone for Nil<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Nil<K> {}

impl<H, T> Clone for Cons<H, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, T> Copy for Cons<H, T> {}

impl<K> Nil<K> {
    /// The empty set.
    pub const fn new() -> Self {
        Nil(PhantomData)
    }
}

impl<K> Default for Nil<K> {
    fn default() -> Self {
        Self::new()
    }
}

// Unchecked; `Cons::new` (value.rs) asserts `IsSet` before calling this.
impl<H, T> Cons<H, T> {
    pub(crate) const fn assume_valid() -> Self {
        Cons(PhantomData)
    }
}
