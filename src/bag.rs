//! # Layer 2: Bags
//!
//! A bag is a sequence that may repeat values. It reduces to the set of its
//! distinct values: for each repeated value the occurrence closest to the tail
//! survives, keeping its position relative to the others.
//!
//! ```ignore
//! type B = bag![i32; 1, 0, 1];
//! type S = SetOf<seq![i32; 1, 0, 1]>;   // set![i32; 0, 1]
//!
//! let set = B::new().to_set();
//! ```

use core::fmt;
use core::marker::PhantomData;

use crate::predicate::Contains;
use crate::primitives::{Bool, Element, ValueOf};
use crate::set::{Cons, Inspect, Nil, Prim, Sequence, Set};

/// Reduce a sequence to the set of its distinct values.
pub trait ToSet {
    type Out;
}

impl<K> ToSet for Nil<K> {
    type Out = Nil<K>;
}

// Drop the head when the tail still holds it
impl<H, T> ToSet for Cons<H, T>
where
    T: Contains<H> + ToSet,
{
    type Out = <<T as Contains<H>>::Out as Bool>::If<
        <T as ToSet>::Out,
        Cons<H, <T as ToSet>::Out>,
    >;
}

/// The set a sequence reduces to.
pub type SetOf<Q> = <Q as ToSet>::Out;

/// A sequence of values with possible repeats.
pub struct Bag<Q>(PhantomData<Q>);

impl<Q> Bag<Q> {
    pub const fn new() -> Self {
        Bag(PhantomData)
    }
}

impl<Q: Sequence> Bag<Q> {
    /// Number of values, repeats included.
    pub const LEN: usize = Q::LEN;

    pub const fn len(&self) -> usize {
        Self::LEN
    }

    pub const fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    /// The distinct values as a set.
    pub fn to_set(self) -> SetOf<Q>
    where
        Q: ToSet,
        SetOf<Q>: Set,
    {
        Default::default()
    }

    /// Calls `f` with each value, repeats included.
    pub fn for_each<F: FnMut(Prim<Q>)>(self, mut f: F) {
        Q::visit(&mut f);
    }
}

impl<H: Element, T> Bag<Cons<H, T>> {
    /// The first value.
    pub const fn car(&self) -> ValueOf<H> {
        H::VALUE
    }

    /// The bag without its first value.
    pub const fn cdr(&self) -> Bag<T> {
        Bag::new()
    }
}

// Repeats included
impl<Q: Inspect> Inspect for Bag<Q> {
    fn inspect_types<F: FnMut(&'static str)>(f: &mut F) {
        Q::inspect_types(f);
    }
}

impl<Q> Clone for Bag<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q> Copy for Bag<Q> {}

impl<Q> Default for Bag<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: Sequence> fmt::Debug for Bag<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        Q::visit(&mut |value| {
            list.entry(&value);
        });
        list.finish()
    }
}
