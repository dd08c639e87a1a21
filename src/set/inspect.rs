//! Runtime inspection of sets
//!
//! Allows iterating over the element types of a set, sequence or bag for
//! debugging.

use crate::primitives::Element;
use super::node::{Cons, Nil};

/// Runtime inspection of sets and sequences.
///
/// Calls back with the type name of every element, head first. Walks the types
/// only, so sequences with repeated elements can be inspected too.
pub trait Inspect {
    /// Calls `f` for each element type, without a value to call it on.
    fn inspect_types<F: FnMut(&'static str)>(f: &mut F);

    /// Calls `f` for each element with its type name.
    fn inspect<F: FnMut(&'static str)>(&self, mut f: F) {
        Self::inspect_types(&mut f);
    }
}

impl<K> Inspect for Nil<K> {
    fn inspect_types<F: FnMut(&'static str)>(_f: &mut F) {}
}

impl<H, T> Inspect for Cons<H, T>
where
    H: Element,
    T: Inspect,
{
    fn inspect_types<F: FnMut(&'static str)>(f: &mut F) {
        f(core::any::type_name::<H>());
        T::inspect_types(f);
    }
}
