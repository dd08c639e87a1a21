//! # Predicate library
//!
//! Boolean functions over a sequence of elements of one kind, in two flavours:
//!
//! - type-level traits, resolved at compile time: [`Contains`], [`IsSet`],
//!   [`IsEverseList`], [`IsInverseList`], [`IsList`];
//! - runtime functions over slices in [`slice`], with the same definitions.
//!
//! Every trait exposes its answer both as a type (`Out: Bool`) and as a constant
//! (`VALUE`), so it can gate other type-level computations or be read in `const`
//! context.
//!
//! ```ignore
//! const HAS_THREE: bool = <set![i16; -1, 3, 4] as Contains<elem![i16; 3]>>::VALUE;
//! const ASCENDING: bool = <seq![i32; 1, 1, 2] as IsEverseList>::VALUE;
//! ```

pub mod slice;

use crate::primitives::{Absent, Bool, Compare, IsGreaterOrEqual, IsLessOrEqual, Order, Present};
use crate::set::{Cons, Nil};

// =============================================================================
// Contains
// =============================================================================

/// Does the sequence contain element `E`?
pub trait Contains<E> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<K, E> Contains<E> for Nil<K> {
    type Out = Absent;
}

impl<H, T, E> Contains<E> for Cons<H, T>
where
    H: Compare<E>,
    T: Contains<E>,
{
    type Out = <<<H as Compare<E>>::Out as Order>::IsEqual as Bool>::Or<<T as Contains<E>>::Out>;
}

// =============================================================================
// IsSet
// =============================================================================

/// Is every element of the sequence distinct?
pub trait IsSet {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<K> IsSet for Nil<K> {
    type Out = Present;
}

impl<H, T> IsSet for Cons<H, T>
where
    T: Contains<H> + IsSet,
{
    type Out = <<<T as Contains<H>>::Out as Bool>::Not as Bool>::And<<T as IsSet>::Out>;
}

// =============================================================================
// IsEverseList / IsInverseList / IsList
// =============================================================================

/// Is the sequence non-decreasing?
pub trait IsEverseList {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<K> IsEverseList for Nil<K> {
    type Out = Present;
}

impl<H, K> IsEverseList for Cons<H, Nil<K>> {
    type Out = Present;
}

impl<H, N, T> IsEverseList for Cons<H, Cons<N, T>>
where
    H: Compare<N>,
    Cons<N, T>: IsEverseList,
{
    type Out = <IsLessOrEqual<<H as Compare<N>>::Out> as Bool>::And<<Cons<N, T> as IsEverseList>::Out>;
}

/// Is the sequence non-increasing?
pub trait IsInverseList {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<K> IsInverseList for Nil<K> {
    type Out = Present;
}

impl<H, K> IsInverseList for Cons<H, Nil<K>> {
    type Out = Present;
}

impl<H, N, T> IsInverseList for Cons<H, Cons<N, T>>
where
    H: Compare<N>,
    Cons<N, T>: IsInverseList,
{
    type Out = <IsGreaterOrEqual<<H as Compare<N>>::Out> as Bool>::And<<Cons<N, T> as IsInverseList>::Out>;
}

/// Is the sequence monotonic in either direction?
///
/// A sequence of equal elements is both everse and inverse.
pub trait IsList {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<Q> IsList for Q
where
    Q: IsEverseList + IsInverseList,
{
    type Out = <<Q as IsEverseList>::Out as Bool>::Or<<Q as IsInverseList>::Out>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{End, Int, Nib, I8, X0, X1, X2, X3, X8};

    type E0 = Int<I8, Nib<X8, Nib<X0, End>>>;
    type E1 = Int<I8, Nib<X8, Nib<X1, End>>>;
    type E2 = Int<I8, Nib<X8, Nib<X2, End>>>;
    type E3 = Int<I8, Nib<X8, Nib<X3, End>>>;

    type Empty = Nil<I8>;
    type Up = Cons<E1, Cons<E1, Cons<E2, Empty>>>;
    type Down = Cons<E3, Cons<E2, Cons<E2, Cons<E0, Empty>>>>;
    type Zigzag = Cons<E3, Cons<E1, Cons<E2, Empty>>>;

    #[test]
    fn contains_walks_the_whole_sequence() {
        assert!(<Up as Contains<E2>>::VALUE);
        assert!(!<Up as Contains<E0>>::VALUE);
        assert!(!<Empty as Contains<E0>>::VALUE);
    }

    #[test]
    fn is_set_rejects_repeats() {
        assert!(<Empty as IsSet>::VALUE);
        assert!(<Zigzag as IsSet>::VALUE);
        assert!(!<Up as IsSet>::VALUE);
    }

    #[test]
    fn monotonic_classification() {
        assert!(<Up as IsEverseList>::VALUE);
        assert!(!<Down as IsEverseList>::VALUE);
        assert!(!<Up as IsInverseList>::VALUE);
        assert!(<Down as IsInverseList>::VALUE);
        assert!(<Up as IsList>::VALUE);
        assert!(<Down as IsList>::VALUE);
        assert!(!<Zigzag as IsList>::VALUE);
        assert!(<Empty as IsList>::VALUE);
    }
}
