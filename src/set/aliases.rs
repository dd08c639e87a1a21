//! Convenience types and macros for sets
//!
//! Aliases name the result of each operation; the macros fold an operation over
//! several operands.

use crate::primitives::Element;
use super::node::{Cons, Nil};
use super::ops::{
    Append, Difference, Get, Intersection, LargerThan, Prepend, SmallerThan, Subtract, Union,
};
use super::sort::QuickSort;

// =============================================================================
// Convenience Type Aliases
// =============================================================================

/// The empty set of kind `K`.
pub type EmptySet<K> = Nil<K>;

/// The one-element set `{E}`.
pub type Singleton<E> = Cons<E, Nil<<E as Element>::Kind>>;

/// `A ∪ B`
pub type UnionOf<A, B> = <A as Union<B>>::Out;

/// `B \ A`, the result of `A.difference(B)`.
pub type DifferenceOf<A, B> = <A as Difference<B>>::Out;

/// `A ∩ B`
pub type IntersectionOf<A, B> = <A as Intersection<B>>::Out;

/// `A` without `E`.
pub type SubtractOf<A, E> = <A as Subtract<E>>::Out;

pub type PrependOf<A, E> = <A as Prepend<E>>::Out;
pub type AppendOf<A, E> = <A as Append<E>>::Out;
pub type SmallerOf<A, E> = <A as SmallerThan<E>>::Out;
pub type LargerOf<A, E> = <A as LargerThan<E>>::Out;

/// `A` in ascending order.
pub type SortedOf<A> = <A as QuickSort>::Out;

/// The element of `A` at Peano index `N`.
pub type GetOf<A, N> = <A as Get<N>>::Out;

// =============================================================================
// Convenience Macros
// =============================================================================

/// Union of two or more sets.
/// Usage: `union![A, B, C]`
#[macro_export]
macro_rules! union {
    ($a:ty, $b:ty $(,)?) => {
        <$a as $crate::set::Union<$b>>::Out
    };
    ($a:ty, $b:ty, $($rest:ty),+ $(,)?) => {
        $crate::union![$crate::union![$a, $b], $($rest),+]
    };
}

/// Intersection of two or more sets, keeping the first set's order.
/// Usage: `intersect![A, B, C]`
#[macro_export]
macro_rules! intersect {
    ($a:ty, $b:ty $(,)?) => {
        <$a as $crate::set::Intersection<$b>>::Out
    };
    ($a:ty, $b:ty, $($rest:ty),+ $(,)?) => {
        $crate::intersect![$crate::intersect![$a, $b], $($rest),+]
    };
}

/// Remove every element of the first set from the second: `difference![A, B]` is `B \ A`.
#[macro_export]
macro_rules! difference {
    ($a:ty, $b:ty $(,)?) => {
        <$a as $crate::set::Difference<$b>>::Out
    };
}

/// Sort a set ascending.
/// Usage: `sorted![S]`
#[macro_export]
macro_rules! sorted {
    ($s:ty) => {
        <$s as $crate::set::QuickSort>::Out
    };
}
