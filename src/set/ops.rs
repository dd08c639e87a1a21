//! Set algebra: Prepend, Append, Union, Subtract, Difference, Intersection,
//! SmallerThan, LargerThan, SubsetOf, Equals, Get
//!
//! Every operation is a trait with an associated `Out`: the resulting set type,
//! or a `Bool` for the tests. Nothing here runs at runtime.

use crate::predicate::Contains;
use crate::primitives::{Bool, Compare, Element, Order, Present, S, Z};
use super::node::{Cons, Nil, Sequence};

// =============================================================================
// Insertion
// =============================================================================

/// Insert `E` at the front. No-op if `E` is already present.
pub trait Prepend<E> {
    type Out;
}

impl<Q, E> Prepend<E> for Q
where
    Q: Contains<E>,
{
    type Out = <<Q as Contains<E>>::Out as Bool>::If<Q, Cons<E, Q>>;
}

/// Unconditional insertion at the back.
pub trait PushBack<E> {
    type Out;
}

impl<K, E> PushBack<E> for Nil<K> {
    type Out = Cons<E, Nil<K>>;
}

impl<H, T, E> PushBack<E> for Cons<H, T>
where
    T: PushBack<E>,
{
    type Out = Cons<H, <T as PushBack<E>>::Out>;
}

/// Insert `E` at the back. No-op if `E` is already present.
pub trait Append<E> {
    type Out;
}

impl<Q, E> Append<E> for Q
where
    Q: Contains<E> + PushBack<E>,
{
    type Out = <<Q as Contains<E>>::Out as Bool>::If<Q, <Q as PushBack<E>>::Out>;
}

// =============================================================================
// Union
// =============================================================================

/// `Self ∪ Other`: self's elements prepended, last first, onto `Other`.
pub trait Union<Other> {
    type Out;
}

// Nil ∪ O = O
impl<K, O> Union<O> for Nil<K> {
    type Out = O;
}

// Cons<H, T> ∪ O = prepend(H, T ∪ O)
impl<H, T, O> Union<O> for Cons<H, T>
where
    T: Union<O>,
    <T as Union<O>>::Out: Prepend<H>,
{
    type Out = <<T as Union<O>>::Out as Prepend<H>>::Out;
}

// =============================================================================
// Removal
// =============================================================================

/// Remove `E` if present.
pub trait Subtract<E> {
    type Out;
}

impl<K, E> Subtract<E> for Nil<K> {
    type Out = Nil<K>;
}

impl<H, T, E> Subtract<E> for Cons<H, T>
where
    H: Compare<E>,
    T: Subtract<E>,
{
    type Out = <<<H as Compare<E>>::Out as Order>::IsEqual as Bool>::If<
        T,
        Cons<H, <T as Subtract<E>>::Out>,
    >;
}

/// `Other \ Self`: every element of `Self` subtracted from `Other`, one at a time.
///
/// The operand order follows the method form, `a.difference(b)` removes `a`'s
/// elements from `b`. The `-` operator on set values reads the usual way round.
pub trait Difference<Other> {
    type Out;
}

// Nothing to remove
impl<K, O> Difference<O> for Nil<K> {
    type Out = O;
}

impl<H, T, O> Difference<O> for Cons<H, T>
where
    O: Subtract<H>,
    T: Difference<<O as Subtract<H>>::Out>,
{
    type Out = <T as Difference<<O as Subtract<H>>::Out>>::Out;
}

// =============================================================================
// Intersection
// =============================================================================

/// Elements of `Self` that also occur in `Other`, in `Self`'s order.
pub trait Intersection<Other> {
    type Out;
}

impl<K, O> Intersection<O> for Nil<K> {
    type Out = Nil<K>;
}

impl<H, T, O> Intersection<O> for Cons<H, T>
where
    O: Contains<H>,
    T: Intersection<O>,
{
    type Out = <<O as Contains<H>>::Out as Bool>::If<
        Cons<H, <T as Intersection<O>>::Out>,
        <T as Intersection<O>>::Out,
    >;
}

// =============================================================================
// Partition around a pivot
// =============================================================================

/// Elements strictly less than `E`.
pub trait SmallerThan<E> {
    type Out;
}

impl<K, E> SmallerThan<E> for Nil<K> {
    type Out = Nil<K>;
}

impl<H, T, E> SmallerThan<E> for Cons<H, T>
where
    H: Compare<E>,
    T: SmallerThan<E>,
{
    type Out = <<<H as Compare<E>>::Out as Order>::IsLess as Bool>::If<
        Cons<H, <T as SmallerThan<E>>::Out>,
        <T as SmallerThan<E>>::Out,
    >;
}

/// Elements strictly greater than `E`.
pub trait LargerThan<E> {
    type Out;
}

impl<K, E> LargerThan<E> for Nil<K> {
    type Out = Nil<K>;
}

impl<H, T, E> LargerThan<E> for Cons<H, T>
where
    H: Compare<E>,
    T: LargerThan<E>,
{
    type Out = <<<H as Compare<E>>::Out as Order>::IsGreater as Bool>::If<
        Cons<H, <T as LargerThan<E>>::Out>,
        <T as LargerThan<E>>::Out,
    >;
}

// =============================================================================
// Comparison
// =============================================================================

/// Every element of `Self` occurs in `Other`.
///
/// Repeats in `Other` do not matter. Both sides must share one element kind,
/// empty sets included:
///
/// ```compile_fail
/// use tola_set::set;
/// let _ = <set![i16]>::new() == <set![u64]>::new();
/// ```
pub trait SubsetOf<Other> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

// Every sequence of the same kind contains the empty set
impl<K, O> SubsetOf<O> for Nil<K>
where
    O: Sequence<Kind = K>,
{
    type Out = Present;
}

impl<H, T, O> SubsetOf<O> for Cons<H, T>
where
    O: Contains<H>,
    T: SubsetOf<O>,
{
    type Out = <<O as Contains<H>>::Out as Bool>::And<<T as SubsetOf<O>>::Out>;
}

/// Same elements, in any order.
pub trait Equals<Other> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<Q, O> Equals<O> for Q
where
    Q: SubsetOf<O>,
    O: SubsetOf<Q>,
{
    type Out = <<Q as SubsetOf<O>>::Out as Bool>::And<<O as SubsetOf<Q>>::Out>;
}

// =============================================================================
// Indexing
// =============================================================================

/// The element at Peano index `N`.
///
/// There is no impl past the last element, so an out-of-range index is a
/// compile error.
#[diagnostic::on_unimplemented(
    message = "index out of range: `{Self}` has no element at index `{N}`",
    label = "index out of range",
    note = "indices count from `D0`; the last valid index is the set size minus one"
)]
pub trait Get<N> {
    type Out: Element;
}

impl<H: Element, T> Get<Z> for Cons<H, T> {
    type Out = H;
}

impl<H, T, N> Get<S<N>> for Cons<H, T>
where
    T: Get<N>,
{
    type Out = <T as Get<N>>::Out;
}
