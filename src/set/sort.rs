//! Quick sort at the type level.
//!
//! The head is the pivot: `sorted(smaller) ∪ {head} ∪ sorted(larger)`.
//! Already-sorted input is the quadratic worst case, which only costs
//! compile time.

use super::node::{Cons, Nil};
use super::ops::{LargerThan, SmallerThan, Union};

/// Sort ascending.
pub trait QuickSort {
    type Out;
}

impl<K> QuickSort for Nil<K> {
    type Out = Nil<K>;
}

impl<H, T> QuickSort for Cons<H, T>
where
    T: SmallerThan<H> + LargerThan<H>,
    <T as SmallerThan<H>>::Out: QuickSort,
    <T as LargerThan<H>>::Out: QuickSort,
    <<T as SmallerThan<H>>::Out as QuickSort>::Out:
        Union<Cons<H, <<T as LargerThan<H>>::Out as QuickSort>::Out>>,
{
    type Out = <<<T as SmallerThan<H>>::Out as QuickSort>::Out as Union<
        Cons<H, <<T as LargerThan<H>>::Out as QuickSort>::Out>,
    >>::Out;
}
