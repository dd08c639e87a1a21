//! Value-level facade over set types.
//!
//! A set value is a zero-sized `Copy` marker; every method computes its answer
//! from the type and leaves at most an associated constant behind at runtime.
//!
//! ```ignore
//! let a = <set![i16; -1, 3, 4]>::new();
//! let b = <set![i16; 3, 5]>::new();
//!
//! assert_eq!((a + b).to_string(), "{-1, 4, 3, 5}");
//! assert!((a * b).equals(&<set![i16; 3]>::new()));
//! assert_eq!((a - b).to_string(), "{-1, 4}");
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::{Add, Mul, Sub};

use crate::error::SetError;
use crate::predicate::{slice, IsEverseList, IsInverseList, IsSet};
use crate::primitives::{Element, Present, ValueOf};
use super::aliases::{
    AppendOf, DifferenceOf, GetOf, IntersectionOf, LargerOf, PrependOf, SmallerOf, SortedOf,
    SubtractOf, UnionOf,
};
use super::node::{Cons, Nil, Prim, Sequence};
use super::ops::{
    Append, Difference, Equals, Get, Intersection, LargerThan, Prepend, SmallerThan, Subtract,
    SubsetOf, Union,
};
use super::sort::QuickSort;

// =============================================================================
// Construction
// =============================================================================

impl<H, T> Cons<H, T>
where
    Self: IsSet,
{
    /// The set value.
    ///
    /// Fails to compile when the sequence repeats an element:
    ///
    /// ```compile_fail
    /// use tola_set::seq;
    /// let _ = <seq![i32; 1, 2, 1]>::new();
    /// ```
    pub const fn new() -> Self {
        const { assert!(<Self as IsSet>::VALUE, "duplicate element in set") };
        Self::assume_valid()
    }
}

impl<H, T> Default for Cons<H, T>
where
    Self: IsSet,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Element, T> Cons<H, T> {
    /// Value of the first element.
    pub const fn head(&self) -> ValueOf<H> {
        H::VALUE
    }

    /// The set without its first element.
    pub fn tail(&self) -> T
    where
        T: Set,
    {
        T::default()
    }
}

// =============================================================================
// Set
// =============================================================================

/// A duplicate-free sequence, usable as a value.
///
/// Implemented for every `Nil`/`Cons` type whose elements are pairwise distinct.
/// The operations mirror the type-level traits in [`ops`](super::ops); each one
/// is available when the corresponding trait resolves and its result is again
/// a set.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a set",
    label = "repeated element, or not a `Nil`/`Cons` sequence",
    note = "build sets with `set![kind; a, b, ..]`, or reduce a sequence with `Bag::to_set`"
)]
pub trait Set:
    Sequence + IsSet<Out = Present> + IsEverseList + IsInverseList + Copy + Default
{
    const SIZE: usize = Self::LEN;
    const EMPTY: bool = Self::LEN == 0;

    /// Elements are in non-decreasing order.
    const IS_EVERSE_LIST: bool = <Self as IsEverseList>::VALUE;
    /// Elements are in non-increasing order.
    const IS_INVERSE_LIST: bool = <Self as IsInverseList>::VALUE;
    /// Elements are ordered in either direction.
    const IS_LIST: bool = Self::IS_EVERSE_LIST || Self::IS_INVERSE_LIST;

    #[inline(always)]
    fn size(self) -> usize {
        Self::SIZE
    }

    #[inline(always)]
    fn is_empty(self) -> bool {
        Self::EMPTY
    }

    /// `value` is an element of the set.
    fn contains(self, value: Prim<Self>) -> bool {
        Self::position(value).is_some()
    }

    /// Element at Peano index `N`. Out of range does not compile.
    ///
    /// ```compile_fail
    /// use tola_set::{set, Set, D2};
    /// let _ = <set![i16; -1, 3]>::new().get::<D2>();
    /// ```
    #[inline(always)]
    fn get<N>(self) -> ValueOf<GetOf<Self, N>>
    where
        Self: Get<N>,
    {
        <GetOf<Self, N> as Element>::VALUE
    }

    /// Element at a runtime index.
    fn try_get(self, index: usize) -> Result<Prim<Self>, SetError> {
        Self::nth(index).ok_or_else(|| {
            log::debug!("index {index} out of range for a set of size {}", Self::SIZE);
            SetError::IndexOutOfRange { index, size: Self::SIZE }
        })
    }

    fn subset_of<O>(self, _other: &O) -> bool
    where
        Self: SubsetOf<O>,
    {
        <Self as SubsetOf<O>>::VALUE
    }

    /// Same elements in any order.
    fn equals<O>(self, _other: &O) -> bool
    where
        Self: Equals<O>,
    {
        <Self as Equals<O>>::VALUE
    }

    fn prepend<E>(self) -> PrependOf<Self, E>
    where
        Self: Prepend<E>,
        PrependOf<Self, E>: Set,
    {
        Default::default()
    }

    fn append<E>(self) -> AppendOf<Self, E>
    where
        Self: Append<E>,
        AppendOf<Self, E>: Set,
    {
        Default::default()
    }

    fn union<O>(self, _other: O) -> UnionOf<Self, O>
    where
        Self: Union<O>,
        UnionOf<Self, O>: Set,
    {
        Default::default()
    }

    fn subtract<E>(self) -> SubtractOf<Self, E>
    where
        Self: Subtract<E>,
        SubtractOf<Self, E>: Set,
    {
        Default::default()
    }

    /// `other` without the elements of `self`.
    fn difference<O>(self, _other: O) -> DifferenceOf<Self, O>
    where
        Self: Difference<O>,
        DifferenceOf<Self, O>: Set,
    {
        Default::default()
    }

    fn intersection<O>(self, _other: O) -> IntersectionOf<Self, O>
    where
        Self: Intersection<O>,
        IntersectionOf<Self, O>: Set,
    {
        Default::default()
    }

    fn smaller_than<E>(self) -> SmallerOf<Self, E>
    where
        Self: SmallerThan<E>,
        SmallerOf<Self, E>: Set,
    {
        Default::default()
    }

    fn larger_than<E>(self) -> LargerOf<Self, E>
    where
        Self: LargerThan<E>,
        LargerOf<Self, E>: Set,
    {
        Default::default()
    }

    fn quick_sort(self) -> SortedOf<Self>
    where
        Self: QuickSort,
        SortedOf<Self>: Set,
    {
        Default::default()
    }

    fn iter(self) -> Iter<Self> {
        Iter::new()
    }

    fn for_each<F: FnMut(Prim<Self>)>(self, mut f: F) {
        Self::visit(&mut f);
    }

    #[cfg(feature = "alloc")]
    fn to_vec(self) -> alloc::vec::Vec<Prim<Self>> {
        let mut values = alloc::vec::Vec::with_capacity(Self::SIZE);
        Self::visit(&mut |value| values.push(value));
        values
    }

    /// The set value, if `values` lists exactly its elements in some order.
    fn from_values(values: &[Prim<Self>]) -> Result<Self, SetError> {
        slice::ensure_set(values)?;
        let matches = values.len() == Self::SIZE
            && values.iter().all(|&value| Self::position(value).is_some());
        if matches {
            Ok(Self::default())
        } else {
            log::debug!("{values:?} do not match a set of size {}", Self::SIZE);
            Err(SetError::Mismatch)
        }
    }
}

impl<Q> Set for Q where
    Q: Sequence + IsSet<Out = Present> + IsEverseList + IsInverseList + Copy + Default
{
}

// =============================================================================
// Iteration
// =============================================================================

/// Iterator over the element values of a set, head first.
pub struct Iter<Q> {
    front: usize,
    back: usize,
    _set: PhantomData<Q>,
}

impl<Q: Sequence> Iter<Q> {
    fn new() -> Self {
        Iter { front: 0, back: Q::LEN, _set: PhantomData }
    }
}

impl<Q: Sequence> Iterator for Iter<Q> {
    type Item = Prim<Q>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let value = Q::nth(self.front);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<Q: Sequence> DoubleEndedIterator for Iter<Q> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Q::nth(self.back)
    }
}

impl<Q: Sequence> ExactSizeIterator for Iter<Q> {}
impl<Q: Sequence> FusedIterator for Iter<Q> {}

// =============================================================================
// Operators and formatting
// =============================================================================

// `a + b` is the union, `a * b` the intersection, `a - b` is `a \ b`.
macro_rules! impl_set_ops {
    ($([$($g:ident),*] $ty:ty;)*) => {$(
        impl<$($g,)* O> Add<O> for $ty
        where
            Self: Set + Union<O>,
            UnionOf<Self, O>: Set,
        {
            type Output = UnionOf<Self, O>;

            fn add(self, other: O) -> Self::Output {
                self.union(other)
            }
        }

        impl<$($g,)* O> Sub<O> for $ty
        where
            Self: Set,
            O: Set + Difference<Self>,
            DifferenceOf<O, Self>: Set,
        {
            type Output = DifferenceOf<O, Self>;

            fn sub(self, other: O) -> Self::Output {
                other.difference(self)
            }
        }

        impl<$($g,)* O> Mul<O> for $ty
        where
            Self: Set + Intersection<O>,
            IntersectionOf<Self, O>: Set,
        {
            type Output = IntersectionOf<Self, O>;

            fn mul(self, other: O) -> Self::Output {
                self.intersection(other)
            }
        }

        impl<$($g,)* O> PartialEq<O> for $ty
        where
            Self: Equals<O>,
        {
            fn eq(&self, _other: &O) -> bool {
                <Self as Equals<O>>::VALUE
            }
        }

        impl<$($g),*> Eq for $ty where Self: Equals<Self> {}

        impl<$($g),*> fmt::Debug for $ty
        where
            Self: Sequence,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut set = f.debug_set();
                Self::visit(&mut |value| {
                    set.entry(&value);
                });
                set.finish()
            }
        }

        impl<$($g),*> fmt::Display for $ty
        where
            Self: Sequence,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("{")?;
                let mut result = Ok(());
                let mut first = true;
                Self::visit(&mut |value| {
                    if result.is_ok() {
                        result = if first { write!(f, "{value}") } else { write!(f, ", {value}") };
                        first = false;
                    }
                });
                result?;
                f.write_str("}")
            }
        }

        impl<$($g),*> IntoIterator for $ty
        where
            Self: Set,
        {
            type Item = Prim<Self>;
            type IntoIter = Iter<Self>;

            fn into_iter(self) -> Iter<Self> {
                self.iter()
            }
        }
    )*};
}

impl_set_ops! {
    [K] Nil<K>;
    [H, T] Cons<H, T>;
}
