//! Type-level ordering.
//!
//! Core types: `Less`, `Equal`, `Greater`, `Order` trait.

use core::cmp::Ordering;

use super::bool::{Absent, Bool, Present};

/// Type-level result of comparing two values.
pub trait Order: 'static {
    const VALUE: Ordering;

    type IsLess: Bool;
    type IsEqual: Bool;
    type IsGreater: Bool;

    /// Lexicographic chaining: `Equal` defers to `Next`, anything else wins.
    type Then<Next: Order>: Order;
}

/// Type-level `Ordering::Less`.
#[derive(Debug)]
pub struct Less;

/// Type-level `Ordering::Equal`.
#[derive(Debug)]
pub struct Equal;

/// Type-level `Ordering::Greater`.
#[derive(Debug)]
pub struct Greater;

impl Order for Less {
    const VALUE: Ordering = Ordering::Less;
    type IsLess = Present;
    type IsEqual = Absent;
    type IsGreater = Absent;
    type Then<Next: Order> = Less;
}

impl Order for Equal {
    const VALUE: Ordering = Ordering::Equal;
    type IsLess = Absent;
    type IsEqual = Present;
    type IsGreater = Absent;
    type Then<Next: Order> = Next;
}

impl Order for Greater {
    const VALUE: Ordering = Ordering::Greater;
    type IsLess = Absent;
    type IsEqual = Absent;
    type IsGreater = Present;
    type Then<Next: Order> = Greater;
}

/// `a <= b` as a type-level boolean.
pub type IsLessOrEqual<O> = <<O as Order>::IsGreater as Bool>::Not;

/// `a >= b` as a type-level boolean.
pub type IsGreaterOrEqual<O> = <<O as Order>::IsLess as Bool>::Not;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chaining_keeps_first_difference() {
        assert_eq!(<<Equal as Order>::Then<Less> as Order>::VALUE, Ordering::Less);
        assert_eq!(<<Greater as Order>::Then<Less> as Order>::VALUE, Ordering::Greater);
        assert_eq!(<<Equal as Order>::Then<Equal> as Order>::VALUE, Ordering::Equal);
    }

    #[test]
    fn non_strict_comparisons() {
        assert!(<IsLessOrEqual<Equal> as Bool>::VALUE);
        assert!(<IsLessOrEqual<Less> as Bool>::VALUE);
        assert!(!<IsLessOrEqual<Greater> as Bool>::VALUE);
        assert!(<IsGreaterOrEqual<Greater> as Bool>::VALUE);
        assert!(!<IsGreaterOrEqual<Less> as Bool>::VALUE);
    }
}
