//! Type-level nibble system (4-bit values X0-XF).
//!
//! Nibbles are the digits of every element: an integer is a big-endian list of them,
//! so comparing two elements is a lexicographic walk over `NibbleCmp`.

use super::order::{Equal, Greater, Less, Order};

// =============================================================================
// Nibble iteration macros
// =============================================================================

/// Iterate over all 16 (Nibble, value) pairs.
macro_rules! for_each_nibble {
    ($mac:ident) => {
        $mac!(X0, 0x0); $mac!(X1, 0x1); $mac!(X2, 0x2); $mac!(X3, 0x3);
        $mac!(X4, 0x4); $mac!(X5, 0x5); $mac!(X6, 0x6); $mac!(X7, 0x7);
        $mac!(X8, 0x8); $mac!(X9, 0x9); $mac!(XA, 0xA); $mac!(XB, 0xB);
        $mac!(XC, 0xC); $mac!(XD, 0xD); $mac!(XE, 0xE); $mac!(XF, 0xF);
    };
}

/// Generate impls for all distinct pairs (A, B) with A < B, in both directions.
macro_rules! for_ordered_pairs {
    ($mac:ident) => {
        for_ordered_pairs!(@recurse $mac, [X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF]);
    };
    (@recurse $mac:ident, [$head:ident, $($tail:ident),*]) => {
        $(
            $mac!($head, $tail, Less);
            $mac!($tail, $head, Greater);
        )*
        for_ordered_pairs!(@recurse $mac, [$($tail),*]);
    };
    (@recurse $mac:ident, [$last:ident]) => {};
}

// =============================================================================
// Nibble trait and types
// =============================================================================

/// Type-level nibble (4-bit value, 0..15)
pub trait Nibble: 'static {
    const VALUE: u8;
}

// Define structs X0..XF and implement Nibble
macro_rules! define_nibble {
    ($n:ident, $v:literal) => {
        #[derive(Debug)]
        pub struct $n;
        impl Nibble for $n {
            const VALUE: u8 = $v;
        }
    };
}
for_each_nibble!(define_nibble);

// =============================================================================
// Nibble ordering
// =============================================================================

/// Type-level nibble comparison
pub trait NibbleCmp<Other: Nibble>: Nibble {
    type Out: Order;
}

// Self-comparison: X == X
macro_rules! impl_cmp_self {
    ($n:ident, $v:literal) => {
        impl NibbleCmp<$n> for $n {
            type Out = Equal;
        }
    };
}
for_each_nibble!(impl_cmp_self);

macro_rules! impl_cmp {
    ($a:ident, $b:ident, $ord:ident) => {
        impl NibbleCmp<$b> for $a {
            type Out = $ord;
        }
    };
}
for_ordered_pairs!(impl_cmp);

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;

    fn cmp<A: NibbleCmp<B>, B: Nibble>() -> Ordering {
        <<A as NibbleCmp<B>>::Out as Order>::VALUE
    }

    #[test]
    fn values_follow_names() {
        assert_eq!(X0::VALUE, 0);
        assert_eq!(X9::VALUE, 9);
        assert_eq!(XF::VALUE, 15);
    }

    #[test]
    fn ordering_matches_values() {
        assert_eq!(cmp::<X3, X3>(), Ordering::Equal);
        assert_eq!(cmp::<X0, XF>(), Ordering::Less);
        assert_eq!(cmp::<XF, X0>(), Ordering::Greater);
        assert_eq!(cmp::<X9, XA>(), Ordering::Less);
        assert_eq!(cmp::<XE, XD>(), Ordering::Greater);
    }
}
