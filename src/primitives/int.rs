//! Type-level integers.
//!
//! An element is `Int<K, D>`: a kind marker `K` naming the primitive type and a
//! big-endian digit list `D` of exactly `K::BITS / 4` nibbles.
//!
//! ```text
//! i16: -1  ->  0xFFFF ^ 0x8000 = 0x7FFF  ->  Nib<X7, Nib<XF, Nib<XF, Nib<XF, End>>>>
//! i16:  0  ->  0x0000 ^ 0x8000 = 0x8000  ->  Nib<X8, Nib<X0, Nib<X0, Nib<X0, End>>>>
//! ```
//!
//! Signed kinds store their bits with the sign bit flipped, so the lexicographic
//! nibble order is the numeric order and `Compare` never needs to look at the kind.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::marker::PhantomData;

use super::nibble::{Nibble, NibbleCmp};
use super::order::{Equal, Order};

// =============================================================================
// Digits
// =============================================================================

/// Big-endian nibble list.
pub trait Digits: 'static {
    /// Number of bits spanned by the list.
    const WIDTH: u32;
    /// The encoded bits, right-aligned.
    const BITS: u128;
}

/// End of a digit list.
#[derive(Debug)]
pub struct End;

/// One nibble followed by the less significant digits.
pub struct Nib<N, Rest>(PhantomData<(N, Rest)>);

impl Digits for End {
    const WIDTH: u32 = 0;
    const BITS: u128 = 0;
}

impl<N: Nibble, Rest: Digits> Digits for Nib<N, Rest> {
    const WIDTH: u32 = Rest::WIDTH + 4;
    const BITS: u128 = ((N::VALUE as u128) << Rest::WIDTH) | Rest::BITS;
}

/// Lexicographic comparison of two digit lists of the same width.
pub trait DigitsCmp<Other>: Digits {
    type Out: Order;
}

impl DigitsCmp<End> for End {
    type Out = Equal;
}

impl<A, RA, B, RB> DigitsCmp<Nib<B, RB>> for Nib<A, RA>
where
    A: NibbleCmp<B>,
    B: Nibble,
    RA: DigitsCmp<RB>,
    RB: Digits,
{
    type Out = <<A as NibbleCmp<B>>::Out as Order>::Then<<RA as DigitsCmp<RB>>::Out>;
}

// =============================================================================
// Kinds and elements
// =============================================================================

/// The primitive integer type behind a family of elements.
pub trait Kind: 'static {
    type Prim: Copy + Ord + Hash + Debug + Display + Send + Sync + 'static;
    const BITS: u32;
    const SIGNED: bool;
}

/// A type standing for one value of its kind.
pub trait Element: 'static {
    type Kind: Kind;
    const VALUE: <Self::Kind as Kind>::Prim;
}

/// The primitive type of an element.
pub type ValueOf<E> = <<E as Element>::Kind as Kind>::Prim;

/// Type-level integer of kind `K` with digits `D`.
pub struct Int<K, D>(PhantomData<(K, D)>);

macro_rules! define_kinds {
    ($($prim:ident as $unsigned:ident, $signed:literal;)*) => {
        paste::paste! {
            $(
                #[doc = concat!("Element kind for `", stringify!($prim), "`.")]
                #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
                pub struct [<$prim:upper>];

                impl Kind for [<$prim:upper>] {
                    type Prim = $prim;
                    const BITS: u32 = <$prim>::BITS;
                    const SIGNED: bool = $signed;
                }

                impl<D: Digits> Element for Int<[<$prim:upper>], D> {
                    type Kind = [<$prim:upper>];
                    const VALUE: $prim = {
                        assert!(D::WIDTH == <$prim>::BITS, "digit count does not match the element kind");
                        let flip: $unsigned = if $signed { 1 << (<$unsigned>::BITS - 1) } else { 0 };
                        ((D::BITS as $unsigned) ^ flip) as $prim
                    };
                }
            )*
        }
    };
}

define_kinds! {
    i8 as u8, true;
    i16 as u16, true;
    i32 as u32, true;
    i64 as u64, true;
    i128 as u128, true;
    u8 as u8, false;
    u16 as u16, false;
    u32 as u32, false;
    u64 as u64, false;
    u128 as u128, false;
}

// =============================================================================
// Element comparison
// =============================================================================

/// Compare two elements of the same kind.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be compared with `{Other}`",
    label = "elements of different kinds",
    note = "every element of a set must share one kind, e.g. all `i16`"
)]
pub trait Compare<Other> {
    type Out: Order;
}

impl<K, A, B> Compare<Int<K, B>> for Int<K, A>
where
    A: DigitsCmp<B>,
{
    type Out = <A as DigitsCmp<B>>::Out;
}

/// Result of `Compare`.
pub type CompareOf<A, B> = <A as Compare<B>>::Out;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::nibble::{X0, X2, X7, X8, XF};
    use core::cmp::Ordering;

    type MinusOne = Int<I16, Nib<X7, Nib<XF, Nib<XF, Nib<XF, End>>>>>;
    type Zero = Int<I16, Nib<X8, Nib<X0, Nib<X0, Nib<X0, End>>>>>;
    type Two = Int<I16, Nib<X8, Nib<X0, Nib<X0, Nib<X2, End>>>>>;
    type U8Max = Int<U8, Nib<XF, Nib<XF, End>>>;

    #[test]
    fn decodes_biased_bits() {
        assert_eq!(MinusOne::VALUE, -1i16);
        assert_eq!(Zero::VALUE, 0i16);
        assert_eq!(Two::VALUE, 2i16);
        assert_eq!(U8Max::VALUE, 255u8);
    }

    #[test]
    fn compares_numerically() {
        assert_eq!(<CompareOf<MinusOne, Zero> as Order>::VALUE, Ordering::Less);
        assert_eq!(<CompareOf<Two, Zero> as Order>::VALUE, Ordering::Greater);
        assert_eq!(<CompareOf<Two, Two> as Order>::VALUE, Ordering::Equal);
    }

    #[test]
    fn kinds_describe_their_primitive() {
        assert_eq!(I16::BITS, 16);
        assert!(I16::SIGNED);
        assert!(!U64::SIGNED);
        assert_eq!(U128::BITS, 128);
    }
}
