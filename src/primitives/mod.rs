//! # Layer 0: Primitives
//!
//! Basic building blocks for the set system:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `order.rs`: Type-level orderings (Less/Equal/Greater).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF) and their ordering.
//! - `peano.rs`: Peano numbers for compile-time indexing.
//! - `int.rs`: Integer elements built from nibble digits.

pub mod bool;
pub mod order;
pub mod nibble;
pub mod peano;
pub mod int;

// Re-export key types at this level
pub use bool::{Bool, Present, Absent};
pub use order::{Order, Less, Equal, Greater, IsLessOrEqual, IsGreaterOrEqual};
pub use nibble::{Nibble, NibbleCmp, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};
pub use peano::*;
pub use int::{
    Digits, DigitsCmp, End, Nib,
    Kind, Element, ValueOf, Int, Compare, CompareOf,
    I8, I16, I32, I64, I128, U8, U16, U32, U64, U128,
};
