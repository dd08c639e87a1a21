#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::crate_in_macro_def)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables `Set::to_vec` in no_std

//! # tola-set
//!
//! Compile-time finite sets of integers.
//!
//! **A set's elements live in its type.** Membership, union, difference,
//! intersection and sorting are resolved by the trait solver; at runtime a set is
//! a zero-sized value and every query reads an associated constant.
//!
//! ## Architecture
//!
//! ### 1. Elements
//! Each integer is a type `Int<Kind, Digits>`: a kind marker (`I16`, `U64`, ...)
//! and a big-endian list of nibble types. Signed kinds flip the sign bit, so the
//! nibble order is the numeric order.
//!
//! ```text
//! i16: 3  ->  0x0003 ^ 0x8000 = 0x8003  ->  Nib<X8, Nib<X0, Nib<X0, Nib<X3, End>>>>
//! ```
//!
//! ### 2. Sequences
//! `Nil<K> | Cons<Head, Tail>`. A set is a sequence without repeats; a bag is a
//! sequence with them.
//!
//! ### 3. Algebra
//! Every operation is a trait with an associated `Out` type, so results can be
//! named in type position and chained:
//!
//! ```text
//! <A as Union<B>>::Out          UnionOf<A, B>          union![A, B]
//! <A as Difference<B>>::Out     DifferenceOf<A, B>     difference![A, B]
//! <A as QuickSort>::Out         SortedOf<A>            sorted![A]
//! ```
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present/Absent), Order, Nibble (X0-XF), Peano, Int       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Predicates                                              |
//! |  - Contains, IsSet, IsEverseList, IsInverseList, IsList           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2-3: Bag, Set                                              |
//! |  - ToSet, Union, Difference, Intersection, QuickSort, Set values  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: User API                                                |
//! |  - macros (set!, seq!, bag!, elem!), union!, sorted!, operators   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_set::prelude::*;
//!
//! type Small = set![i16; -1, 3, 4];
//! type Three = elem![i16; 3];
//!
//! const HAS_THREE: bool = <Small as Contains<Three>>::VALUE;
//! assert!(HAS_THREE);
//!
//! let a = Small::new();
//! let b = <set![i16; 3, 5]>::new();
//! assert_eq!(a.size(), 3);
//! assert!((a + b).equals(&<set![i16; -1, 3, 4, 5]>::new()));
//! assert!(a * b == <set![i16; 3]>::new());
//! ```
//!
//! Repeated elements are rejected when the set is written down:
//!
//! ```compile_fail
//! type Broken = tola_set::set![i32; 1, 2, 1];
//! ```

// Allow `::tola_set` to work inside the crate itself
extern crate self as tola_set;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Predicates
// =============================================================================
pub mod predicate;

// =============================================================================
// Layer 2-3: Bags and Sets
// =============================================================================
pub mod bag;
pub mod set;

pub mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{
    Bool, Present, Absent, Order, Less, Equal, Greater,
    Peano, Z, S, D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13, D14, D15, D16,
    Kind, Element, ValueOf, Int, Compare, CompareOf,
    I8, I16, I32, I64, I128, U8, U16, U32, U64, U128,
};
pub use predicate::{Contains, IsSet, IsEverseList, IsInverseList, IsList};
pub use bag::{Bag, ToSet, SetOf};
pub use set::*;
pub use error::SetError;

// Re-export proc-macros
pub use macros::{set, seq, bag, elem};

/// Common items for working with sets.
pub mod prelude {
    pub use crate::predicate::{Contains, IsSet, IsEverseList, IsInverseList, IsList};
    pub use crate::set::{
        // Core traits
        Set, Sequence, Inspect,
        // Nodes
        Nil, Cons,
        // Set operations
        Union, Difference, Intersection, Subtract, Prepend, Append,
        SmallerThan, LargerThan, SubsetOf, Equals, Get, QuickSort,
        // Result aliases
        UnionOf, DifferenceOf, IntersectionOf, SortedOf, GetOf, EmptySet, Singleton,
    };
    pub use crate::bag::{Bag, ToSet, SetOf};
    pub use crate::error::SetError;
    pub use macros::{set, seq, bag, elem};
    // Note: union!, intersect!, difference!, sorted! are #[macro_export] so they're at crate root
}
