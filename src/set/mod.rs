//! # Layer 3: Sets
//!
//! The set data structure and its algebra.
//!
//! - **Nodes**: `Nil` (empty), `Cons` (head + tail), the `Sequence` read-out.
//! - **Operations**: `Union`, `Difference`, `Intersection`, `Subtract`, `Prepend`,
//!   `Append`, `SmallerThan`/`LargerThan`, `SubsetOf`/`Equals`, `Get`, `QuickSort`.
//! - **Values**: the `Set` trait, operators (`+`, `-`, `*`, `==`), formatting and
//!   iteration.
//!
//! Each operation exists twice: as a trait with an `Out` type, for use in type
//! position and bounds, and as a method on set values.

pub mod node;
pub mod ops;
pub mod sort;
pub mod aliases;
pub mod value;
pub mod inspect;

pub use node::{Nil, Cons, Sequence, Prim};
pub use ops::{
    Prepend, PushBack, Append, Union, Subtract, Difference, Intersection,
    SmallerThan, LargerThan, SubsetOf, Equals, Get,
};
pub use sort::QuickSort;
pub use aliases::{
    EmptySet, Singleton, UnionOf, DifferenceOf, IntersectionOf, SubtractOf,
    PrependOf, AppendOf, SmallerOf, LargerOf, SortedOf, GetOf,
};
pub use value::{Set, Iter};
pub use inspect::Inspect;
