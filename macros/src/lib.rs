//! Procedural macros for the tola-set compile-time set library
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `set![]` | type | Build a set type, rejecting duplicates |
//! | `seq![]` | type | Build a sequence type (duplicates allowed) |
//! | `bag![]` | type | Build a bag type |
//! | `elem![]` | type | Build one element type |
//!
//! ## Example
//!
//! ```ignore
//! type Small = set![i16; -1, 3, 4];
//! type Three = elem![i16; 3];
//!
//! const HAS_THREE: bool = <Small as Contains<Three>>::VALUE;
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate Peano number type aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(64);  // Generates D0 = Z, D1 = S<D0>, ..., D64 = S<D63>
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Create a set type from integer literals.
///
/// The first token names the element kind (`i8`..`i128`, `u8`..`u128`).
/// Repeated values are a compile error.
///
/// # Usage
/// ```ignore
/// type Small = set![i16; -1, 3, 4];
/// type Nothing = set![i16];
/// ```
#[proc_macro]
pub fn set(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::SeqInput);
    user::expand_set(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Create a raw sequence type. Repeated values are kept.
///
/// Sequences are what the predicates (`Contains`, `IsSet`, `IsEverseList`, ...)
/// classify, and what a bag reduces.
#[proc_macro]
pub fn seq(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::SeqInput);
    user::expand_seq(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Create a bag type: `Bag<seq![..]>`.
#[proc_macro]
pub fn bag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::SeqInput);
    user::expand_bag(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Create the element type for a single literal.
///
/// # Usage
/// ```ignore
/// type Three = elem![i16; 3];
/// ```
#[proc_macro]
pub fn elem(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::SeqInput);
    user::expand_elem(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
