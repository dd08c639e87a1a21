//! Element encoding: integer literal -> `Int<Kind, Nib<..>>` type.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// A supported element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementKind {
    pub name: &'static str,
    pub bits: u32,
    pub signed: bool,
}

const KINDS: &[ElementKind] = &[
    ElementKind { name: "i8", bits: 8, signed: true },
    ElementKind { name: "i16", bits: 16, signed: true },
    ElementKind { name: "i32", bits: 32, signed: true },
    ElementKind { name: "i64", bits: 64, signed: true },
    ElementKind { name: "i128", bits: 128, signed: true },
    ElementKind { name: "u8", bits: 8, signed: false },
    ElementKind { name: "u16", bits: 16, signed: false },
    ElementKind { name: "u32", bits: 32, signed: false },
    ElementKind { name: "u64", bits: 64, signed: false },
    ElementKind { name: "u128", bits: 128, signed: false },
];

impl ElementKind {
    pub fn lookup(name: &str) -> Option<Self> {
        KINDS.iter().copied().find(|kind| kind.name == name)
    }

    /// Names of all supported kinds, for diagnostics.
    pub fn names() -> String {
        KINDS.iter().map(|kind| kind.name).collect::<Vec<_>>().join(", ")
    }

    fn mask(&self) -> u128 {
        if self.bits == 128 { u128::MAX } else { (1u128 << self.bits) - 1 }
    }

    /// Encode a value given as sign and magnitude.
    ///
    /// Returns `None` when the value does not fit the kind. Signed kinds get their
    /// sign bit flipped so that unsigned order of the result is numeric order.
    pub fn encode(&self, negative: bool, magnitude: u128) -> Option<u128> {
        let negative = negative && magnitude != 0;
        if self.signed {
            let limit = 1u128 << (self.bits - 1);
            let fits = if negative { magnitude <= limit } else { magnitude < limit };
            if !fits {
                return None;
            }
            let raw = (if negative { magnitude.wrapping_neg() } else { magnitude }) & self.mask();
            Some(raw ^ limit)
        } else {
            if negative || magnitude > self.mask() {
                return None;
            }
            Some(magnitude)
        }
    }

    /// Big-endian nibbles of encoded bits.
    pub fn nibbles(&self, bits: u128) -> Vec<u8> {
        (0..self.bits / 4)
            .rev()
            .map(|i| ((bits >> (i * 4)) & 0xF) as u8)
            .collect()
    }

    /// `::tola_set::primitives::I16` and friends.
    pub fn marker(&self) -> TokenStream {
        let marker = format_ident!("{}", self.name.to_uppercase());
        quote! { ::tola_set::primitives::#marker }
    }

    /// Element type for encoded bits.
    pub fn element_type(&self, bits: u128) -> TokenStream {
        let marker = self.marker();
        let digits = build_digits(&self.nibbles(bits));
        quote! { ::tola_set::primitives::Int<#marker, #digits> }
    }
}

fn build_digits(nibbles: &[u8]) -> TokenStream {
    match nibbles.split_first() {
        None => quote! { ::tola_set::primitives::End },
        Some((head, rest)) => {
            let head = format_ident!("X{:X}", head);
            let rest = build_digits(rest);
            quote! { ::tola_set::primitives::Nib<::tola_set::primitives::#head, #rest> }
        }
    }
}
