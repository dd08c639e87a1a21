//! Set, sequence, bag and element construction macros
//!
//! - `set!` - duplicate-free set type
//! - `seq!` - raw sequence type (duplicates allowed)
//! - `bag!` - bag type wrapping a raw sequence
//! - `elem!` - single element type

use std::collections::HashMap;

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};

use crate::common::{Encoded, SeqInput};
use crate::inner::digits::ElementKind;

/// Check for duplicate elements in the list
pub fn check_duplicates(encoded: &[Encoded]) -> syn::Result<()> {
    let mut seen = HashMap::new();
    for (index, element) in encoded.iter().enumerate() {
        if let Some(first) = seen.insert(element.bits, index) {
            return Err(syn::Error::new_spanned(
                &element.expr,
                format!(
                    "duplicate element `{}` in set (positions {} and {})\n\
                     \n\
                     Each element may appear only once in a set.\n\
                     Use `bag!` to reduce a sequence with repeated values.",
                    element.expr.to_token_stream(),
                    first,
                    index
                ),
            ));
        }
    }
    Ok(())
}

/// Build sequence type: Cons<E0, Cons<E1, ... Nil<Kind>>>
pub fn build_sequence(kind: ElementKind, encoded: &[Encoded]) -> TokenStream2 {
    let marker = kind.marker();
    let mut result = quote! { ::tola_set::set::Nil<#marker> };
    for element in encoded.iter().rev() {
        let ty = kind.element_type(element.bits);
        result = quote! { ::tola_set::set::Cons<#ty, #result> };
    }
    result
}

pub fn expand_set(input: SeqInput) -> syn::Result<TokenStream2> {
    let encoded = input.encode()?;
    check_duplicates(&encoded)?;
    Ok(build_sequence(input.kind, &encoded))
}

pub fn expand_seq(input: SeqInput) -> syn::Result<TokenStream2> {
    let encoded = input.encode()?;
    Ok(build_sequence(input.kind, &encoded))
}

pub fn expand_bag(input: SeqInput) -> syn::Result<TokenStream2> {
    let sequence = expand_seq(input)?;
    Ok(quote! { ::tola_set::bag::Bag<#sequence> })
}

pub fn expand_elem(input: SeqInput) -> syn::Result<TokenStream2> {
    let encoded = input.encode()?;
    match encoded.as_slice() {
        [element] => Ok(input.kind.element_type(element.bits)),
        _ => Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            format!("`elem!` takes exactly one `{}` literal", input.kind.name),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(src: &str) -> SeqInput {
        syn::parse_str(src).unwrap()
    }

    #[test]
    fn set_rejects_duplicates() {
        let err = expand_set(input("i32; 1, 1, 2")).unwrap_err();
        assert!(err.to_string().contains("duplicate element `1`"));
    }

    #[test]
    fn zero_and_negative_zero_collide() {
        assert!(expand_set(input("i8; 0, -0")).is_err());
    }

    #[test]
    fn seq_keeps_duplicates_in_order() {
        let tokens = expand_seq(input("u8; 1, 1")).unwrap().to_string().replace(' ', "");
        assert_eq!(tokens.matches("Cons").count(), 2);
        assert!(tokens.ends_with("::tola_set::set::Nil<::tola_set::primitives::U8>>>"));
    }

    #[test]
    fn empty_set_is_nil() {
        let tokens = expand_set(input("i16")).unwrap().to_string().replace(' ', "");
        assert_eq!(tokens, "::tola_set::set::Nil<::tola_set::primitives::I16>");
    }

    #[test]
    fn elem_takes_one_literal() {
        assert!(expand_elem(input("i16; 3")).is_ok());
        assert!(expand_elem(input("i16; 3, 4")).is_err());
        assert!(expand_elem(input("i16")).is_err());
    }

    #[test]
    fn bag_wraps_a_sequence() {
        let tokens = expand_bag(input("i32; 0, 1, 1")).unwrap().to_string().replace(' ', "");
        assert!(tokens.starts_with("::tola_set::bag::Bag<::tola_set::set::Cons<"));
    }
}
