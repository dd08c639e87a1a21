//! Index alias generation: `D0 = Z`, `Dn = S<Dn-1>`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse::Parse, parse::ParseStream, LitInt};

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(PeanoInput { max })
    }
}

pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let aliases = (0..=input.max).map(|n| {
        let name = format_ident!("D{}", n);
        let doc = format!("Index {n}.");
        if n == 0 {
            quote! { #[doc = #doc] pub type #name = Z; }
        } else {
            let prev = format_ident!("D{}", n - 1);
            quote! { #[doc = #doc] pub type #name = S<#prev>; }
        }
    });

    quote! { #(#aliases)* }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_one_alias_per_index() {
        let tokens = expand_peano(PeanoInput { max: 2 }).to_string();
        assert!(tokens.contains("pub type D0 = Z"));
        assert!(tokens.contains("pub type D1 = S < D0 >"));
        assert!(tokens.contains("pub type D2 = S < D1 >"));
        assert!(!tokens.contains("D3"));
    }
}
