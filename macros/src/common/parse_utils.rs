//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros:
//! `kind; literal, literal, ...`

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Expr, ExprLit, ExprUnary, Ident, Lit, LitInt, Token, UnOp,
};

use crate::inner::digits::ElementKind;

// =============================================================================
// Literal Parsing: `-3`, `42u8`, `(7)`
// =============================================================================

/// Split an expression into sign and integer literal.
pub fn parse_int_literal(expr: &Expr) -> syn::Result<(bool, LitInt)> {
    match expr {
        Expr::Lit(ExprLit { lit: Lit::Int(lit), .. }) => Ok((false, lit.clone())),
        Expr::Unary(ExprUnary { op: UnOp::Neg(_), expr: inner, .. }) => {
            let (negative, lit) = parse_int_literal(inner)?;
            Ok((!negative, lit))
        }
        // Literals forwarded through `macro_rules!` arrive wrapped in invisible groups
        Expr::Group(group) => parse_int_literal(&group.expr),
        Expr::Paren(paren) => parse_int_literal(&paren.expr),
        other => Err(syn::Error::new_spanned(other, "expected an integer literal")),
    }
}

/// One literal resolved against the element kind.
pub struct Encoded {
    pub bits: u128,
    pub expr: Expr,
}

/// Encode a literal expression for `kind`.
pub fn encode_literal(kind: ElementKind, expr: &Expr) -> syn::Result<Encoded> {
    let (negative, lit) = parse_int_literal(expr)?;

    let suffix = lit.suffix();
    if !suffix.is_empty() && suffix != kind.name {
        return Err(syn::Error::new_spanned(
            &lit,
            format!("literal suffix `{}` does not match element kind `{}`", suffix, kind.name),
        ));
    }

    let magnitude = lit.base10_parse::<u128>()?;
    let bits = kind.encode(negative, magnitude).ok_or_else(|| {
        syn::Error::new_spanned(expr, format!("literal out of range for `{}`", kind.name))
    })?;

    Ok(Encoded { bits, expr: expr.clone() })
}

// =============================================================================
// Sequence Input: `i16; -1, 3, 4`
// =============================================================================

/// Element kind followed by an optional `;`-separated literal list.
pub struct SeqInput {
    pub kind: ElementKind,
    pub values: Vec<Expr>,
}

impl Parse for SeqInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ident: Ident = input.parse()?;
        let kind = ElementKind::lookup(&ident.to_string()).ok_or_else(|| {
            syn::Error::new_spanned(
                &ident,
                format!(
                    "unsupported element kind `{}`; expected one of {}",
                    ident,
                    ElementKind::names()
                ),
            )
        })?;

        if input.is_empty() {
            return Ok(SeqInput { kind, values: Vec::new() });
        }

        input.parse::<Token![;]>()?;
        let values = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
        Ok(SeqInput { kind, values: values.into_iter().collect() })
    }
}

impl SeqInput {
    pub fn encode(&self) -> syn::Result<Vec<Encoded>> {
        self.values
            .iter()
            .map(|expr| encode_literal(self.kind, expr))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_literals() {
        let expr: Expr = syn::parse_str("-17").unwrap();
        let (negative, lit) = parse_int_literal(&expr).unwrap();
        assert!(negative);
        assert_eq!(lit.base10_parse::<u32>().unwrap(), 17);
    }

    #[test]
    fn rejects_non_literals() {
        let expr: Expr = syn::parse_str("x + 1").unwrap();
        assert!(parse_int_literal(&expr).is_err());
    }

    #[test]
    fn parses_kind_and_values() {
        let input: SeqInput = syn::parse_str("i16; -1, 3, 4").unwrap();
        assert_eq!(input.kind.name, "i16");
        assert_eq!(input.values.len(), 3);

        let empty: SeqInput = syn::parse_str("u8").unwrap();
        assert!(empty.values.is_empty());
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(syn::parse_str::<SeqInput>("f64; 1").is_err());
    }

    #[test]
    fn checks_suffix_and_range() {
        let kind = ElementKind::lookup("u8").unwrap();
        assert!(encode_literal(kind, &syn::parse_str("7u8").unwrap()).is_ok());
        assert!(encode_literal(kind, &syn::parse_str("7i16").unwrap()).is_err());
        assert!(encode_literal(kind, &syn::parse_str("300").unwrap()).is_err());
    }
}
