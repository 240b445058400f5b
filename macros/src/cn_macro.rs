//! `cn!` macro: parse class-name arguments and expand to a resolver call.

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Error, Expr, ExprLit, Lit, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// One argument of `cn!`.
#[derive(Debug)]
pub(crate) enum CnArg {
    /// A string literal: `"px-4 py-2"`.
    Literal(LitStr),
    /// A literal gated by a condition: `"active" => is_active`.
    Conditional(LitStr, Expr),
    /// Any other expression convertible into `ClassNameInput`.
    Expr(Expr),
}

/// The top-level input to the cn! macro.
#[derive(Debug)]
struct CnInput {
    args: Vec<CnArg>,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for CnArg {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(LitStr) && input.peek2(Token![=>]) {
            let lit: LitStr = input.parse()?;
            input.parse::<Token![=>]>()?;
            let cond: Expr = input.parse()?;
            check_balanced(&lit)?;
            return Ok(CnArg::Conditional(lit, cond));
        }

        match input.parse::<Expr>()? {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit), ..
            }) => {
                check_balanced(&lit)?;
                Ok(CnArg::Literal(lit))
            }
            expr => Ok(CnArg::Expr(expr)),
        }
    }
}

impl Parse for CnInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let args = Punctuated::<CnArg, Token![,]>::parse_terminated(input)?;
        Ok(CnInput {
            args: args.into_iter().collect(),
        })
    }
}

/// Reject literals whose `[]`/`()` don't pair up; such a class can never
/// be parsed the way its author meant. Characters inside `'...'` or
/// `"..."` (`content-['(']`) are not counted.
pub(crate) fn check_balanced(lit: &LitStr) -> Result<()> {
    let value = lit.value();
    let mut open = Vec::new();
    let mut in_quote: Option<char> = None;
    for ch in value.chars() {
        if let Some(q) = in_quote {
            if ch == q {
                in_quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' => in_quote = Some(ch),
            '[' | '(' => open.push(ch),
            ']' | ')' => {
                let expected = if ch == ']' { '[' } else { '(' };
                if open.pop() != Some(expected) {
                    return Err(Error::new(
                        lit.span(),
                        format!("unbalanced `{ch}` in class list `{value}`"),
                    ));
                }
            }
            _ => {}
        }
    }
    match open.last() {
        Some(ch) => Err(Error::new(
            lit.span(),
            format!("unclosed `{ch}` in class list `{value}`"),
        )),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

impl ToTokens for CnArg {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            CnArg::Literal(lit) => quote! { ::classmerge::ClassNameInput::from(#lit) },
            CnArg::Conditional(lit, cond) => {
                quote! { ::classmerge::ClassNameInput::when(#lit, #cond) }
            }
            CnArg::Expr(expr) => quote! { ::classmerge::ClassNameInput::from(#expr) },
        });
    }
}

/// Entry point for the `cn!` proc macro.
pub(crate) fn cn_impl(input: TokenStream) -> Result<TokenStream> {
    let CnInput { args } = syn::parse2(input)?;
    if args.is_empty() {
        return Ok(quote! { ::std::string::String::new() });
    }
    Ok(quote! {
        ::classmerge::resolve_class_names([#(#args),*])
    })
}
