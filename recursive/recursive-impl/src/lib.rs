extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use proc_macro_hack::proc_macro_hack;
use quote::quote;
use recursive_core::{GenerationRequest, MacroFamily};
use syn::parse::{Parse, ParseStream};
use syn::*;

struct RecursiveMacroInput {
    name: LitStr,
    arg_pattern: LitStr,
    expansion: LitStr,
    arity: i64,
    arity_span: Span,
}

impl Parse for RecursiveMacroInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let name: LitStr = input.parse()?;
        input.parse::<Token![,]>()?;
        let arg_pattern: LitStr = input.parse()?;
        input.parse::<Token![,]>()?;
        let expansion: LitStr = input.parse()?;
        input.parse::<Token![,]>()?;
        let negative = input.peek(Token![-]);
        if negative {
            <Token![-]>::parse(input)?;
        }
        let arity: LitInt = input.parse()?;
        let arity_span = arity.span();
        let arity = arity.base10_parse::<i64>()?;
        if !input.is_empty() {
            input.parse::<Token![,]>()?;
        }

        Ok(RecursiveMacroInput {
            name,
            arg_pattern,
            expansion,
            arity: if negative { -arity } else { arity },
            arity_span,
        })
    }
}

/// Expands to a string literal holding the rendered macro family:
///
/// ```ignore
/// const HEADER: &str = recursive_family!("E", "a, v", "a = v,", 128);
/// ```
#[proc_macro]
pub fn recursive_family(input: TokenStream) -> TokenStream {
    let family = parse_macro_input!(input as RecursiveMacroInput);
    let output = family.expand_family().unwrap_or_else(|err| err.to_compile_error());
    TokenStream::from(output)
}

#[proc_macro_hack]
pub fn erecursive_family(input: TokenStream) -> TokenStream {
    recursive_family(input)
}

impl RecursiveMacroInput {
    fn expand_family(&self) -> Result<TokenStream2> {
        let request = GenerationRequest::new(
            self.name.value(),
            self.arg_pattern.value(),
            self.expansion.value(),
            self.arity,
        )
        .map_err(|err| Error::new(self.arity_span, err))?;
        let text = LitStr::new(&MacroFamily::generate(&request).render(), Span::call_site());
        Ok(quote! { #text })
    }
}
