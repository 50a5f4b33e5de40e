//! Expansion pipeline shared by both identifier macros.
//!
//! Each entry point runs parse, validate and generate in sequence. Any
//! failure short-circuits the pipeline and the combined diagnostics become the
//! whole macro output, so an erroring expansion never emits a partial type.

use proc_macro2::TokenStream;

pub(crate) mod crate_path;
pub(crate) mod diagnostic;
pub(crate) mod generate;
pub(crate) mod parse;
pub(crate) mod spec;
pub(crate) mod validate;

use spec::IdentifierSpec;

/// Expands `new_identifier!(...)`.
pub(crate) fn freestanding(input: TokenStream) -> TokenStream {
    render(parse::parse_freestanding(input))
}

/// Expands `#[identifier(...)]` applied to `item`.
pub(crate) fn attached(args: TokenStream, item: TokenStream) -> TokenStream {
    render(parse::parse_attached(args, item))
}

fn render(spec: syn::Result<IdentifierSpec>) -> TokenStream {
    spec.and_then(|parsed| {
        validate::validate(&parsed)?;
        generate::generate(&parsed)
    })
    .unwrap_or_else(|err| err.to_compile_error())
}
