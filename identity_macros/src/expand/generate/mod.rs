//! Code generation for identifier types.
//!
//! Both front-ends share this emitter. The output is a pure function of the
//! parsed declaration: no counters, randomness or hash ordering, so identical
//! input always renders identical tokens.

use proc_macro2::TokenStream;
use quote::quote;

use super::crate_path;
use super::spec::IdentifierSpec;

pub(crate) mod identifier_impl;
pub(crate) mod structs;

use identifier_impl::{generate_conversions, generate_identifier_impl, generate_initializer};
use structs::generate_struct;

/// Emit the struct declaration and every impl block for `spec`.
pub(crate) fn generate(spec: &IdentifierSpec) -> syn::Result<TokenStream> {
    let ident = spec.name.to_ident()?;
    let krate = crate_path::runtime_path(spec.crate_path.as_ref());
    let declaration = generate_struct(&ident, spec);
    let initializer = generate_initializer(&ident, spec);
    let identifier_impl = generate_identifier_impl(&ident, &spec.raw_value_type, &krate);
    let conversions = generate_conversions(&ident, &spec.raw_value_type);
    Ok(quote! {
        #declaration
        #initializer
        #identifier_impl
        #conversions
    })
}
