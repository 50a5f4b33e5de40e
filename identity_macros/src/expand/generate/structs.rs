//! Struct declaration emission.
//!
//! The declaration always holds exactly one field, `raw_value`. Derives are
//! the union of the requested capabilities and the traits `Identifier`
//! requires, with the requested ones kept first and in their original order.

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::Ident;

use crate::expand::spec::{Capability, IdentifierSpec};

/// Derives every identifier needs; equality and hashing delegate to the raw
/// value because it is the only field.
pub(crate) const REQUIRED_DERIVES: &[&str] = &["Clone", "Debug", "PartialEq", "Eq", "Hash"];

const TYPE_DOC: &str = "Strongly typed identifier declared with `new_identifier!`.";
const FIELD_DOC: &str = "Raw value wrapped by this identifier.";

/// Merge requested capabilities with [`REQUIRED_DERIVES`].
///
/// Requested capabilities are never dropped or reordered; required derives
/// are appended only when no capability with the same trait name exists.
pub(crate) fn derive_list(capabilities: &[Capability]) -> Vec<TokenStream> {
    let mut derives: Vec<TokenStream> = capabilities
        .iter()
        .map(|capability| capability.path.to_token_stream())
        .collect();
    derives.extend(
        REQUIRED_DERIVES
            .iter()
            .filter(|required| !capabilities.iter().any(|c| c.name() == **required))
            .map(|required| Ident::new(required, Span::call_site()).to_token_stream()),
    );
    derives
}

/// Generate the identifier struct declaration.
///
/// # Examples
///
/// ```rust,ignore
/// let spec = /* new_identifier!(Uuid, "Id") */;
/// let tokens = generate_struct(&syn::parse_str("Id")?, &spec);
/// assert!(tokens.to_string().contains("raw_value : Uuid"));
/// ```
pub(crate) fn generate_struct(ident: &Ident, spec: &IdentifierSpec) -> TokenStream {
    let IdentifierSpec {
        raw_value_type,
        visibility,
        attributes,
        extra_capabilities,
        ..
    } = spec;
    let derives = derive_list(extra_capabilities);
    let type_doc = if spec.is_attached() {
        quote! {}
    } else {
        quote! { #[doc = #TYPE_DOC] }
    };
    quote! {
        #type_doc
        #[derive(#(#derives),*)]
        #(#attributes)*
        #visibility struct #ident {
            #[doc = #FIELD_DOC]
            #visibility raw_value: #raw_value_type,
        }
    }
}
