//! `Identifier` trait implementation and conversion helpers.
//!
//! These functions emit the glue that ties a generated struct to the runtime
//! crate: an initializer, the trait impl carrying the `RawValue` type, and
//! `From` conversions in both directions.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Path, Type};

use crate::expand::spec::IdentifierSpec;

const NEW_DOC: &str = "Wrap `raw_value` in this identifier type.";

/// Generate the inherent `new` initializer.
///
/// The initializer takes the declaration's visibility so a `pub` struct gets
/// a `pub` constructor and a private one stays private.
pub(crate) fn generate_initializer(ident: &Ident, spec: &IdentifierSpec) -> TokenStream {
    let IdentifierSpec {
        raw_value_type,
        visibility,
        ..
    } = spec;
    quote! {
        impl #ident {
            #[doc = #NEW_DOC]
            #[must_use]
            #visibility const fn new(raw_value: #raw_value_type) -> Self {
                Self { raw_value }
            }
        }
    }
}

/// Generate the `Identifier` implementation, which carries `RawValue`.
pub(crate) fn generate_identifier_impl(
    ident: &Ident,
    raw_value_type: &Type,
    krate: &Path,
) -> TokenStream {
    quote! {
        impl #krate::Identifier for #ident {
            type RawValue = #raw_value_type;

            fn from_raw_value(raw_value: Self::RawValue) -> Self {
                Self::new(raw_value)
            }

            fn raw_value(&self) -> &Self::RawValue {
                &self.raw_value
            }

            fn into_raw_value(self) -> Self::RawValue {
                self.raw_value
            }
        }
    }
}

/// Generate `From` conversions between the identifier and its raw value.
pub(crate) fn generate_conversions(ident: &Ident, raw_value_type: &Type) -> TokenStream {
    quote! {
        impl ::core::convert::From<#raw_value_type> for #ident {
            fn from(raw_value: #raw_value_type) -> Self {
                Self::new(raw_value)
            }
        }

        impl ::core::convert::From<#ident> for #raw_value_type {
            fn from(identifier: #ident) -> Self {
                identifier.raw_value
            }
        }
    }
}
