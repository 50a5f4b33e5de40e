//! Parsing for the identifier macros.
//!
//! Two adapters convert macro input into an
//! [`IdentifierSpec`](crate::expand::spec::IdentifierSpec):
//! [`parse_freestanding`] for `new_identifier!(...)` and [`parse_attached`]
//! for `#[identifier(...)]`. Missing pieces, such as the name or raw type, are
//! reported here; everything else is left to validation.

use syn::{Attribute, Path};

mod attached;
mod freestanding;
mod options;

pub(crate) use attached::parse_attached;
pub(crate) use freestanding::parse_freestanding;

use super::spec::Capability;

/// Split `attrs` into the capabilities listed by `#[derive(...)]` and the
/// remaining attributes, preserving the order of both.
pub(crate) fn split_derives(
    attrs: Vec<Attribute>,
) -> syn::Result<(Vec<Capability>, Vec<Attribute>)> {
    let mut capabilities = Vec::new();
    let mut rest = Vec::new();
    for attr in attrs {
        if attr.path().is_ident("derive") {
            capabilities.extend(derive_paths(&attr)?.into_iter().map(Capability::new));
        } else {
            rest.push(attr);
        }
    }
    Ok((capabilities, rest))
}

/// Collect the trait paths named by a single `#[derive(...)]` attribute.
fn derive_paths(attr: &Attribute) -> syn::Result<Vec<Path>> {
    let mut paths = Vec::new();
    attr.parse_nested_meta(|meta| {
        paths.push(meta.path);
        Ok(())
    })?;
    Ok(paths)
}
