//! Trailing `key = value` and `key(...)` options shared by both macros.

use proc_macro2::TokenStream;
use syn::meta::ParseNestedMeta;
use syn::parse::Parser;

use crate::expand::crate_path;
use crate::expand::spec::Capability;

/// Options accepted after the mandatory macro arguments.
#[derive(Default)]
pub(crate) struct Options {
    pub capabilities: Vec<Capability>,
    pub crate_path: Option<syn::Path>,
}

/// Which options a macro accepts.
#[derive(Clone, Copy)]
pub(crate) enum Allowed {
    /// `derive(...)` and `crate = "..."`.
    DeriveAndCrate,
    /// Only `crate = "..."`; derives come from the declaration itself.
    CrateOnly,
}

impl Allowed {
    const fn describe(self) -> &'static str {
        match self {
            Self::DeriveAndCrate => "expected `derive(...)` or `crate = \"...\"`",
            Self::CrateOnly => "expected `crate = \"...\"`",
        }
    }
}

/// Parse a comma separated option list.
///
/// # Examples
///
/// ```rust,ignore
/// let tokens = quote::quote!(derive(Serialize), crate = "ids");
/// let options = parse_options(tokens, Allowed::DeriveAndCrate)?;
/// assert_eq!(options.capabilities.len(), 1);
/// ```
pub(crate) fn parse_options(tokens: TokenStream, allowed: Allowed) -> syn::Result<Options> {
    let mut options = Options::default();
    let parser = syn::meta::parser(|meta| apply_option(&meta, allowed, &mut options));
    parser.parse2(tokens)?;
    Ok(options)
}

fn apply_option(
    meta: &ParseNestedMeta,
    allowed: Allowed,
    options: &mut Options,
) -> syn::Result<()> {
    if meta.path.is_ident("crate") {
        let lit: syn::LitStr = meta.value()?.parse()?;
        options.crate_path = Some(crate_path::parse_literal(&lit)?);
        return Ok(());
    }
    if meta.path.is_ident("derive") && matches!(allowed, Allowed::DeriveAndCrate) {
        return meta.parse_nested_meta(|nested| {
            options.capabilities.push(Capability::new(nested.path));
            Ok(())
        });
    }
    Err(meta.error(format!("unsupported identifier option; {}", allowed.describe())))
}
