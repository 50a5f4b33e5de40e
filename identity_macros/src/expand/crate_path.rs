//! Runtime crate path used by generated code.
//!
//! Generated impls name the `Identifier` trait through this path. It is
//! `identity` unless the caller renamed the dependency and passed
//! `crate = "..."`.

use syn::{LitStr, Path, parse_quote};

/// Path to the runtime crate, honouring a `crate = "..."` override.
///
/// ```rust,ignore
/// assert!(runtime_path(None).is_ident("identity"));
/// ```
pub(crate) fn runtime_path(custom: Option<&Path>) -> Path {
    custom.cloned().unwrap_or_else(|| parse_quote!(identity))
}

/// Read the path held by a `crate = "..."` literal.
///
/// Errors point at the literal rather than the whole macro input.
pub(crate) fn parse_literal(lit: &LitStr) -> syn::Result<Path> {
    lit.parse::<Path>()
        .map_err(|err| syn::Error::new(lit.span(), format!("invalid crate path: {err}")))
}
