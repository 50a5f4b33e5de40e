//! Intermediate description shared by both front-ends.
//!
//! The freestanding and attached parsers each produce an [`IdentifierSpec`];
//! validation and generation only ever see this type.

use proc_macro2::Span;
use syn::{Attribute, Ident, Path, Type, Visibility};

/// How the identifier was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Form {
    /// `new_identifier!(...)` declares a new type.
    Freestanding,
    /// `#[identifier(...)]` augments an existing struct.
    Attached,
}

/// Identifier name as written in the input.
///
/// The freestanding form receives the name as a string literal, so the text
/// may be empty or otherwise not a valid identifier until validated.
#[derive(Debug, Clone)]
pub(crate) struct SpecName {
    pub text: String,
    pub span: Span,
}

impl SpecName {
    pub(crate) fn from_ident(ident: &Ident) -> Self {
        Self {
            text: ident.to_string(),
            span: ident.span(),
        }
    }

    pub(crate) fn from_lit(lit: &syn::LitStr) -> Self {
        Self {
            text: lit.value(),
            span: lit.span(),
        }
    }

    /// Convert the name into an identifier carrying the original span.
    pub(crate) fn to_ident(&self) -> syn::Result<Ident> {
        let mut ident = syn::parse_str::<Ident>(&self.text)
            .map_err(|e| syn::Error::new(self.span, e))?;
        ident.set_span(self.span);
        Ok(ident)
    }
}

/// A capability requested through `derive(...)`.
#[derive(Debug, Clone)]
pub(crate) struct Capability {
    pub path: Path,
}

impl Capability {
    pub(crate) const fn new(path: Path) -> Self {
        Self { path }
    }

    /// The trait name used to compare capabilities, ignoring any module
    /// prefix so `std::hash::Hash` and `Hash` match.
    pub(crate) fn name(&self) -> String {
        self.path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .unwrap_or_default()
    }

    /// The full path as written, used to tell `serde::Serialize` apart from
    /// another crate's `Serialize`.
    pub(crate) fn qualified_name(&self) -> String {
        let segments: Vec<String> = self
            .path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        let joined = segments.join("::");
        if self.path.leading_colon.is_some() {
            format!("::{joined}")
        } else {
            joined
        }
    }

    pub(crate) fn span(&self) -> Span {
        self.path
            .segments
            .last()
            .map_or_else(Span::call_site, |segment| segment.ident.span())
    }
}

/// Everything the emitter needs to produce an identifier type.
#[derive(Debug, Clone)]
pub(crate) struct IdentifierSpec {
    pub name: SpecName,
    pub raw_value_type: Type,
    /// Capabilities in the order they were requested.
    pub extra_capabilities: Vec<Capability>,
    pub visibility: Visibility,
    /// Attributes other than `derive` carried over from the declaration.
    pub attributes: Vec<Attribute>,
    pub form: Form,
    pub crate_path: Option<Path>,
}

impl IdentifierSpec {
    pub(crate) fn is_attached(&self) -> bool {
        self.form == Form::Attached
    }
}
