//! Front-end for `#[identifier(<RawType>, ...)]` on an existing struct.
//!
//! The declaration keeps its name, visibility and attributes. Its existing
//! derive list becomes the extra capabilities so nothing the caller
//! wrote is dropped.

use proc_macro2::{Span, TokenStream};
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Field, Ident, Item, ItemStruct, Token, Type};

use super::options::{Allowed, parse_options};
use super::split_derives;
use crate::expand::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::expand::spec::{Form, IdentifierSpec, SpecName};

/// Arguments of the attribute itself.
struct AttachedArgs {
    raw_value_type: Option<Type>,
    options: TokenStream,
}

impl Parse for AttachedArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(Self {
                raw_value_type: None,
                options: TokenStream::new(),
            });
        }
        let raw_value_type: Type = input.parse()?;
        if !input.is_empty() {
            input.parse::<Token![,]>()?;
        }
        Ok(Self {
            raw_value_type: Some(raw_value_type),
            options: input.parse()?,
        })
    }
}

/// Parse `#[identifier(...)]` arguments and the struct it is attached to.
pub(crate) fn parse_attached(args: TokenStream, item: TokenStream) -> syn::Result<IdentifierSpec> {
    let AttachedArgs {
        raw_value_type,
        options,
    } = syn::parse2(args)?;
    let item: Item = syn::parse2(item)?;

    let mut diagnostics = Diagnostics::default();
    let raw = diagnostics.check(raw_value_type.ok_or_else(|| {
        Diagnostic::new(
            DiagnosticKind::MissingRawType { detail: None },
            Span::call_site(),
        )
    }));
    let parsed = diagnostics.check(parse_options(options, Allowed::CrateOnly));
    let target = diagnostics.check(augmentable_struct(item));
    let derives = target
        .map(|strukt| split_derives(strukt.attrs).map(|split| (strukt.ident, strukt.vis, split)));
    let declaration = derives.and_then(|result| diagnostics.check(result));

    let spec = raw.zip(parsed).zip(declaration).map(
        |((raw_value_type, options), (ident, visibility, (capabilities, attributes)))| {
            IdentifierSpec {
                name: SpecName::from_ident(&ident),
                raw_value_type,
                extra_capabilities: capabilities,
                visibility,
                attributes,
                form: Form::Attached,
                crate_path: options.crate_path,
            }
        },
    );
    diagnostics.conclude(spec)
}

/// Accept only structs whose body can be replaced by the raw value field.
fn augmentable_struct(item: Item) -> Result<ItemStruct, Diagnostic> {
    let strukt = match item {
        Item::Struct(strukt) => strukt,
        other => {
            return Err(unsupported(other.span(), "expected a struct declaration"));
        }
    };
    if !strukt.generics.params.is_empty() {
        return Err(unsupported(
            strukt.generics.span(),
            "identifier structs cannot be generic",
        ));
    }
    if let Some(where_clause) = &strukt.generics.where_clause {
        return Err(unsupported(
            where_clause.where_token.span,
            "identifier structs cannot have a where clause",
        ));
    }
    let first_field = strukt.fields.iter().next().map(field_span);
    first_field.map_or(Ok(strukt), |span| {
        Err(unsupported(
            span,
            "the struct body must be empty; the macro adds the `raw_value` field",
        ))
    })
}

/// Span of a field's name, or of its type for tuple fields.
fn field_span(field: &Field) -> Span {
    field
        .ident
        .as_ref()
        .map_or_else(|| field.ty.span(), Ident::span)
}

const fn unsupported(span: Span, detail: &'static str) -> Diagnostic {
    Diagnostic::new(DiagnosticKind::UnsupportedDeclaration { detail }, span)
}
