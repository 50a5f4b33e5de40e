//! Front-end for `new_identifier!(<vis>? <RawType>, "<Name>", ...)`.

use proc_macro2::{Span, TokenStream};
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{LitStr, Token, Type, Visibility};

use super::options::{Allowed, Options, parse_options};
use crate::expand::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::expand::spec::{Form, IdentifierSpec, SpecName};

/// Raw freestanding input before required pieces are checked.
struct FreestandingInput {
    visibility: Visibility,
    raw_value_type: Option<Type>,
    name: Option<LitStr>,
    options: TokenStream,
}

impl Parse for FreestandingInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let visibility: Visibility = input.parse()?;
        let raw_value_type = if input.is_empty() || input.peek(LitStr) || input.peek(Token![,]) {
            None
        } else {
            Some(input.parse::<Type>()?)
        };
        if raw_value_type.is_some() || input.peek(Token![,]) {
            consume_comma(input)?;
        }
        let name = if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            consume_comma(input)?;
            Some(lit)
        } else {
            None
        };
        Ok(Self {
            visibility,
            raw_value_type,
            name,
            options: input.parse()?,
        })
    }
}

/// Consume a separating comma unless the input has ended.
fn consume_comma(input: ParseStream) -> syn::Result<()> {
    if !input.is_empty() {
        input.parse::<Token![,]>()?;
    }
    Ok(())
}

/// Parse `new_identifier!` input into an [`IdentifierSpec`].
///
/// A missing raw type, a missing name and malformed options are reported
/// together so one compile shows every problem.
pub(crate) fn parse_freestanding(input: TokenStream) -> syn::Result<IdentifierSpec> {
    let FreestandingInput {
        visibility,
        raw_value_type,
        name,
        options,
    } = syn::parse2(input)?;

    let name_span = raw_value_type
        .as_ref()
        .map_or_else(Span::call_site, Spanned::span);
    let mut diagnostics = Diagnostics::default();
    let raw = diagnostics.check(raw_value_type.ok_or_else(|| {
        Diagnostic::new(
            DiagnosticKind::MissingRawType { detail: None },
            Span::call_site(),
        )
    }));
    let lit = diagnostics.check(
        name.ok_or_else(|| Diagnostic::new(DiagnosticKind::MissingName, name_span)),
    );
    let parsed = diagnostics.check(parse_options(options, Allowed::DeriveAndCrate));

    let spec = raw
        .zip(lit)
        .zip(parsed)
        .map(|((raw_value_type, name), Options { capabilities, crate_path })| IdentifierSpec {
            name: SpecName::from_lit(&name),
            raw_value_type,
            extra_capabilities: capabilities,
            visibility,
            attributes: Vec::new(),
            form: Form::Freestanding,
            crate_path,
        });
    diagnostics.conclude(spec)
}
