//! Validation of an [`IdentifierSpec`] before emission.
//!
//! Validation never mutates the spec. Every problem found is reported against
//! the span recorded by the parser, and all of them are returned together.

use std::collections::BTreeSet;

use syn::Type;
use syn::spanned::Spanned;

use super::diagnostic::{ConflictReason, DiagnosticKind, Diagnostics};
use super::spec::{Capability, IdentifierSpec};

/// Capabilities a single raw value wrapper cannot provide.
const ZERO_VALUE_CAPABILITIES: &[&str] = &["Default"];

/// Capabilities whose implementation the generator owns.
const GENERATED_CAPABILITIES: &[&str] = &["Identifier"];

/// Check `spec` for an empty or invalid name, an unresolved raw value type and
/// conflicting capabilities.
pub(crate) fn validate(spec: &IdentifierSpec) -> syn::Result<()> {
    let mut diagnostics = Diagnostics::default();
    validate_name(spec, &mut diagnostics);
    validate_raw_value_type(&spec.raw_value_type, &mut diagnostics);
    validate_not_self_referential(spec, &mut diagnostics);
    validate_capabilities(&spec.extra_capabilities, &mut diagnostics);
    diagnostics.finish()
}

fn validate_name(spec: &IdentifierSpec, diagnostics: &mut Diagnostics) {
    if spec.name.text.trim().is_empty() {
        diagnostics.push(DiagnosticKind::MissingName, spec.name.span);
    } else if spec.name.to_ident().is_err() {
        diagnostics.push(
            DiagnosticKind::InvalidName {
                name: spec.name.text.clone(),
            },
            spec.name.span,
        );
    }
}

fn validate_raw_value_type(ty: &Type, diagnostics: &mut Diagnostics) {
    let detail = match ty {
        Type::Infer(_) => Some("`_` must be replaced by a concrete type"),
        Type::Never(_) => Some("`!` has no values to wrap"),
        Type::Tuple(tuple) if tuple.elems.is_empty() => {
            Some("`()` has a single value and cannot distinguish identifiers")
        }
        Type::Paren(paren) => {
            validate_raw_value_type(&paren.elem, diagnostics);
            None
        }
        Type::Group(group) => {
            validate_raw_value_type(&group.elem, diagnostics);
            None
        }
        _ => None,
    };
    if let Some(detail) = detail {
        diagnostics.push(
            DiagnosticKind::MissingRawType {
                detail: Some(detail.to_owned()),
            },
            ty.span(),
        );
    }
}

/// The raw value type may not name the identifier being declared.
fn validate_not_self_referential(spec: &IdentifierSpec, diagnostics: &mut Diagnostics) {
    let Type::Path(type_path) = &spec.raw_value_type else {
        return;
    };
    if type_path.qself.is_some() {
        return;
    }
    let Some(ident) = type_path.path.get_ident() else {
        return;
    };
    if ident == "Self" || *ident == spec.name.text {
        diagnostics.push(
            DiagnosticKind::MissingRawType {
                detail: Some(format!(
                    "`{ident}` names the identifier being declared, which cannot wrap itself"
                )),
            },
            ident.span(),
        );
    }
}

fn validate_capabilities(capabilities: &[Capability], diagnostics: &mut Diagnostics) {
    let mut seen = BTreeSet::new();
    for capability in capabilities {
        let name = capability.name();
        let qualified = capability.qualified_name();
        let reason = if ZERO_VALUE_CAPABILITIES.contains(&name.as_str()) {
            Some(ConflictReason::ZeroValue)
        } else if GENERATED_CAPABILITIES.contains(&name.as_str()) {
            Some(ConflictReason::GeneratedImpl)
        } else if seen.contains(&qualified) {
            Some(ConflictReason::Duplicate)
        } else {
            None
        };
        if let Some(reason) = reason {
            let capability_text = if reason == ConflictReason::Duplicate {
                qualified.clone()
            } else {
                name
            };
            diagnostics.push(
                DiagnosticKind::ConflictingCapability {
                    capability: capability_text,
                    reason,
                },
                capability.span(),
            );
        }
        seen.insert(qualified);
    }
}

#[cfg(test)]
mod tests {
    //! Validation rules for names, raw types and capabilities.

    use super::*;
    use crate::expand::spec::{Form, SpecName};
    use anyhow::{Result, anyhow, ensure};
    use proc_macro2::Span;
    use rstest::{fixture, rstest};
    use syn::{Path, Visibility, parse_quote};

    #[fixture]
    fn spec() -> IdentifierSpec {
        IdentifierSpec {
            name: SpecName {
                text: "ImageId".to_owned(),
                span: Span::call_site(),
            },
            raw_value_type: parse_quote!(Uuid),
            extra_capabilities: Vec::new(),
            visibility: Visibility::Inherited,
            attributes: Vec::new(),
            form: Form::Freestanding,
            crate_path: None,
        }
    }

    fn messages(spec: &IdentifierSpec) -> Result<Vec<String>> {
        let err = validate(spec)
            .err()
            .ok_or_else(|| anyhow!("expected validation to fail"))?;
        Ok(err.into_iter().map(|e| e.to_string()).collect())
    }

    fn with_capabilities(mut spec: IdentifierSpec, paths: Vec<Path>) -> IdentifierSpec {
        spec.extra_capabilities = paths.into_iter().map(Capability::new).collect();
        spec
    }

    #[rstest]
    fn accepts_well_formed_spec(spec: IdentifierSpec) {
        assert!(validate(&spec).is_ok());
    }

    #[rstest]
    fn accepts_distinct_marker_capabilities(spec: IdentifierSpec) {
        let marked = with_capabilities(
            spec,
            vec![parse_quote!(PartialOrd), parse_quote!(serde::Serialize)],
        );
        assert!(validate(&marked).is_ok());
    }

    #[rstest]
    fn same_trait_name_from_different_crates_is_distinct(spec: IdentifierSpec) {
        let marked = with_capabilities(
            spec,
            vec![parse_quote!(serde::Serialize), parse_quote!(other::Serialize)],
        );
        assert!(validate(&marked).is_ok());
    }

    #[rstest]
    #[case::own_name(parse_quote!(ImageId))]
    #[case::self_type(parse_quote!(Self))]
    fn raw_type_naming_the_identifier_is_rejected(
        mut spec: IdentifierSpec,
        #[case] ty: Type,
    ) -> Result<()> {
        spec.raw_value_type = ty;
        let found = messages(&spec)?;
        ensure!(
            found.iter().any(|m| m.contains("cannot wrap itself")),
            "unexpected messages {found:?}"
        );
        Ok(())
    }

    #[rstest]
    fn qualified_raw_type_sharing_the_name_is_accepted(mut spec: IdentifierSpec) {
        spec.raw_value_type = parse_quote!(images::ImageId);
        assert!(validate(&spec).is_ok());
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    fn empty_name_is_missing(mut spec: IdentifierSpec, #[case] text: &str) -> Result<()> {
        text.clone_into(&mut spec.name.text);
        let found = messages(&spec)?;
        ensure!(
            found.iter().any(|m| m.contains("identifier name missing")),
            "unexpected messages {found:?}"
        );
        Ok(())
    }

    #[rstest]
    #[case::digit("9Lives")]
    #[case::keyword("fn")]
    #[case::hyphen("image-id")]
    fn malformed_name_is_invalid(mut spec: IdentifierSpec, #[case] text: &str) -> Result<()> {
        text.clone_into(&mut spec.name.text);
        let found = messages(&spec)?;
        ensure!(
            found.iter().any(|m| m.contains("not a valid Rust identifier")),
            "unexpected messages {found:?}"
        );
        Ok(())
    }

    #[rstest]
    #[case::infer(parse_quote!(_))]
    #[case::never(parse_quote!(!))]
    #[case::unit(parse_quote!(()))]
    #[case::parenthesised_infer(parse_quote!((_)))]
    fn unresolved_raw_type_is_rejected(mut spec: IdentifierSpec, #[case] ty: Type) -> Result<()> {
        spec.raw_value_type = ty;
        let found = messages(&spec)?;
        ensure!(
            found
                .iter()
                .any(|m| m.contains("raw value type unresolved")),
            "unexpected messages {found:?}"
        );
        Ok(())
    }

    #[rstest]
    #[case::default(vec![parse_quote!(Default)], "`Default` conflicts")]
    #[case::qualified_default(vec![parse_quote!(core::default::Default)], "`Default` conflicts")]
    #[case::identifier(vec![parse_quote!(Identifier)], "generated by the macro")]
    #[case::duplicate(
        vec![parse_quote!(Hash), parse_quote!(Hash)],
        "`Hash` is requested more than once"
    )]
    #[case::qualified_duplicate(
        vec![parse_quote!(serde::Serialize), parse_quote!(serde::Serialize)],
        "`serde::Serialize` is requested more than once"
    )]
    fn conflicting_capabilities_are_rejected(
        spec: IdentifierSpec,
        #[case] paths: Vec<Path>,
        #[case] fragment: &str,
    ) -> Result<()> {
        let found = messages(&with_capabilities(spec, paths))?;
        ensure!(
            found.iter().any(|m| m.contains(fragment)),
            "expected `{fragment}` in {found:?}"
        );
        Ok(())
    }

    #[rstest]
    fn reports_every_problem_at_once(mut spec: IdentifierSpec) -> Result<()> {
        spec.name.text = String::new();
        spec.raw_value_type = parse_quote!(_);
        let conflicted = with_capabilities(spec, vec![parse_quote!(Default)]);
        let found = messages(&conflicted)?;
        ensure!(found.len() == 3, "expected three diagnostics, got {found:?}");
        Ok(())
    }
}
