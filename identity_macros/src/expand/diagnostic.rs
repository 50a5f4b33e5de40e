//! Diagnostics reported while expanding identifier macros.
//!
//! Every problem is tied to the span it was found at in the macro input.
//! Spans are carried through from parsing and never recomputed, so the
//! compiler points at the exact token that caused the failure.

use std::fmt;

use proc_macro2::Span;

/// What went wrong during expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DiagnosticKind {
    /// The freestanding form has no name string, or the string is empty.
    MissingName,
    /// No raw value type was supplied, or the type cannot back an identifier.
    MissingRawType {
        /// Extra context when a type was present but unusable.
        detail: Option<String>,
    },
    /// A requested capability cannot coexist with the `Identifier` impl.
    ConflictingCapability {
        /// Capability as written by the caller.
        capability: String,
        /// Why the capability was rejected.
        reason: ConflictReason,
    },
    /// The name string is not a valid Rust identifier.
    InvalidName {
        /// Name as written by the caller.
        name: String,
    },
    /// The attached form was applied to a declaration it cannot augment.
    UnsupportedDeclaration {
        /// Description of the offending shape.
        detail: &'static str,
    },
}

/// Reasons a capability conflicts with a single raw value wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConflictReason {
    /// Identifiers are created from raw values, never from a zero value.
    ZeroValue,
    /// The generator already implements the trait.
    GeneratedImpl,
    /// The capability appears more than once.
    Duplicate,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => f.write_str(
                "identifier name missing: expected a non-empty string such as `\"ImageId\"`",
            ),
            Self::MissingRawType { detail: None } => f.write_str(
                "identifier raw value type missing: expected a type such as `Uuid` or `u64`",
            ),
            Self::MissingRawType {
                detail: Some(detail),
            } => write!(f, "identifier raw value type unresolved: {detail}"),
            Self::ConflictingCapability { capability, reason } => match reason {
                ConflictReason::ZeroValue => write!(
                    f,
                    "`{capability}` conflicts with `Identifier`: identifiers are built from \
                     a raw value or `Identifier::unique`, not a default value"
                ),
                ConflictReason::GeneratedImpl => write!(
                    f,
                    "`{capability}` conflicts with `Identifier`: the implementation is \
                     generated by the macro"
                ),
                ConflictReason::Duplicate => {
                    write!(f, "`{capability}` is requested more than once")
                }
            },
            Self::InvalidName { name } => {
                write!(f, "`{name}` is not a valid Rust identifier")
            }
            Self::UnsupportedDeclaration { detail } => {
                write!(f, "#[identifier] cannot be applied here: {detail}")
            }
        }
    }
}

/// A single diagnostic bound to its source span.
#[derive(Debug, Clone)]
pub(crate) struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
}

impl Diagnostic {
    pub(crate) const fn new(kind: DiagnosticKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl From<Diagnostic> for syn::Error {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(diagnostic.span, diagnostic.kind)
    }
}

/// Collects diagnostics so a single expansion can report every problem.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics(Vec<syn::Error>);

impl Diagnostics {
    pub(crate) fn push(&mut self, kind: DiagnosticKind, span: Span) {
        self.0.push(Diagnostic::new(kind, span).into());
    }

    /// Record the error of `result`, if any, and pass its value through.
    pub(crate) fn check<T, E>(&mut self, result: Result<T, E>) -> Option<T>
    where
        E: Into<syn::Error>,
    {
        result.map_err(|err| self.0.push(err.into())).ok()
    }

    /// Finish collecting and hand back `value` when nothing went wrong.
    ///
    /// A missing `value` without any recorded diagnostic is reported against
    /// the macro call site.
    pub(crate) fn conclude<T>(self, value: Option<T>) -> syn::Result<T> {
        self.finish()?;
        value.ok_or_else(|| {
            syn::Error::new(Span::call_site(), "incomplete identifier declaration")
        })
    }

    /// Combine the collected diagnostics into one `syn::Error`.
    ///
    /// Returns `Ok(())` when nothing was recorded.
    pub(crate) fn finish(self) -> syn::Result<()> {
        self.0
            .into_iter()
            .reduce(|mut combined, error| {
                combined.combine(error);
                combined
            })
            .map_or(Ok(()), Err)
    }
}
