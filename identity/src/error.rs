//! Error types produced by the identity runtime helpers.

use thiserror::Error;

/// Errors that can occur while building identifiers from external input.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdentityError {
    /// The input text is not a valid raw value for the identifier type.
    #[error("failed to parse `{input}` as {type_name}: {message}")]
    Parse {
        /// Name of the identifier type being parsed.
        type_name: &'static str,
        /// Text that failed to parse.
        input: String,
        /// Message reported by the raw value parser.
        message: String,
    },
}

/// Result alias for identity helpers.
pub type IdentityResult<T> = Result<T, IdentityError>;
