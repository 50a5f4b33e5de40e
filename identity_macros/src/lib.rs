//! Procedural macros for `identity`.
//!
//! Two entry points generate the same artefact, a single field newtype that
//! implements `identity::Identifier`:
//!
//! - [`new_identifier!`](macro@new_identifier) declares a brand new type from
//!   a raw value type and a name.
//! - [`#[identifier]`](macro@identifier) augments an existing struct in place,
//!   keeping its visibility, attributes and derives.
//!
//! Both front-ends build the same intermediate description, which is
//! validated and then handed to a shared emitter.

use proc_macro::TokenStream;

mod expand;

/// Declares a new identifier type wrapping a raw value.
///
/// ```rust,ignore
/// use identity::{Identifier, new_identifier};
/// use uuid::Uuid;
///
/// new_identifier!(pub Uuid, "ImageId");
///
/// let id = ImageId::unique();
/// let raw: Uuid = id.clone().into_raw_value();
/// assert_eq!(ImageId::new(raw), id);
/// ```
///
/// The full input grammar is
/// `<vis>? <RawType>, "<Name>" [, derive(<Trait>, ...)] [, crate = "<path>"]`.
#[proc_macro]
pub fn new_identifier(input: TokenStream) -> TokenStream {
    expand::freestanding(input.into()).into()
}

/// Turns an existing unit or empty struct into an identifier type.
///
/// ```rust,ignore
/// use identity::identifier;
/// use uuid::Uuid;
///
/// #[identifier(Uuid)]
/// #[derive(PartialOrd, Ord)]
/// pub struct ImageId;
/// ```
///
/// Place the attribute above any `#[derive]` so the derives observe the
/// synthesized `raw_value` field.
#[proc_macro_attribute]
pub fn identifier(args: TokenStream, item: TokenStream) -> TokenStream {
    expand::attached(args.into(), item.into()).into()
}
