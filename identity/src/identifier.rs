//! The `Identifier` trait implemented by every generated identifier type.

use std::fmt::Debug;
use std::hash::Hash;

use crate::UniqueRawValue;

/// A type that wraps exactly one raw value and takes its identity from it.
///
/// Equality and hashing delegate to the raw value, so two identifiers of the
/// same type are equal exactly when their raw values are. Implementations
/// are normally generated with [`new_identifier!`](crate::new_identifier) or
/// [`#[identifier]`](macro@crate::identifier) rather than written by hand.
pub trait Identifier: Sized + Clone + Eq + Hash + Debug {
    /// The wrapped value type.
    type RawValue: Clone + Eq + Hash + Debug;

    /// Wrap `raw_value`.
    fn from_raw_value(raw_value: Self::RawValue) -> Self;

    /// Borrow the wrapped value.
    fn raw_value(&self) -> &Self::RawValue;

    /// Unwrap into the raw value.
    fn into_raw_value(self) -> Self::RawValue;

    /// Create an identifier from a freshly generated raw value.
    ///
    /// UUID-backed identifiers are random. Integer-backed identifiers draw
    /// from a process-wide counter per integer type that starts at 1 and
    /// cycles back to 1 after the type's `MAX`, so values repeat once the
    /// range is exhausted (after 127 calls for `i8`). See
    /// [`UniqueRawValue`] for details.
    ///
    /// ```rust
    /// use identity::{Identifier, new_identifier};
    ///
    /// new_identifier!(u32, "TicketId");
    ///
    /// assert_ne!(TicketId::unique(), TicketId::unique());
    /// ```
    #[must_use]
    fn unique() -> Self
    where
        Self::RawValue: UniqueRawValue,
    {
        Self::from_raw_value(<Self::RawValue as UniqueRawValue>::unique())
    }
}
