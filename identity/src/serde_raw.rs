//! Serialise identifiers as their bare raw value.
//!
//! Use with `#[serde(with = "identity::serde_raw")]` on a field whose type
//! implements [`Identifier`].
//!
//! ```rust
//! use identity::new_identifier;
//! use serde::{Deserialize, Serialize};
//!
//! new_identifier!(u64, "OrderId");
//!
//! #[derive(Serialize, Deserialize)]
//! struct Order {
//!     #[serde(with = "identity::serde_raw")]
//!     id: OrderId,
//! }
//!
//! let json = serde_json::to_string(&Order { id: OrderId::new(3) })?;
//! assert_eq!(json, r#"{"id":3}"#);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Identifier;

/// Serialise `identifier` as its raw value.
///
/// # Errors
///
/// Propagates any error reported by the serializer.
pub fn serialize<I, S>(identifier: &I, serializer: S) -> Result<S::Ok, S::Error>
where
    I: Identifier,
    I::RawValue: Serialize,
    S: Serializer,
{
    identifier.raw_value().serialize(serializer)
}

/// Deserialise a raw value and wrap it in `I`.
///
/// # Errors
///
/// Propagates any error reported by the deserializer.
pub fn deserialize<'de, I, D>(deserializer: D) -> Result<I, D::Error>
where
    I: Identifier,
    I::RawValue: Deserialize<'de>,
    D: Deserializer<'de>,
{
    <I::RawValue as Deserialize<'de>>::deserialize(deserializer).map(I::from_raw_value)
}
