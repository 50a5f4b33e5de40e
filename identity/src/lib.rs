//! Strongly typed identifiers for Rust.
//!
//! This crate defines the [`Identifier`] trait and its runtime helpers. The
//! code generation lives in the companion `identity_macros` crate and is
//! re-exported here:
//!
//! - [`new_identifier!`] declares a new identifier type.
//! - [`macro@identifier`] turns an existing unit struct into one.
//!
//! ```rust
//! use identity::{Identifier, identifier, new_identifier};
//!
//! new_identifier!(pub u64, "OrderId");
//!
//! #[identifier(u64)]
//! #[derive(PartialOrd, Ord)]
//! pub struct CustomerId;
//!
//! let first = OrderId::unique();
//! let second = OrderId::unique();
//! assert_ne!(first, second);
//!
//! let customer = CustomerId::new(7);
//! assert_eq!(customer.raw_value(), &7);
//! assert!(CustomerId::new(1) < customer);
//! ```

extern crate self as identity;

pub use identity_macros::{identifier, new_identifier};

mod error;
mod identifier;
mod parse;
#[cfg(feature = "serde")]
pub mod serde_raw;
mod unique;

pub use error::{IdentityError, IdentityResult};
pub use identifier::Identifier;
pub use parse::parse_identifier;
pub use unique::UniqueRawValue;

#[cfg(feature = "uuid")]
pub use uuid;
