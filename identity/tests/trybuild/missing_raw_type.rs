//! `#[identifier]` without a raw value type.

use identity::identifier;

#[identifier]
struct OrderId;

fn main() {}
