//! `#[identifier]` on a struct that already has fields.

use identity::identifier;

#[identifier(u64)]
struct OrderId {
    value: u64,
}

fn main() {}
