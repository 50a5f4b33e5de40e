//! Deriving `Default` conflicts with building identifiers from raw values.

use identity::new_identifier;

new_identifier!(u64, "OrderId", derive(Default));

fn main() {}
