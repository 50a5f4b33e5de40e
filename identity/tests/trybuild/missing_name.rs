//! `new_identifier!` without a name string.

use identity::new_identifier;

new_identifier!(u64);

fn main() {}
