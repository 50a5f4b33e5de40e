//! Fixture verifying `crate = "..."` with a dependency alias introduced by
//! `use ... as`.

use identity as ids;
use ids::{Identifier, identifier, new_identifier};

new_identifier!(u32, "Ticket", crate = "ids");

#[identifier(u64, crate = "ids")]
struct Seat;

fn main() {
    let _: u32 = Ticket::unique().into_raw_value();
    let _: u64 = Seat::unique().into_raw_value();
}
