//! A freestanding identifier declared inside a function body.

use identity::{Identifier, new_identifier};
use identity::uuid::Uuid;

fn main() {
    new_identifier!(Uuid, "TestID");

    struct TestStruct {
        id: TestID,
    }

    let value = TestStruct {
        id: TestID::unique(),
    };
    let _: Uuid = value.id.into_raw_value();
}
