//! Serialisation of generated identifiers.
#![cfg(all(feature = "serde", feature = "uuid"))]

use anyhow::{Result, ensure};
use identity::uuid::Uuid;
use identity::{identifier, new_identifier};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use serde_json::json;

new_identifier!(u64, "OrderId", derive(Serialize, Deserialize));

#[identifier(Uuid)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct CustomerId;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Invoice {
    #[serde(with = "identity::serde_raw")]
    order: OrderId,
    customer: CustomerId,
}

#[rstest]
fn derived_serde_keeps_the_field_name() -> Result<()> {
    let value = serde_json::to_value(OrderId::new(7))?;
    ensure!(value == json!({ "raw_value": 7 }), "unexpected json {value}");
    Ok(())
}

#[rstest]
fn transparent_and_raw_helpers_emit_bare_values() -> Result<()> {
    let customer = Uuid::new_v4();
    let invoice = Invoice {
        order: OrderId::new(11),
        customer: CustomerId::new(customer),
    };
    let value = serde_json::to_value(&invoice)?;
    ensure!(
        value == json!({ "order": 11, "customer": customer.to_string() }),
        "unexpected json {value}"
    );
    let restored: Invoice = serde_json::from_value(value)?;
    ensure!(restored == invoice, "round trip changed the invoice");
    Ok(())
}
