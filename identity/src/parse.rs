//! Parsing identifiers from text.

use std::fmt::Display;
use std::str::FromStr;

use crate::{IdentityError, IdentityResult, Identifier};

/// Parse `input` as the raw value of `I` and wrap it.
///
/// # Errors
///
/// Returns [`IdentityError::Parse`] when the raw value type rejects `input`.
///
/// # Examples
///
/// ```rust
/// use identity::{Identifier, new_identifier, parse_identifier};
///
/// new_identifier!(u64, "OrderId");
///
/// let order: OrderId = parse_identifier("42")?;
/// assert_eq!(order.into_raw_value(), 42);
/// assert!(parse_identifier::<OrderId>("forty-two").is_err());
/// # Ok::<(), identity::IdentityError>(())
/// ```
pub fn parse_identifier<I>(input: &str) -> IdentityResult<I>
where
    I: Identifier,
    I::RawValue: FromStr,
    <I::RawValue as FromStr>::Err: Display,
{
    input
        .parse::<I::RawValue>()
        .map(I::from_raw_value)
        .map_err(|err| {
            let type_name = std::any::type_name::<I>();
            tracing::debug!(identifier = type_name, input, error = %err, "identifier parse failed");
            IdentityError::Parse {
                type_name,
                input: input.to_owned(),
                message: err.to_string(),
            }
        })
}

#[cfg(test)]
mod tests {
    //! Parsing success and failure paths.

    use super::*;
    use crate::new_identifier;
    use anyhow::{Result, anyhow, ensure};
    use rstest::rstest;

    new_identifier!(u16, "Port");

    #[rstest]
    #[case("0", 0)]
    #[case("8080", 8080)]
    fn parses_valid_raw_values(#[case] input: &str, #[case] expected: u16) -> Result<()> {
        let port: Port = parse_identifier(input).map_err(|e| anyhow!(e))?;
        ensure!(port == Port::new(expected), "unexpected port {port:?}");
        Ok(())
    }

    #[rstest]
    #[case::negative("-1")]
    #[case::overflow("70000")]
    #[case::text("http")]
    fn reports_invalid_raw_values(#[case] input: &str) -> Result<()> {
        let err = parse_identifier::<Port>(input)
            .err()
            .ok_or_else(|| anyhow!("expected failure for {input}"))?;
        let IdentityError::Parse {
            type_name,
            input: rejected,
            ..
        } = &err;
        ensure!(rejected == input, "input should be kept");
        ensure!(type_name.ends_with("Port"), "type name should name Port");
        ensure!(
            err.to_string().starts_with(&format!("failed to parse `{input}`")),
            "unexpected message {err}"
        );
        Ok(())
    }
}
