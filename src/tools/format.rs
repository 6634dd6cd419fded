use super::{decimals_arg, Tool, ToolContext};
use crate::amount::{self, AmountError};
use anyhow::Result;
use num_bigint::{BigInt, BigUint};
use serde_json::{json, Value};
use tracing::debug;

pub struct FormatAmountTool;

#[async_trait::async_trait]
impl Tool for FormatAmountTool {
    fn name(&self) -> &'static str {
        "format_amount"
    }

    fn description(&self) -> &'static str {
        "Convert an integer amount of base units into a human-readable decimal string for a token."
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "base_units": {
                    "type": ["string", "integer"],
                    "description": "Non-negative integer amount in base units, as decimal digits or 0x-prefixed hex. JSON integers are limited to 64 bits; send larger values as a string."
                },
                "decimals": {
                    "type": "integer",
                    "minimum": 0,
                    "maximum": amount::MAX_DECIMALS,
                    "description": "Token decimal places. Takes precedence over token_symbol."
                },
                "token_symbol": {
                    "type": "string",
                    "description": "Known token symbol (e.g. ETH, USDC) used to look up decimals."
                }
            },
            "required": ["base_units"]
        })
    }

    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let decimals = decimals_arg(ctx, &args)?;
        let base_units = base_units_from_value(args.get("base_units").unwrap_or(&Value::Null))?;

        let formatted = amount::format_base_units_to_amount(&base_units, decimals)?;
        debug!(%base_units, decimals, amount = %formatted, "formatted base units");

        Ok(json!({
            "amount": formatted,
            "base_units": base_units.to_string(),
            "decimals": decimals,
        }))
    }
}

/// Reads base units from a JSON integer or a decimal / `0x` hex string.
/// Negative values are returned as-is so the formatter reports them.
fn base_units_from_value(raw: &Value) -> Result<BigInt, AmountError> {
    match raw {
        Value::String(s) => parse_integer_text(s.trim()),
        Value::Number(n) => n
            .as_u64()
            .map(BigInt::from)
            .or_else(|| n.as_i64().map(BigInt::from))
            .ok_or_else(|| {
                AmountError::invalid_format(format!(
                    "base units {} are not a 64-bit JSON integer; send larger integers as a decimal string",
                    n
                ))
            }),
        other => Err(AmountError::invalid_format(format!(
            "base units must be an integer or string, got {}",
            other
        ))),
    }
}

fn parse_integer_text(text: &str) -> Result<BigInt, AmountError> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AmountError::invalid_format(format!(
                "'{}' is not a hex integer",
                text
            )));
        }
        let magnitude = BigUint::parse_bytes(hex.as_bytes(), 16)
            .ok_or_else(|| AmountError::invalid_format(format!("'{}' is not a hex integer", text)))?;
        return Ok(BigInt::from(magnitude));
    }

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::invalid_format(format!(
            "'{}' is not a decimal integer",
            text
        )));
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| AmountError::invalid_format(format!("'{}' is not a decimal integer", text)))?;
    let value = BigInt::from(magnitude);
    Ok(if negative { -value } else { value })
}
