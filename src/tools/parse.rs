use super::{decimals_arg, Tool, ToolContext};
use crate::amount::{self, AmountError};
use anyhow::Result;
use serde_json::{json, Value};
use tracing::debug;

pub struct ParseAmountTool;

#[async_trait::async_trait]
impl Tool for ParseAmountTool {
    fn name(&self) -> &'static str {
        "parse_amount"
    }

    fn description(&self) -> &'static str {
        "Convert a human-readable token amount (e.g. \"2.01\", \"1,000.50\", \"1e-6\") into exact base units (wei, satoshis). Never rounds: amounts finer than the token allows are rejected."
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "amount": {
                    "type": "string",
                    "description": "Decimal amount. Grouping commas and scientific notation are accepted."
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
            "required": ["amount"]
        })
    }

    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value> {
        let decimals = decimals_arg(ctx, &args)?;
        let amount_str = args
            .get("amount")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AmountError::invalid_format("amount must be a string"))?;

        let base_units = amount::parse_amount_to_base_units(amount_str, decimals)?;
        debug!(amount = amount_str, decimals, %base_units, "parsed amount");

        Ok(json!({
            "amount": amount_str,
            "base_units": base_units.to_string(),
            "decimals": decimals,
            "uint256": amount::to_u256(&base_units).map(|word| format!("0x{:x}", word)),
        }))
    }
}
