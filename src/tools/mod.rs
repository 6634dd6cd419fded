pub mod format;
pub mod parse;
pub mod tokens;

use crate::amount::{AmountError, MAX_DECIMALS};
use crate::tokens::TokenRegistry;
use serde_json::Value;
use std::collections::HashMap;

/// Shared, read-only state handed to every tool call.
#[derive(Clone, Debug, Default)]
pub struct ToolContext {
    pub tokens: TokenRegistry,
}

#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn schema(&self) -> Value;
    async fn call(&self, ctx: &ToolContext, args: Value) -> anyhow::Result<Value>;
}

pub fn default_tools() -> HashMap<String, Box<dyn Tool>> {
    let tools: Vec<Box<dyn Tool>> = vec![
        Box::new(parse::ParseAmountTool),
        Box::new(format::FormatAmountTool),
        Box::new(tokens::ListTokensTool),
    ];
    tools
        .into_iter()
        .map(|tool| (tool.name().to_string(), tool))
        .collect()
}

/// Resolves decimals from an explicit `decimals` argument, falling back to a
/// registry lookup of `token_symbol`.
pub(crate) fn decimals_arg(ctx: &ToolContext, args: &Value) -> anyhow::Result<u32> {
    if let Some(raw) = args.get("decimals").filter(|v| !v.is_null()) {
        return Ok(decimals_from_value(raw)?);
    }

    let symbol = args
        .get("token_symbol")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow::anyhow!("Missing decimals or token_symbol"))?;

    ctx.tokens.decimals(symbol).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown token symbol {}. Please provide decimals.",
            symbol
        )
    })
}

/// Only JSON non-negative integers up to [`MAX_DECIMALS`] are accepted;
/// strings, fractions and negative numbers are rejected.
pub(crate) fn decimals_from_value(raw: &Value) -> Result<u32, AmountError> {
    raw.as_u64()
        .and_then(|d| u32::try_from(d).ok())
        .filter(|d| *d <= MAX_DECIMALS)
        .ok_or_else(|| AmountError::InvalidDecimals {
            got: raw.to_string(),
            max: MAX_DECIMALS,
        })
}
