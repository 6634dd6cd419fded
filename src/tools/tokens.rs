use super::{Tool, ToolContext};
use anyhow::Result;
use serde_json::{json, Value};

pub struct ListTokensTool;

#[async_trait::async_trait]
impl Tool for ListTokensTool {
    fn name(&self) -> &'static str {
        "list_tokens"
    }

    fn description(&self) -> &'static str {
        "List the token symbols whose decimals are known, for use as token_symbol."
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn call(&self, ctx: &ToolContext, _args: Value) -> Result<Value> {
        let tokens: Vec<Value> = ctx
            .tokens
            .iter()
            .map(|(symbol, decimals)| json!({ "symbol": symbol, "decimals": decimals }))
            .collect();

        Ok(json!({ "tokens": tokens }))
    }
}
