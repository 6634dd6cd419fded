use crate::amount::AmountError;
use crate::tools::{Tool, ToolContext};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, warn};

pub const PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Option<Value>,
    pub id: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    fn ok(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            result: Some(result),
            error: None,
            id,
        }
    }

    fn err(id: Option<Value>, code: i32, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data,
            }),
            id,
        }
    }
}

pub async fn run(ctx: ToolContext, tools: HashMap<String, Box<dyn Tool>>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    info!(tools = tools.len(), "MCP Server Ready. Waiting for JSON-RPC requests on stdin...");

    serve(stdin.lock(), stdout.lock(), &ctx, &tools).await
}

/// Answers line-delimited JSON-RPC requests from `input` until EOF or a read
/// error, writing one response line per request to `output`.
pub async fn serve<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    ctx: &ToolContext,
    tools: &HashMap<String, Box<dyn Tool>>,
) -> Result<()> {
    let mut lines = input.lines();

    loop {
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                error!("Failed to read from stdin, shutting down: {}", e);
                return Ok(());
            }
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        debug!("Received request: {}", line);

        let req: JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                let response = JsonRpcResponse::err(None, -32700, format!("Parse error: {}", e), None);
                writeln!(output, "{}", serde_json::to_string(&response)?)?;
                output.flush()?;
                continue;
            }
        };

        // Notifications carry no id and expect no reply.
        if req.id.is_none() {
            debug!(method = %req.method, "Ignoring notification");
            continue;
        }

        let response = handle_request(&req, ctx, tools).await;

        let response_str = serde_json::to_string(&response)?;
        writeln!(output, "{}", response_str)?;
        output.flush()?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}

pub async fn handle_request(
    req: &JsonRpcRequest,
    ctx: &ToolContext,
    tools: &HashMap<String, Box<dyn Tool>>,
) -> JsonRpcResponse {
    match req.method.as_str() {
        "initialize" => JsonRpcResponse::ok(
            req.id.clone(),
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),
        "tools/list" => {
            let mut tool_list: Vec<Value> = tools
                .values()
                .map(|t| {
                    json!({
                        "name": t.name(),
                        "description": t.description(),
                        "inputSchema": t.schema()
                    })
                })
                .collect();
            tool_list.sort_by(|a, b| a["name"].as_str().cmp(&b["name"].as_str()));

            JsonRpcResponse::ok(req.id.clone(), json!({ "tools": tool_list }))
        }
        "tools/call" => {
            let Some(params) = &req.params else {
                return JsonRpcResponse::err(req.id.clone(), -32602, "Missing params", None);
            };
            let Some(tool_name) = params.get("name").and_then(|v| v.as_str()) else {
                return JsonRpcResponse::err(req.id.clone(), -32602, "Missing 'name' parameter", None);
            };
            let Some(tool) = tools.get(tool_name) else {
                return JsonRpcResponse::err(
                    req.id.clone(),
                    -32601,
                    format!("Tool not found: {}", tool_name),
                    None,
                );
            };
            let args = params.get("arguments").cloned().unwrap_or(json!({}));

            match tool.call(ctx, args).await {
                Ok(result) => JsonRpcResponse::ok(
                    req.id.clone(),
                    // Standard MCP 'content' for compatibility, plus 'data' for agents.
                    json!({
                        "content": [{
                            "type": "text",
                            "text": serde_json::to_string_pretty(&result).unwrap_or_else(|_| result.to_string())
                        }],
                        "data": result
                    }),
                ),
                Err(e) => match e.downcast_ref::<AmountError>() {
                    Some(amount_err) => {
                        warn!(tool = tool_name, code = %amount_err.code(), "Rejected amount: {}", amount_err);
                        JsonRpcResponse::err(
                            req.id.clone(),
                            -32602,
                            amount_err.to_string(),
                            Some(json!({ "code": amount_err.code() })),
                        )
                    }
                    None => {
                        error!(tool = tool_name, "Tool execution failed: {:#}", e);
                        JsonRpcResponse::err(
                            req.id.clone(),
                            -32603,
                            format!("Tool execution failed: {}", e),
                            None,
                        )
                    }
                },
            }
        }
        _ => JsonRpcResponse::err(req.id.clone(), -32601, "Method not found", None),
    }
}
