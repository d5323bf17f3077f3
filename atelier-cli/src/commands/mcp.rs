//! `atelier mcp` — MCP stdio adapter.
//!
//! JSON-RPC 2.0 over stdin/stdout, mapping named tools 1:1 onto store and
//! lifecycle operations. No business logic lives here: every tool body is a
//! single core call plus serialization.

use std::io::{BufRead, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use atelier_core::{lifecycle, store, types::ProjectState};

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 protocol types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ToolContent {
    r#type: &'static str,
    text: String,
}

#[derive(Debug, Serialize)]
struct ToolCallResult {
    content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    is_error: bool,
}

fn error_response(id: Option<Value>, code: i32, message: String) -> JsonRpcResponse {
    JsonRpcResponse { jsonrpc: "2.0", id, result: None, error: Some(JsonRpcError { code, message }) }
}

// ---------------------------------------------------------------------------
// Tool table
// ---------------------------------------------------------------------------

struct ToolDef {
    name: &'static str,
    description: &'static str,
    schema: fn() -> Value,
}

const TOOLS: &[ToolDef] = &[
    ToolDef {
        name: "list_projects",
        description: "List tracked projects, optionally filtered by state",
        schema: || {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "state": {"type": "string", "enum": ["active", "paused", "completed", "archived"]}
                }
            })
        },
    },
    ToolDef {
        name: "get_project",
        description: "Get one tracked project by name",
        schema: || {
            serde_json::json!({
                "type": "object",
                "properties": {"name": {"type": "string"}},
                "required": ["name"]
            })
        },
    },
    ToolDef {
        name: "set_project_state",
        description: "Transition a project to active, paused, completed, or archived",
        schema: || {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "state": {"type": "string", "enum": ["active", "paused", "completed", "archived"]}
                },
                "required": ["name", "state"]
            })
        },
    },
    ToolDef {
        name: "update_project_field",
        description: "Set a metadata field (category, description, visibility, repoUrl, nextSteps, docs)",
        schema: || {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "field": {"type": "string"},
                    "value": {"type": "string"}
                },
                "required": ["name", "field", "value"]
            })
        },
    },
    ToolDef {
        name: "project_stats",
        description: "Counts per lifecycle state and total recorded size",
        schema: || serde_json::json!({"type": "object", "properties": {}}),
    },
    ToolDef {
        name: "search_projects",
        description: "Substring search over name, description, and category",
        schema: || {
            serde_json::json!({
                "type": "object",
                "properties": {"query": {"type": "string"}},
                "required": ["query"]
            })
        },
    },
];

// ---------------------------------------------------------------------------
// Server loop
// ---------------------------------------------------------------------------

pub fn run() -> anyhow::Result<()> {
    let home = super::home()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let raw: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let resp = error_response(None, -32700, format!("parse error: {e}"));
                let mut out = stdout.lock();
                serde_json::to_writer(&mut out, &resp)?;
                writeln!(out)?;
                continue;
            }
        };

        // Notifications have no "id" key — do not respond
        if !raw.as_object().map(|o| o.contains_key("id")).unwrap_or(false) {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(r) => r,
            Err(e) => {
                let resp = error_response(None, -32600, format!("invalid request: {e}"));
                let mut out = stdout.lock();
                serde_json::to_writer(&mut out, &resp)?;
                writeln!(out)?;
                continue;
            }
        };

        let response = handle_request(&request, &home);
        let mut out = stdout.lock();
        serde_json::to_writer(&mut out, &response)?;
        writeln!(out)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Request dispatch (pub for unit tests)
// ---------------------------------------------------------------------------

pub fn handle_request(req: &JsonRpcRequest, home: &Path) -> JsonRpcResponse {
    match req.method.as_str() {
        "initialize" => JsonRpcResponse {
            jsonrpc: "2.0",
            id: req.id.clone(),
            result: Some(serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "atelier",
                    "version": env!("CARGO_PKG_VERSION")
                }
            })),
            error: None,
        },

        "tools/list" => {
            let tool_list: Vec<Value> = TOOLS
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "name": t.name,
                        "description": t.description,
                        "inputSchema": (t.schema)()
                    })
                })
                .collect();
            JsonRpcResponse {
                jsonrpc: "2.0",
                id: req.id.clone(),
                result: Some(serde_json::json!({ "tools": tool_list })),
                error: None,
            }
        }

        "tools/call" => {
            let params = match &req.params {
                Some(p) => p,
                None => {
                    return error_response(req.id.clone(), -32602, "missing params".to_string());
                }
            };

            let tool_name = match params["name"].as_str() {
                Some(n) => n,
                None => {
                    return error_response(
                        req.id.clone(),
                        -32602,
                        "missing tool name in params".to_string(),
                    );
                }
            };

            if !TOOLS.iter().any(|t| t.name == tool_name) {
                return error_response(
                    req.id.clone(),
                    -32601,
                    format!("tool not found: {tool_name}"),
                );
            }

            let args = params.get("arguments").cloned().unwrap_or(Value::Null);
            let (text, is_error) = match call_tool(tool_name, &args, home) {
                Ok(v) => (
                    serde_json::to_string_pretty(&v)
                        .unwrap_or_else(|e| format!("serialization error: {e}")),
                    false,
                ),
                Err(e) => (e, true),
            };

            let call_result = ToolCallResult {
                content: vec![ToolContent { r#type: "text", text }],
                is_error,
            };

            JsonRpcResponse {
                jsonrpc: "2.0",
                id: req.id.clone(),
                result: Some(
                    serde_json::to_value(&call_result)
                        .unwrap_or_else(|e| serde_json::json!({"error": e.to_string()})),
                ),
                error: None,
            }
        }

        other => error_response(req.id.clone(), -32601, format!("method not found: {other}")),
    }
}

// ---------------------------------------------------------------------------
// Tool bodies — one core call each
// ---------------------------------------------------------------------------

fn str_arg<'a>(args: &'a Value, key: &str) -> Result<&'a str, String> {
    args.get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing argument: {key}"))
}

fn call_tool(name: &str, args: &Value, home: &Path) -> Result<Value, String> {
    match name {
        "list_projects" => {
            let state = match args.get("state").and_then(|v| v.as_str()) {
                Some(s) => Some(s.parse::<ProjectState>()?),
                None => None,
            };
            let records = store::list_projects_at(home, state).map_err(|e| e.to_string())?;
            serde_json::to_value(records).map_err(|e| e.to_string())
        }

        "get_project" => {
            let record = store::get_project_at(home, str_arg(args, "name")?)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(record).map_err(|e| e.to_string())
        }

        "set_project_state" => {
            let state: ProjectState = str_arg(args, "state")?.parse()?;
            let record = lifecycle::transition_to_at(home, str_arg(args, "name")?, state)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(record).map_err(|e| e.to_string())
        }

        "update_project_field" => {
            let record = store::update_field_at(
                home,
                str_arg(args, "name")?,
                str_arg(args, "field")?,
                str_arg(args, "value")?,
            )
            .map_err(|e| e.to_string())?;
            serde_json::to_value(record).map_err(|e| e.to_string())
        }

        "project_stats" => {
            let stats = store::stats_at(home).map_err(|e| e.to_string())?;
            serde_json::to_value(stats).map_err(|e| e.to_string())
        }

        "search_projects" => {
            let records = store::search_projects_at(home, str_arg(args, "query")?)
                .map_err(|e| e.to_string())?;
            serde_json::to_value(records).map_err(|e| e.to_string())
        }

        other => Err(format!("tool not found: {other}")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
