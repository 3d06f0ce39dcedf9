//! MCP (Model Context Protocol) handling module
//!
//! This module implements the JSON-RPC 2.0 protocol for MCP communication
//! over line-delimited stdio.

use crate::tools::catalog::list_tools;
use crate::tools::Dispatcher;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader as AsyncBufReader};
use tracing::{debug, error, info};

pub const SERVER_NAME: &str = "reddit_mcp_server";

/// Protocol revision answered when the client does not request one
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

// JSON-RPC 2.0 error codes
const PARSE_ERROR: i64 = -32700;
const INVALID_REQUEST: i64 = -32600;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;
const INTERNAL_ERROR: i64 = -32603;

/// MCP JSON-RPC 2.0 request structure
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    /// JSON-RPC version field - required by the protocol but not accessed in code
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
    /// Set when the message carried no `id` member at all; `"id": null`
    /// is still a request
    #[serde(skip)]
    pub notification: bool,
}

impl McpRequest {
    /// Notifications get no response
    pub fn is_notification(&self) -> bool {
        self.notification
    }
}

/// Initialize request parameters
#[derive(Debug, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information
#[derive(Debug, Deserialize, Clone)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// MCP JSON-RPC 2.0 response structure
#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

/// MCP Error structure
#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i64,
    pub message: String,
}

/// MCP Tool call arguments
#[derive(Debug, Deserialize)]
pub struct ToolCallArgs {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// MCP Content item
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContentItem {
    pub r#type: String,
    pub text: String,
}

/// MCP Tool result
#[derive(Debug, Serialize)]
pub struct ToolResult {
    pub content: Vec<ContentItem>,
}

impl McpResponse {
    /// Create a successful response
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: Option<Value>, code: i64, message: &str) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(McpError {
                code,
                message: message.to_string(),
            }),
        }
    }
}

impl ToolResult {
    /// Create a result from explicit content items
    pub fn from_items(content: Vec<ContentItem>) -> Self {
        Self { content }
    }
}

impl ContentItem {
    /// Helper to create plain text content
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            r#type: "text".to_string(),
            text: content.into(),
        }
    }
}

/// Parse MCP request from JSON string
///
/// Malformed JSON yields a parse error with a null id. Well-formed JSON
/// that is not a request yields an invalid-request error echoing its id.
pub fn parse_request(json: &str) -> std::result::Result<McpRequest, McpResponse> {
    let raw: Value = serde_json::from_str(json)
        .map_err(|e| McpResponse::error(None, PARSE_ERROR, &format!("Invalid JSON: {}", e)))?;

    let id = raw.get("id").cloned();
    let notification = id.is_none();
    let mut request: McpRequest = serde_json::from_value(raw).map_err(|e| {
        McpResponse::error(id, INVALID_REQUEST, &format!("Invalid request: {}", e))
    })?;
    request.notification = notification;
    Ok(request)
}

/// Serialize MCP response to JSON string
pub fn serialize_response(response: &McpResponse) -> Result<String> {
    Ok(serde_json::to_string(response)?)
}

/// Handle stdio MCP communication
pub async fn handle_stdio(dispatcher: Dispatcher) -> Result<()> {
    info!("Starting {} on stdio", SERVER_NAME);

    let stdin = AsyncBufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve(stdin, stdout, &dispatcher).await
}

/// Run the session loop until the reader reaches end of stream
///
/// I/O failures on either stream end the session with an error.
pub async fn serve<R, W>(reader: R, mut writer: W, dispatcher: &Dispatcher) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        debug!("Received request: {}", line);

        let response = match parse_request(&line) {
            Ok(request) if request.is_notification() => {
                debug!("Notification {} acknowledged", request.method);
                continue;
            }
            Ok(request) => handle_request(request, dispatcher).await,
            Err(response) => {
                if let Some(err) = &response.error {
                    error!("Failed to parse request: {}", err.message);
                }
                response
            }
        };

        let response_json = serialize_response(&response)?;
        debug!("Sending response: {}", response_json);

        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    info!("Input stream closed, ending session");
    Ok(())
}

/// Handle a single MCP request
async fn handle_request(request: McpRequest, dispatcher: &Dispatcher) -> McpResponse {
    match request.method.as_str() {
        "initialize" => handle_initialize(request),
        "ping" => McpResponse::success(request.id, serde_json::json!({})),
        "tools/call" => handle_tool_call(request, dispatcher).await,
        "tools/list" => handle_tools_list(request),
        _ => McpResponse::error(
            request.id,
            METHOD_NOT_FOUND,
            &format!("Method '{}' not found", request.method),
        ),
    }
}

/// Handle tools/call method
async fn handle_tool_call(request: McpRequest, dispatcher: &Dispatcher) -> McpResponse {
    let args: ToolCallArgs = match serde_json::from_value(request.params.unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            return McpResponse::error(
                request.id,
                INVALID_PARAMS,
                &format!("Invalid parameters: {}", e),
            )
        }
    };

    let content = dispatcher.dispatch(&args.name, args.arguments).await;
    match serde_json::to_value(ToolResult::from_items(content)) {
        Ok(result) => McpResponse::success(request.id, result),
        Err(e) => internal_error(request.id, e),
    }
}

/// Server-side failure unrelated to the caller's input
fn internal_error(id: Option<Value>, err: impl std::fmt::Display) -> McpResponse {
    error!("Internal error: {}", err);
    McpResponse::error(id, INTERNAL_ERROR, &format!("Internal error: {}", err))
}

/// Handle tools/list method
fn handle_tools_list(request: McpRequest) -> McpResponse {
    McpResponse::success(request.id, serde_json::json!({ "tools": list_tools() }))
}

/// Handle initialize method
fn handle_initialize(request: McpRequest) -> McpResponse {
    let params = request
        .params
        .and_then(|params| serde_json::from_value::<InitializeParams>(params).ok());

    if let Some(client) = params.as_ref().and_then(|p| p.client_info.as_ref()) {
        info!(
            "Client connected: {} {}",
            client.name.as_deref().unwrap_or("Unknown Client"),
            client.version.as_deref().unwrap_or("")
        );
    }

    let protocol_version = params
        .and_then(|p| p.protocol_version)
        .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string());

    let result = serde_json::json!({
        "protocolVersion": protocol_version,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "capabilities": {
            "tools": {}
        }
    });
    McpResponse::success(request.id, result)
}
