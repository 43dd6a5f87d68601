//! MCP server implementation.

use super::protocol::*;
use super::tools::{get_tools, ANALYZE_SENTIMENT, GET_VIDEO_COMMENTS, GET_VIDEO_ID};
use crate::analyzer::{CommentAnalyzer, SentimentReport};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "youtube_sentiment_analyzer";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP server exposing the comment-analysis tools.
///
/// Calls are handled one at a time, in arrival order.
pub struct McpServer {
    analyzer: CommentAnalyzer,
}

impl McpServer {
    /// Create a new MCP server.
    pub fn new(analyzer: CommentAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Run the MCP server (reads from stdin, writes to stdout).
    pub async fn run(&self) -> anyhow::Result<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve newline-delimited JSON-RPC until the reader is exhausted.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        // Logs go to stderr so they don't interfere with JSON-RPC
        info!("MCP server starting, waiting for client on stdio");

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(line).await {
                let mut out = serde_json::to_string(&response)?;
                out.push('\n');
                writer.write_all(out.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        info!("Input closed, MCP server stopping");
        Ok(())
    }

    /// Handle one raw line. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!("Failed to parse request: {}", e);
                Some(JsonRpcResponse::error(None, PARSE_ERROR, "Parse error"))
            }
        }
    }

    /// Handle a single JSON-RPC request.
    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!("Notification: {}", request.method);
            return None;
        }

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                request.id,
                INVALID_REQUEST,
                &format!("Unsupported jsonrpc version: {}", request.jsonrpc),
            ));
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id, request.params),
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            _ => JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                &format!("Method not found: {}", request.method),
            ),
        };
        Some(response)
    }

    /// Handle initialize request.
    fn handle_initialize(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        if let Some(params) = params.and_then(|p| serde_json::from_value::<InitializeParams>(p).ok()) {
            let client = params
                .client_info
                .map(|c| format!("{} {}", c.name, c.version.unwrap_or_default()))
                .unwrap_or_else(|| "unknown client".to_string());
            info!(
                "Initialize from {} (protocol {})",
                client.trim(),
                params.protocol_version.as_deref().unwrap_or("unspecified")
            );
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability { list_changed: false },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        };

        JsonRpcResponse::success(id, json!(result))
    }

    /// Handle tools/list request.
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = ToolsListResult { tools: get_tools() };
        JsonRpcResponse::success(id, json!(result))
    }

    /// Handle tools/call request.
    async fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: ToolCallParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(id, INVALID_PARAMS, &format!("Invalid params: {}", e))
                }
            },
            None => return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing params"),
        };

        info!("Tool call: {}", params.name);
        let result = match params.name.as_str() {
            GET_VIDEO_ID => self.tool_get_video_id(params.arguments),
            GET_VIDEO_COMMENTS => self.tool_get_video_comments(params.arguments).await,
            ANALYZE_SENTIMENT => self.tool_analyze_sentiment(params.arguments).await,
            _ => ToolCallResult::error(format!("Unknown tool: {}", params.name)),
        };

        JsonRpcResponse::success(id, json!(result))
    }

    /// Video ID tool.
    fn tool_get_video_id(&self, args: Option<Value>) -> ToolCallResult {
        let url = match string_arg(&args, "url") {
            Ok(u) => u,
            Err(e) => return e,
        };

        match self.analyzer.video_id(url) {
            Ok(video_id) => ToolCallResult::text(video_id),
            Err(e) => ToolCallResult::error(e.to_string()),
        }
    }

    /// Comments tool. Failures come back as a one-element list holding the message.
    async fn tool_get_video_comments(&self, args: Option<Value>) -> ToolCallResult {
        let video_id = match string_arg(&args, "video_id") {
            Ok(v) => v,
            Err(e) => return e,
        };

        match self.analyzer.comments(video_id).await {
            Ok(comments) => ToolCallResult::text(json!(comments).to_string()),
            Err(e) => ToolCallResult::error(json!([e.to_string()]).to_string()),
        }
    }

    /// Sentiment tool.
    async fn tool_analyze_sentiment(&self, args: Option<Value>) -> ToolCallResult {
        let video_url = match string_arg(&args, "video_url") {
            Ok(u) => u,
            Err(e) => return e,
        };

        let report: SentimentReport = self.analyzer.analyze(video_url).await.into();
        let text = json!(report).to_string();
        if report.is_error() {
            ToolCallResult::error(text)
        } else {
            ToolCallResult::text(text)
        }
    }
}

/// Read a required string argument, or the tool error to return instead.
fn string_arg<'a>(args: &'a Option<Value>, name: &str) -> Result<&'a str, ToolCallResult> {
    let args = args
        .as_ref()
        .ok_or_else(|| ToolCallResult::error("Missing arguments".to_string()))?;

    args.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ToolCallResult::error(format!("Missing '{}' argument", name)))
}
