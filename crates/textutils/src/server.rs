//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes text statistics and transforms over the MCP protocol via stdio
//! transport. Each `#[tool]` method delegates to `textutils-core`; no text
//! logic lives here.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use textutils_core::stats::DEFAULT_WORDS_PER_MINUTE;
use textutils_core::{TextMetrics, Transform};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `text_stats` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextStatsParams {
    /// The text to analyze.
    pub text: String,
    /// Reading speed in words per minute (defaults to the server setting).
    pub words_per_minute: Option<u32>,
}

/// Parameters for the `transform_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TransformTextParams {
    /// The text to transform.
    pub text: String,
    /// Transforms to apply in order: upper, lower, capitalize, title,
    /// collapse-spaces, reverse, remove-numbers, remove-special, clear.
    pub transforms: Vec<String>,
}

/// MCP server exposing text statistics and transforms.
#[derive(Clone)]
pub struct TextUtilsServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    words_per_minute: u32,
    max_input_bytes: Option<usize>,
}

impl Default for TextUtilsServer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextUtilsServer {
    /// Use `words_per_minute` when a request does not give one.
    #[must_use]
    pub fn with_reading_speed(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    /// Reject request text longer than `max_input_bytes`.
    #[must_use]
    pub fn with_input_limit(mut self, max_input_bytes: Option<usize>) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl TextUtilsServer {
    /// Create a new MCP server instance.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            max_input_bytes: None,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            to_json(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Compute text statistics.
    #[tool(
        description = "Count words, characters (with and without whitespace), sentences and paragraphs, and estimate reading time in minutes."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn text_stats(
        &self,
        Parameters(params): Parameters<TextStatsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "text_stats", len = params.text.len(), "executing MCP tool");
        self.check_size(&params.text)?;

        let wpm = params.words_per_minute.unwrap_or(self.words_per_minute);
        let metrics = TextMetrics::with_reading_speed(&params.text, wpm);
        let json = to_json(&metrics)?;

        tracing::info!(
            tool = "text_stats",
            words = metrics.word_count,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Apply transforms to text.
    #[tool(
        description = "Apply text transforms in order (upper, lower, capitalize, title, collapse-spaces, reverse, remove-numbers, remove-special, clear). Returns the transformed text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn transform_text(
        &self,
        Parameters(params): Parameters<TransformTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "transform_text",
            transforms = ?params.transforms,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let transforms = params
            .transforms
            .iter()
            .map(|name| name.parse::<Transform>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let text = crate::commands::transform::apply_all(&params.text, &transforms);

        tracing::info!(tool = "transform_text", len = text.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for TextUtilsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use text_stats for word/sentence/paragraph counts and \
                 transform_text for case and whitespace transforms.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
