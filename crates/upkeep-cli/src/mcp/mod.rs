//! MCP server implementation for Upkeep
//!
//! Exposes the schedule, duration and window operations as Model Context
//! Protocol tools over stdio.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};
use upkeep_core::Settings;

pub mod errors;
pub mod handlers;

pub use handlers::{
    BuildCronRule, BuildCronSettings, CheckRunDate, EncodeDuration, EvaluateWindow, McpResult,
    ParseDuration, ToggleSchedule,
};

/// MCP server for Upkeep
#[derive(Clone)]
pub struct UpkeepMcpServer {
    settings: Arc<Settings>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl UpkeepMcpServer {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.settings.clone())
    }

    #[tool(
        name = "encode_duration",
        description = "Encode a duration entered as days, hours and minutes into the HH:MM:SS string the backend stores. Days are folded into hours (1 day 2 hours = 26:00:00); negative values count as zero."
    )]
    async fn encode_duration(&self, params: Parameters<EncodeDuration>) -> McpResult {
        self.handlers().encode_duration(params)
    }

    #[tool(
        name = "parse_duration",
        description = "Parse a backend duration string ('HH:MM:SS' or 'D HH:MM:SS', e.g. '1 00:00:00') into milliseconds. Never fails: missing or malformed input parses as zero."
    )]
    async fn parse_duration(&self, params: Parameters<ParseDuration>) -> McpResult {
        self.handlers().parse_duration(params)
    }

    #[tool(
        name = "evaluate_window",
        description = "Evaluate the submission window of a checklist run. Give scheduled_for as an RFC 3339 timestamp with offset, plus allowed_time_to_submit and extension_time durations. Returns due and grace instants and whether 'now' (defaults to the current time) is inside [scheduled_for, grace]. With no allowed time the window closes at scheduled_for, even if an extension is set."
    )]
    async fn evaluate_window(&self, params: Parameters<EvaluateWindow>) -> McpResult {
        self.handlers().evaluate_window(params)
    }

    #[tool(
        name = "check_run_date",
        description = "Check whether the run listed on a calendar date can take answers. Give the runs from the month listing (run_id, scheduled_for, status), the selected date and the listing range (listing_start inclusive, listing_end_exclusive exclusive) as YYYY-MM-DD, plus the checklist's allowed_time_to_submit and extension_time. The run must be inside both the listing range and its own submission window; completed runs are reported as such."
    )]
    async fn check_run_date(&self, params: Parameters<CheckRunDate>) -> McpResult {
        self.handlers().check_run_date(params)
    }

    #[tool(
        name = "toggle_schedule",
        description = "Toggle one value in a schedule rule field (months 1-12, days_of_month 1-31, weekdays 0-6 with Monday = 0, hours 0-23, minutes 0-59, seconds 0-59). Removing the last value resets the field to 'any'. Returns the new rule as JSON."
    )]
    async fn toggle_schedule(&self, params: Parameters<ToggleSchedule>) -> McpResult {
        self.handlers().toggle_schedule(params)
    }

    #[tool(
        name = "build_cron_rule",
        description = "Build the backend cron_rule payload from chip selections (months as JAN..DEC, weeks as MON..SUN, other fields as decimal strings). Weekdays are sent Sunday-first and default to every day; empty hours/minutes mean 'every'. Set label=true to include a readable description."
    )]
    async fn build_cron_rule(&self, params: Parameters<BuildCronRule>) -> McpResult {
        self.handlers().build_cron_rule(params)
    }

    #[tool(
        name = "build_cron_settings",
        description = "Build the cron_settings payload of a checklist bundle from allowed and extension durations (days/hours/minutes), lock_overdue_task, supervisors, supplier_id and locked_group_ids."
    )]
    async fn build_cron_settings(&self, params: Parameters<BuildCronSettings>) -> McpResult {
        self.handlers().build_cron_settings(params)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for UpkeepMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "upkeep".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                r#"Upkeep computes the scheduling payloads and submission windows of recurring checklists.

## Core Concepts
- **Schedule rule**: a scope (YEAR, MONTH, WEEK, DAY, HOUR) plus selected months, days of month, weekdays, hours, minutes and seconds. An empty field means "any".
- **Durations**: stored as HH:MM:SS; the backend may return "D HH:MM:SS".
- **Window**: a run is open from its scheduled time until grace = scheduled + allowed + extension.

## Tools
- **Durations**: encode_duration, parse_duration
- **Schedules**: toggle_schedule, build_cron_rule
- **Checklist settings**: build_cron_settings
- **Runs**: evaluate_window, check_run_date

Cron rules are stamped with the "{}" time zone unless a timezone is given."#,
                self.settings.timezone
            )),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: UpkeepMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Upkeep MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
