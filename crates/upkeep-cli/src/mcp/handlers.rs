//! MCP tool handlers implementation

use std::sync::Arc;

use jiff::Timestamp;
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::Deserialize;
use upkeep_core::{operations, params as core, DurationParts, Settings};

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types are wrapped in a transparent serde container so the
// MCP layer owns the Deserialize/JsonSchema plumbing the tool macros need.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type EncodeDuration = McpParams<DurationParts>;
pub type ParseDuration = McpParams<core::ParseDuration>;
pub type EvaluateWindow = McpParams<core::EvaluateWindow>;
pub type CheckRunDate = McpParams<core::CheckRunDate>;
pub type ToggleSchedule = McpParams<core::ToggleSchedule>;
pub type BuildCronRule = McpParams<core::BuildCronRule>;
pub type BuildCronSettings = McpParams<core::BuildCronSettings>;

pub type McpResult = Result<CallToolResult, McpError>;

fn text(result: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        result.to_string(),
    )]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    settings: Arc<Settings>,
}

impl McpHandlers {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    pub fn encode_duration(&self, Parameters(params): Parameters<EncodeDuration>) -> McpResult {
        debug!("encode_duration: {:?}", params);
        text(operations::encode_duration(params.as_ref()))
    }

    pub fn parse_duration(&self, Parameters(params): Parameters<ParseDuration>) -> McpResult {
        debug!("parse_duration: {:?}", params);
        text(operations::parse_duration(params.as_ref()))
    }

    pub fn evaluate_window(&self, Parameters(params): Parameters<EvaluateWindow>) -> McpResult {
        debug!("evaluate_window: {:?}", params);
        let report = operations::evaluate_window(params.as_ref(), Timestamp::now(), &self.settings)
            .map_err(|e| to_mcp_error("Failed to evaluate window", &e))?;
        text(report)
    }

    pub fn check_run_date(&self, Parameters(params): Parameters<CheckRunDate>) -> McpResult {
        debug!("check_run_date: {:?}", params);
        let report =
            operations::check_run_for_date(params.as_ref(), Timestamp::now(), &self.settings)
                .map_err(|e| to_mcp_error("Failed to check run for date", &e))?;
        text(report)
    }

    pub fn toggle_schedule(&self, Parameters(params): Parameters<ToggleSchedule>) -> McpResult {
        debug!("toggle_schedule: {:?}", params);
        let rule = operations::toggle_schedule(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to toggle schedule", &e))?;

        let chips = serde_json::to_string_pretty(&rule)
            .map_err(|e| McpError::internal_error(format!("Failed to encode rule: {e}"), None))?;
        text(format!("{rule}\n```json\n{chips}\n```\n"))
    }

    pub fn build_cron_rule(&self, Parameters(params): Parameters<BuildCronRule>) -> McpResult {
        debug!("build_cron_rule: {:?}", params);
        text(operations::build_cron_rule(params.as_ref(), &self.settings))
    }

    pub fn build_cron_settings(
        &self,
        Parameters(params): Parameters<BuildCronSettings>,
    ) -> McpResult {
        debug!("build_cron_settings: {:?}", params);
        text(operations::build_cron_settings(params.as_ref()))
    }
}
