//! Error handling utilities for MCP server

use rmcp::ErrorData;
use upkeep_core::UpkeepError;

/// Converts a core error into an MCP error.
///
/// Bad caller input maps to `invalid_params`; everything else is internal.
pub fn to_mcp_error(message: &str, error: &UpkeepError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        UpkeepError::InvalidInput { .. } | UpkeepError::Timestamp { .. } => {
            ErrorData::invalid_params(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}
