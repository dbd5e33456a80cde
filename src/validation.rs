//! Validation helper functions for the board MCP server
//!
//! Translates raw tool parameters into typed values and board errors into
//! MCP errors.

use crate::board::{BoardError, ColumnId};
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

/// Parse and validate a column id parameter
///
/// # Arguments
/// * `column` - Column wire name ("to-do", "in-progress", "done")
///
/// # Returns
/// Result containing parsed ColumnId or error
pub fn parse_column(column: &str) -> McpResult<ColumnId> {
    column.trim().parse::<ColumnId>().map_err(board_error)
}

/// Parse and validate a due date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_due_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
                date_str
            ),
            true,
        )
    })
}

/// Convert a board error into a caller-visible MCP error
pub fn board_error(err: BoardError) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(err.to_string(), true)
}
