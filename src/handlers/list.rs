//! List handler for the board MCP server

use crate::BoardServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl BoardServerHandler {
    /// Renders the current board, optionally limited to one column.
    pub async fn handle_list(&self, column: Option<String>) -> McpResult<String> {
        let filter = match column.as_deref() {
            Some(c) => Some(validation::parse_column(c)?),
            None => None,
        };

        let board = self.lock_board();
        Ok(formatting::format_board(&board, filter))
    }
}
