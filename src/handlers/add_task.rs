//! Add-task handler for the board MCP server

use crate::BoardServerHandler;
use crate::engine::{self, InsertRequest};
use crate::validation;
use mcp_attr::Result as McpResult;
use tracing::{info, warn};

impl BoardServerHandler {
    /// Builds an insert request from form fields and appends the new task to
    /// the chosen column.
    ///
    /// A blank title is not an error: the board is left alone and the reply
    /// says nothing was added.
    pub async fn handle_add_task(
        &self,
        column: String,
        title: String,
        description: Option<String>,
        due_date: Option<String>,
    ) -> McpResult<String> {
        let column_id = validation::parse_column(&column)?;
        let parsed_due_date = match due_date.as_deref() {
            Some(d) => Some(validation::parse_due_date(d)?),
            None => None,
        };

        let request = InsertRequest {
            column: column_id.as_str().to_string(),
            title,
            description,
            due_date: parsed_due_date,
        };

        let mut board = self.lock_board();
        let next = engine::insert_task(&board, &request).map_err(|e| {
            warn!(error = %e, "rejected insert request");
            validation::board_error(e)
        })?;

        if next.total_tasks() == board.total_tasks() {
            return Ok("Nothing added: title is empty".to_string());
        }

        let created = next
            .column_by_id(column_id)
            .tasks()
            .last()
            .map(|t| t.id().to_string())
            .unwrap_or_default();
        *board = next;
        drop(board);

        info!(task = %created, column = %column_id, "task created");
        Ok(format!(
            "Task created with ID: {} (column: {})",
            created, column_id
        ))
    }
}
