//! Move handler for the board MCP server

use crate::BoardServerHandler;
use crate::board::TaskId;
use crate::engine::{self, Location, MoveRequest};
use crate::validation;
use mcp_attr::Result as McpResult;
use tracing::{info, warn};

impl BoardServerHandler {
    /// Translates a drag gesture into a move request, runs it against the
    /// current board and replaces the board with the result.
    ///
    /// No `dest_column` means the drag was released outside any column.
    /// A `dest_column` without `dest_index` drops the task at the tail.
    pub async fn handle_move_task(
        &self,
        source_column: String,
        source_index: usize,
        dest_column: Option<String>,
        dest_index: Option<usize>,
    ) -> McpResult<String> {
        let request = MoveRequest {
            source: Location::new(source_column.trim(), source_index),
            destination: dest_column
                .map(|c| Location::new(c.trim(), dest_index.unwrap_or(usize::MAX))),
        };

        let mut board = self.lock_board();

        let moved: Option<TaskId> = board
            .column(&request.source.column)
            .ok()
            .and_then(|c| c.tasks().get(source_index))
            .map(|t| t.id().clone());

        let next = engine::move_task(&board, &request).map_err(|e| {
            warn!(error = %e, "rejected move request");
            validation::board_error(e)
        })?;

        if next == *board {
            return Ok("Board unchanged".to_string());
        }

        let landed = moved.and_then(|id| next.locate(&id).map(|at| (id, at)));
        *board = next;
        drop(board);

        match landed {
            Some((id, (column, index))) => {
                info!(task = %id, column = %column, index, "task moved");
                Ok(format!(
                    "Task {} moved from {}[{}] to {}[{}]",
                    id, request.source.column, source_index, column, index
                ))
            }
            None => Ok("Task moved".to_string()),
        }
    }
}
