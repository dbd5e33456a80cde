//! Kanban Board MCP Server Library
//!
//! This library provides the state model and reorder/insert algorithm of a
//! single three-column task board (to-do, in-progress, done), plus a Model
//! Context Protocol (MCP) server exposing it to a client.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `BoardServerHandler` - owns the current board and serializes calls
//! - **Engine Layer**: `engine` module - pure move/insert functions producing new boards
//! - **Domain Layer**: `board` module - Board/Column/Task types and their invariants
//!
//! # Example
//!
//! ```
//! use kanban_mcp::board::ColumnId;
//! use kanban_mcp::engine::{MoveRequest, move_task};
//! use kanban_mcp::seed::default_board;
//!
//! let board = default_board();
//! let next = move_task(&board, &MoveRequest::new("to-do", 0, "done", 0)).unwrap();
//! assert_eq!(next.column_by_id(ColumnId::Done).tasks()[0].title(), "DSA");
//! ```

pub mod board;
pub mod engine;
pub mod formatting;
pub mod handlers;
pub mod seed;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use board::{Board, BoardError, Column, ColumnId, Task, TaskId};
pub use engine::{InsertRequest, Location, MoveRequest};

/// MCP Server handler for the task board
///
/// Holds the single current-board reference. Every tool call takes the lock,
/// computes the next board with the engine and replaces the current one
/// wholesale, so read-compute-replace is one critical section.
pub struct BoardServerHandler {
    pub(crate) board: Mutex<Board>,
}

impl BoardServerHandler {
    /// Create a handler around an existing board
    pub fn new(board: Board) -> Self {
        Self {
            board: Mutex::new(board),
        }
    }

    /// Create a handler from a seed file, or the built-in seed board
    ///
    /// # Arguments
    /// * `seed_path` - Optional path to a TOML seed file
    ///
    /// # Example
    /// ```
    /// # use kanban_mcp::BoardServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = BoardServerHandler::from_seed(None)?;
    /// assert_eq!(handler.snapshot().total_tasks(), 8);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_seed(seed_path: Option<&Path>) -> Result<Self> {
        Ok(Self::new(seed::initial_board(seed_path)?))
    }

    /// Copy of the current board
    pub fn snapshot(&self) -> Board {
        self.lock_board().clone()
    }

    /// Lock the current board
    ///
    /// The board is only ever replaced by a complete value, so a poisoned
    /// lock still guards a consistent board.
    pub(crate) fn lock_board(&self) -> MutexGuard<'_, Board> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Three-column task board (to-do, in-progress, done) with drag-and-drop ordering.
///
/// Tasks are identified by ids assigned at creation; positions are 0-based
/// indexes counted from the top of each column.
///
/// Key concepts:
/// - **to-do**: Work not started yet
/// - **in-progress**: Work being done now
/// - **done**: Finished work
#[mcp_server]
impl McpServer for BoardServerHandler {
    /// **View board**: List every column with its tasks in display order, or a single column.
    #[tool]
    async fn list(
        &self,
        /// Column filter: to-do/in-progress/done. Empty=all.
        column: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(column).await
    }

    /// **Drag and drop**: Move a task within a column or to another column.
    /// **Indexes**: 0-based; within one column the destination index counts positions after the task is lifted out.
    /// **Cancel**: Omit dest_column to model a drag released outside any column (no change).
    #[tool]
    async fn move_task(
        &self,
        /// Column the task is dragged from: to-do/in-progress/done
        source_column: String,
        /// Current 0-based position of the task in its column
        source_index: usize,
        /// Column the task is dropped on (optional, omit to cancel)
        dest_column: Option<String>,
        /// 0-based drop position (optional, defaults to the bottom of the column)
        dest_index: Option<usize>,
    ) -> McpResult<String> {
        self.handle_move_task(source_column, source_index, dest_column, dest_index)
            .await
    }

    /// **New task**: Append a task to the bottom of a column. A blank title adds nothing.
    #[tool]
    async fn add_task(
        &self,
        /// Column: to-do/in-progress/done
        column: String,
        /// Title: brief description (surrounding whitespace is trimmed)
        title: String,
        /// Description: free text (optional)
        description: Option<String>,
        /// Due date: YYYY-MM-DD (optional)
        due_date: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_task(column, title, description, due_date)
            .await
    }
}
