//! Read-only accessors for Board
//!
//! None of these methods change the board. All state transitions go through
//! the `engine` module.

use super::board_data::Board;
use super::column::{Column, ColumnId};
use super::error::BoardError;
use super::task::{Task, TaskId};
use std::collections::BTreeSet;

impl Board {
    /// Columns in stable display order (to-do, in-progress, done)
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by its typed id
    pub fn column_by_id(&self, id: ColumnId) -> &Column {
        &self.columns[id.position()]
    }

    /// Look up a column by its wire name
    ///
    /// # Errors
    /// `UnknownColumn` if `column_id` is not one of the fixed columns
    pub fn column(&self, column_id: &str) -> Result<&Column, BoardError> {
        let id: ColumnId = column_id.parse()?;
        Ok(self.column_by_id(id))
    }

    /// Number of tasks in a column
    ///
    /// # Errors
    /// `UnknownColumn` if `column_id` is not one of the fixed columns
    pub fn task_count(&self, column_id: &str) -> Result<usize, BoardError> {
        self.column(column_id).map(Column::len)
    }

    /// Total number of tasks across all columns
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Every task id on the board
    pub fn task_ids(&self) -> BTreeSet<TaskId> {
        self.task_index.keys().cloned().collect()
    }

    /// Find which column a task sits in, and at which index
    pub fn locate(&self, id: &TaskId) -> Option<(ColumnId, usize)> {
        let column = *self.task_index.get(id)?;
        let index = self.column_by_id(column).position_of(id)?;
        Some((column, index))
    }

    /// Find a task by its ID
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        let (column, index) = self.locate(id)?;
        self.column_by_id(column).tasks().get(index)
    }
}
