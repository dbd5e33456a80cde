//! Common test utilities for integration tests
#![allow(dead_code)]

use kanban_mcp::{Board, Column, ColumnId, Task};

/// Build a board whose tasks use their id as title
pub fn board_with(todo: &[&str], in_progress: &[&str], done: &[&str]) -> Board {
    Board::new(vec![
        column(ColumnId::ToDo, todo),
        column(ColumnId::InProgress, in_progress),
        column(ColumnId::Done, done),
    ])
    .unwrap()
}

/// Build a column of title-only tasks
pub fn column(id: ColumnId, ids: &[&str]) -> Column {
    Column::new(
        id,
        id.default_title(),
        ids.iter().map(|i| Task::new(*i, *i)).collect(),
    )
}

/// Task ids of one column, top to bottom
pub fn ids(board: &Board, column: ColumnId) -> Vec<String> {
    board
        .column_by_id(column)
        .tasks()
        .iter()
        .map(|t| t.id().to_string())
        .collect()
}
