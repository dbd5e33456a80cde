//! Formatting helper functions for the board MCP server

use crate::board::{Board, Column, ColumnId, Task};

/// Render a single task as a list line plus optional detail lines
pub fn format_task(index: usize, task: &Task) -> String {
    let mut out = format!("  {}. [{}] {}\n", index, task.id(), task.title());
    if let Some(description) = task.description().filter(|d| !d.is_empty()) {
        out.push_str(&format!("     Description: {}\n", description));
    }
    if let Some(date) = task.due_date() {
        out.push_str(&format!("     Due: {}\n", date));
    }
    out
}

/// Render one column with its tasks in display order
pub fn format_column(column: &Column) -> String {
    let mut out = format!(
        "{} ({}) - {} task(s)\n",
        column.title(),
        column.id(),
        column.len()
    );
    if column.is_empty() {
        out.push_str("  (empty)\n");
    }
    for (index, task) in column.tasks().iter().enumerate() {
        out.push_str(&format_task(index, task));
    }
    out
}

/// Render the whole board, or a single column when `filter` is given
pub fn format_board(board: &Board, filter: Option<ColumnId>) -> String {
    let sections: Vec<String> = match filter {
        Some(id) => vec![format_column(board.column_by_id(id))],
        None => board.columns().iter().map(format_column).collect(),
    };
    sections.join("\n").trim_end().to_string()
}
