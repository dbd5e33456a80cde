//! Initial board configuration
//!
//! The board is created once at startup, either from the built-in seed or
//! from a TOML seed file. Nothing is ever written back.

use crate::board::{Board, ColumnId, Task};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::info;

/// The built-in starting board
pub fn default_board() -> Board {
    let mut board = Board::empty();

    let todo = [
        ("1", "DSA", "Practice graphs", NaiveDate::from_ymd_opt(2025, 2, 2)),
        ("2", "Maths", "Do 1st unit", NaiveDate::from_ymd_opt(2025, 2, 12)),
    ];
    for (id, title, description, due_date) in todo {
        let mut task = Task::new(id, title).with_description(description);
        if let Some(date) = due_date {
            task = task.with_due_date(date);
        }
        board.push(ColumnId::ToDo, task);
    }

    for (id, title) in [
        ("3", "Practice 15 leetcode"),
        ("4", "Meet-up with Sam"),
        ("5", "Develop a website"),
    ] {
        board.push(ColumnId::InProgress, Task::new(id, title));
    }

    for (id, title) in [("6", "Call mom"), ("7", "Email to FA"), ("8", "AI assignment")] {
        board.push(ColumnId::Done, Task::new(id, title));
    }

    board
}

/// Load the starting board from a TOML seed file
///
/// # Errors
/// Fails if the file cannot be read, is not valid TOML, or describes a
/// board that breaks a board invariant.
pub fn load_board(path: impl AsRef<Path>) -> Result<Board> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let board: Board = toml::from_str(&content)
        .with_context(|| format!("Invalid seed file {}", path.display()))?;
    info!(
        path = %path.display(),
        tasks = board.total_tasks(),
        "loaded seed board"
    );
    Ok(board)
}

/// Load from `path` when given, otherwise use the built-in seed
pub fn initial_board(path: Option<&Path>) -> Result<Board> {
    match path {
        Some(p) => load_board(p),
        None => Ok(default_board()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_board_matches_seed() {
        let board = default_board();
        assert!(board.check_invariants().is_ok());
        assert_eq!(board.task_count("to-do"), Ok(2));
        assert_eq!(board.task_count("in-progress"), Ok(3));
        assert_eq!(board.task_count("done"), Ok(3));

        let first = &board.column_by_id(ColumnId::ToDo).tasks()[0];
        assert_eq!(first.title(), "DSA");
        assert_eq!(first.due_date(), NaiveDate::from_ymd_opt(2025, 2, 2));
    }

    #[test]
    fn test_load_board_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[columns]]
id = "to-do"
title = "Backlog"
[[columns.tasks]]
id = "a"
title = "Plan"

[[columns]]
id = "in-progress"
title = "Doing"

[[columns]]
id = "done"
title = "Shipped"
"#
        )
        .unwrap();

        let board = load_board(file.path()).unwrap();
        assert_eq!(board.column_by_id(ColumnId::ToDo).title(), "Backlog");
        assert_eq!(board.total_tasks(), 1);
    }

    #[test]
    fn test_load_board_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_board(dir.path().join("missing.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_board_rejects_missing_column() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[columns]]
id = "to-do"
title = "TO-DO"
"#
        )
        .unwrap();

        let err = load_board(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("missing"));
    }

    #[test]
    fn test_load_board_rejects_blank_title() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[columns]]
id = "to-do"
title = "TO-DO"
[[columns.tasks]]
id = "9"
title = ""

[[columns]]
id = "in-progress"
title = "IN-PROGRESS"

[[columns]]
id = "done"
title = "DONE"
"#
        )
        .unwrap();

        let err = load_board(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("task '9' must have a non-empty id and title"));
    }

    #[test]
    fn test_initial_board_defaults_to_seed() {
        let board = initial_board(None).unwrap();
        assert_eq!(board, default_board());
    }
}
