use super::InsertRequest;
use crate::board::{Board, BoardError, ColumnId, Task};
use tracing::debug;

/// Create a task from a submission and append it to its column
///
/// The title is trimmed; if nothing is left the submission is ignored and
/// the board is returned unchanged. Otherwise the new task gets a fresh id
/// and is appended at the tail of the destination column.
///
/// # Errors
/// `UnknownColumn` if the destination column is outside the fixed set
pub fn insert_task(board: &Board, request: &InsertRequest) -> Result<Board, BoardError> {
    let column: ColumnId = request.column.parse()?;

    let title = request.title.trim();
    if title.is_empty() {
        return Ok(board.clone());
    }

    let mut next = board.clone();
    let id = next.generate_task_id();
    let mut task = Task::new(id, title);
    if let Some(description) = &request.description {
        task = task.with_description(description.clone());
    }
    if let Some(due_date) = request.due_date {
        task = task.with_due_date(due_date);
    }

    debug!(task = %task.id(), column = %column, "adding task");
    next.push(column, task);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Column, TaskId};
    use chrono::NaiveDate;

    fn seeded() -> Board {
        Board::new(vec![
            Column::new(ColumnId::ToDo, "TO-DO", vec![Task::new("1", "DSA")]),
            Column::empty(ColumnId::InProgress),
            Column::new(ColumnId::Done, "DONE", vec![Task::new("2", "Call mom")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_insert_trims_title_and_appends() {
        let board = seeded();
        let next = insert_task(&board, &InsertRequest::new("to-do", "  Write tests  ")).unwrap();

        let todo = next.column_by_id(ColumnId::ToDo);
        assert_eq!(todo.len(), 2);
        let added = &todo.tasks()[1];
        assert_eq!(added.title(), "Write tests");
        assert_eq!(next.total_tasks(), board.total_tasks() + 1);
        assert!(next.check_invariants().is_ok());
    }

    #[test]
    fn test_insert_assigns_fresh_id() {
        let board = seeded();
        let next = insert_task(&board, &InsertRequest::new("done", "New")).unwrap();
        let added = next.column_by_id(ColumnId::Done).tasks().last().unwrap();
        assert_eq!(added.id(), &TaskId::from("3"));
        assert!(!board.task_ids().contains(added.id()));
    }

    #[test]
    fn test_rapid_inserts_never_collide() {
        let mut board = seeded();
        for i in 0..50 {
            board = insert_task(&board, &InsertRequest::new("in-progress", format!("T{}", i)))
                .unwrap();
        }
        assert_eq!(board.task_ids().len(), 52);
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn test_insert_keeps_optional_fields() {
        let board = seeded();
        let due = NaiveDate::from_ymd_opt(2025, 2, 12).unwrap();
        let request = InsertRequest::new("in-progress", "Maths")
            .with_description("Do 1st unit")
            .with_due_date(due);
        let next = insert_task(&board, &request).unwrap();

        let added = &next.column_by_id(ColumnId::InProgress).tasks()[0];
        assert_eq!(added.description(), Some("Do 1st unit"));
        assert_eq!(added.due_date(), Some(due));
    }

    #[test]
    fn test_blank_title_is_ignored() {
        let board = seeded();
        let next = insert_task(&board, &InsertRequest::new("done", "   ")).unwrap();
        assert_eq!(next, board);
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let board = seeded();
        let err = insert_task(&board, &InsertRequest::new("archived", "Task")).unwrap_err();
        assert_eq!(err, BoardError::UnknownColumn("archived".to_string()));
    }

    #[test]
    fn test_unknown_column_wins_over_blank_title() {
        let board = seeded();
        assert!(insert_task(&board, &InsertRequest::new("archived", "")).is_err());
    }

    #[test]
    fn test_input_board_is_untouched() {
        let board = seeded();
        let snapshot = board.clone();
        let _next = insert_task(&board, &InsertRequest::new("to-do", "Extra")).unwrap();
        assert_eq!(board, snapshot);
    }
}
