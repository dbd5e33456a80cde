use super::MoveRequest;
use crate::board::{Board, BoardError, ColumnId};
use tracing::debug;

/// Apply a drag-and-drop move and return the resulting board
///
/// Semantics:
/// - no destination (cancelled drag): board returned unchanged
/// - same column and same index: board returned unchanged
/// - same column: the task is removed first, then inserted at the
///   destination index of the shortened list
/// - across columns: the task is removed from the source and inserted at the
///   destination index of the destination column; an index equal to the
///   destination length appends at the tail
///
/// A destination index past the end of the destination list lands the task
/// at the tail.
///
/// # Errors
/// - `UnknownColumn` if either column id is outside the fixed set
/// - `IndexOutOfRange` if the source index does not address a task
pub fn move_task(board: &Board, request: &MoveRequest) -> Result<Board, BoardError> {
    let Some(destination) = &request.destination else {
        return Ok(board.clone());
    };

    let source_column: ColumnId = request.source.column.parse()?;
    let dest_column: ColumnId = destination.column.parse()?;
    let source_index = request.source.index;

    let source_len = board.column_by_id(source_column).len();
    if source_index >= source_len {
        return Err(BoardError::IndexOutOfRange {
            column: source_column,
            index: source_index,
            len: source_len,
        });
    }

    if source_column == dest_column && source_index == destination.index {
        return Ok(board.clone());
    }

    let mut next = board.clone();
    let task = next.remove_at(source_column, source_index)?;
    debug!(
        task = %task.id(),
        from = %source_column,
        from_index = source_index,
        to = %dest_column,
        to_index = destination.index,
        "moving task"
    );
    next.insert_at(dest_column, destination.index, task);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Column, Task};

    fn board_with(todo: &[&str], in_progress: &[&str], done: &[&str]) -> Board {
        let column = |id: ColumnId, ids: &[&str]| {
            Column::new(
                id,
                id.default_title(),
                ids.iter().map(|i| Task::new(*i, *i)).collect(),
            )
        };
        Board::new(vec![
            column(ColumnId::ToDo, todo),
            column(ColumnId::InProgress, in_progress),
            column(ColumnId::Done, done),
        ])
        .unwrap()
    }

    fn ids(board: &Board, column: ColumnId) -> Vec<String> {
        board
            .column_by_id(column)
            .tasks()
            .iter()
            .map(|t| t.id().to_string())
            .collect()
    }

    #[test]
    fn test_same_column_move_down() {
        let board = board_with(&["A", "B", "C", "D"], &[], &[]);
        let next = move_task(&board, &MoveRequest::new("to-do", 0, "to-do", 2)).unwrap();
        assert_eq!(ids(&next, ColumnId::ToDo), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_same_column_move_up() {
        let board = board_with(&["A", "B", "C", "D"], &[], &[]);
        let next = move_task(&board, &MoveRequest::new("to-do", 3, "to-do", 0)).unwrap();
        assert_eq!(ids(&next, ColumnId::ToDo), vec!["D", "A", "B", "C"]);
    }

    #[test]
    fn test_same_column_move_to_last_slot() {
        let board = board_with(&["A", "B", "C"], &[], &[]);
        let next = move_task(&board, &MoveRequest::new("to-do", 0, "to-do", 2)).unwrap();
        assert_eq!(ids(&next, ColumnId::ToDo), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_cross_column_move_appends() {
        let board = board_with(&["X", "Y"], &["Z"], &[]);
        let next = move_task(&board, &MoveRequest::new("to-do", 0, "in-progress", 1)).unwrap();
        assert_eq!(ids(&next, ColumnId::ToDo), vec!["Y"]);
        assert_eq!(ids(&next, ColumnId::InProgress), vec!["Z", "X"]);
        assert!(next.check_invariants().is_ok());
    }

    #[test]
    fn test_cross_column_move_into_empty_column() {
        let board = board_with(&["X"], &[], &[]);
        let next = move_task(&board, &MoveRequest::new("to-do", 0, "done", 0)).unwrap();
        assert!(ids(&next, ColumnId::ToDo).is_empty());
        assert_eq!(ids(&next, ColumnId::Done), vec!["X"]);
    }

    #[test]
    fn test_cross_column_move_leaves_other_columns_alone() {
        let board = board_with(&["X"], &["M", "N"], &["Z"]);
        let next = move_task(&board, &MoveRequest::new("to-do", 0, "done", 0)).unwrap();
        assert_eq!(
            next.column_by_id(ColumnId::InProgress),
            board.column_by_id(ColumnId::InProgress)
        );
    }

    #[test]
    fn test_dest_index_past_end_lands_at_tail() {
        let board = board_with(&["X"], &["Z"], &[]);
        let next = move_task(&board, &MoveRequest::new("to-do", 0, "in-progress", 10)).unwrap();
        assert_eq!(ids(&next, ColumnId::InProgress), vec!["Z", "X"]);
    }

    #[test]
    fn test_same_position_is_noop() {
        let board = board_with(&["A", "B"], &[], &[]);
        let next = move_task(&board, &MoveRequest::new("to-do", 1, "to-do", 1)).unwrap();
        assert_eq!(next, board);
    }

    #[test]
    fn test_cancelled_drag_is_noop() {
        let board = board_with(&["A", "B"], &["C"], &[]);
        let next = move_task(&board, &MoveRequest::cancelled("to-do", 0)).unwrap();
        assert_eq!(next, board);
    }

    #[test]
    fn test_unknown_destination_column() {
        let board = board_with(&["A"], &[], &[]);
        let err = move_task(&board, &MoveRequest::new("to-do", 0, "archived", 0)).unwrap_err();
        assert_eq!(err, BoardError::UnknownColumn("archived".to_string()));
        assert_eq!(ids(&board, ColumnId::ToDo), vec!["A"]);
    }

    #[test]
    fn test_unknown_source_column() {
        let board = board_with(&["A"], &[], &[]);
        let err = move_task(&board, &MoveRequest::new("backlog", 0, "done", 0)).unwrap_err();
        assert_eq!(err, BoardError::UnknownColumn("backlog".to_string()));
    }

    #[test]
    fn test_source_index_out_of_range() {
        let board = board_with(&["A"], &[], &[]);
        let err = move_task(&board, &MoveRequest::new("to-do", 1, "done", 0)).unwrap_err();
        assert_eq!(
            err,
            BoardError::IndexOutOfRange {
                column: ColumnId::ToDo,
                index: 1,
                len: 1,
            }
        );
    }

    #[test]
    fn test_stale_index_is_reported_even_for_same_position() {
        let board = board_with(&[], &[], &[]);
        let result = move_task(&board, &MoveRequest::new("done", 0, "done", 0));
        assert!(matches!(result, Err(BoardError::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_moved_task_fields_are_unchanged() {
        let board = board_with(&["X"], &[], &[]);
        let before = board.column_by_id(ColumnId::ToDo).tasks()[0].clone();
        let next = move_task(&board, &MoveRequest::new("to-do", 0, "done", 0)).unwrap();
        assert_eq!(next.column_by_id(ColumnId::Done).tasks()[0], before);
    }
}
