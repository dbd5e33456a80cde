//! Error taxonomy for board construction and engine requests

use super::column::ColumnId;
use super::task::TaskId;
use thiserror::Error;

/// Errors raised by the board model and the move/insert engine
///
/// Every variant describes a caller defect: a legitimate UI gesture never
/// produces one. Expected user actions (cancelled drags, empty titles) are
/// silent no-ops and never surface here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// A column id outside the fixed set was referenced.
    #[error("unknown column '{0}', expected one of: to-do, in-progress, done")]
    UnknownColumn(String),

    /// A source index does not address a task in its column.
    #[error("index {index} is out of range for column '{column}' with {len} task(s)")]
    IndexOutOfRange {
        /// Column the index was applied to
        column: ColumnId,
        /// Requested index
        index: usize,
        /// Number of tasks in the column at call time
        len: usize,
    },

    /// The same task id appears more than once on the board.
    #[error("task id '{0}' appears more than once on the board")]
    DuplicateTask(TaskId),

    /// A task has an empty id or a blank title.
    #[error("task '{0}' must have a non-empty id and title")]
    InvalidTask(TaskId),

    /// The id index disagrees with where the task actually sits.
    #[error("task id '{0}' is indexed under the wrong column or no longer exists")]
    IndexMismatch(TaskId),

    /// The same column appears more than once in a board definition.
    #[error("column '{0}' is defined more than once")]
    DuplicateColumn(String),

    /// A board definition omits one of the fixed columns.
    #[error("column '{0}' is missing from the board definition")]
    MissingColumn(String),
}
