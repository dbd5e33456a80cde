//! Move/insert engine
//!
//! Pure functions computing the next [`Board`](crate::board::Board) from the
//! current one plus a request. Inputs are never mutated: each call clones the
//! board, applies the change to the clone, and returns it. Errors leave the
//! caller's board untouched.
//!
//! - `reorder`: drag-and-drop moves within and across columns
//! - `insert`: creation of new tasks

mod insert;
mod reorder;

pub use insert::insert_task;
pub use reorder::move_task;

use chrono::NaiveDate;

/// A position on the board as reported by the UI layer
///
/// `column` is the raw column id from the drop target, checked against the
/// fixed column set by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub column: String,
    pub index: usize,
}

impl Location {
    pub fn new(column: impl Into<String>, index: usize) -> Self {
        Self {
            column: column.into(),
            index,
        }
    }
}

/// A drag-and-drop gesture
///
/// `destination` is `None` when the gesture was released outside any valid
/// drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub source: Location,
    pub destination: Option<Location>,
}

impl MoveRequest {
    /// A completed drag from one position to another
    pub fn new(
        source_column: impl Into<String>,
        source_index: usize,
        dest_column: impl Into<String>,
        dest_index: usize,
    ) -> Self {
        Self {
            source: Location::new(source_column, source_index),
            destination: Some(Location::new(dest_column, dest_index)),
        }
    }

    /// A drag released with no drop target
    pub fn cancelled(source_column: impl Into<String>, source_index: usize) -> Self {
        Self {
            source: Location::new(source_column, source_index),
            destination: None,
        }
    }
}

/// A new-task submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InsertRequest {
    pub column: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl InsertRequest {
    pub fn new(column: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}
