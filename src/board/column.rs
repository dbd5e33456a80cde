use super::error::BoardError;
use super::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one of the board's fixed columns
///
/// The set is closed: the board always has exactly these three columns,
/// in this display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColumnId {
    /// Work not started yet
    #[serde(rename = "to-do")]
    ToDo,
    /// Work currently being done
    #[serde(rename = "in-progress")]
    InProgress,
    /// Finished work
    #[serde(rename = "done")]
    Done,
}

impl ColumnId {
    /// All column ids in display order
    pub const ALL: [ColumnId; 3] = [ColumnId::ToDo, ColumnId::InProgress, ColumnId::Done];

    /// Wire name of the column (e.g. "in-progress")
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnId::ToDo => "to-do",
            ColumnId::InProgress => "in-progress",
            ColumnId::Done => "done",
        }
    }

    /// Label shown for the column when no title is configured
    pub fn default_title(self) -> &'static str {
        match self {
            ColumnId::ToDo => "TO-DO",
            ColumnId::InProgress => "IN-PROGRESS",
            ColumnId::Done => "DONE",
        }
    }

    /// Position of the column in display order
    pub(crate) fn position(self) -> usize {
        match self {
            ColumnId::ToDo => 0,
            ColumnId::InProgress => 1,
            ColumnId::Done => 2,
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to-do" => Ok(ColumnId::ToDo),
            "in-progress" => Ok(ColumnId::InProgress),
            "done" => Ok(ColumnId::Done),
            _ => Err(BoardError::UnknownColumn(s.to_string())),
        }
    }
}

/// An ordered bucket of tasks
///
/// Position in `tasks` is the display rank, index 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub(crate) id: ColumnId,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) tasks: Vec<Task>,
}

impl Column {
    /// Create a column with the given title and tasks
    pub fn new(id: ColumnId, title: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks,
        }
    }

    /// Create an empty column carrying its default title
    pub fn empty(id: ColumnId) -> Self {
        Self::new(id, id.default_title(), Vec::new())
    }

    pub fn id(&self) -> ColumnId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Find the index of a task in this column
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }
}
