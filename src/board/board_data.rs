use super::column::{Column, ColumnId};
use super::error::BoardError;
use super::task::{Task, TaskId};
use std::collections::HashMap;

/// The task board aggregate
///
/// A Board is a value: the engine never mutates one in place, it clones the
/// current board and returns the modified copy. Whoever owns the current
/// Board replaces it wholesale after each operation.
///
/// Invariants held by every Board value:
/// 1. every task id appears in exactly one column, exactly once
/// 2. column task sequences are gapless (plain `Vec` positions)
/// 3. the column set is exactly [`ColumnId::ALL`], in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Columns in display order, always one per [`ColumnId`]
    pub(crate) columns: Vec<Column>,

    /// Task id → owning column, for O(1) duplicate detection
    ///
    /// Kept in sync with `columns` by every mutating helper below. Not
    /// serialized; rebuilt by [`Board::new`] during deserialization.
    pub(crate) task_index: HashMap<TaskId, ColumnId>,

    /// Counter for generating unique task IDs
    pub(crate) task_counter: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Create a board with the three fixed columns and no tasks
    pub fn empty() -> Self {
        Self {
            columns: ColumnId::ALL.iter().map(|id| Column::empty(*id)).collect(),
            task_index: HashMap::new(),
            task_counter: 0,
        }
    }

    /// Build a board from column definitions, validating every invariant
    ///
    /// Columns may be given in any order; they are stored in display order.
    ///
    /// # Errors
    /// - `DuplicateColumn` if a column id is given twice
    /// - `MissingColumn` if one of the fixed columns is absent
    /// - `InvalidTask` if a task has an empty id or a blank title
    /// - `DuplicateTask` if a task id appears more than once anywhere
    pub fn new(columns: Vec<Column>) -> Result<Self, BoardError> {
        let mut slots: [Option<Column>; 3] = [None, None, None];
        for column in columns {
            let slot = &mut slots[column.id.position()];
            if slot.is_some() {
                return Err(BoardError::DuplicateColumn(column.id.to_string()));
            }
            *slot = Some(column);
        }

        let mut ordered = Vec::with_capacity(slots.len());
        for (id, slot) in ColumnId::ALL.iter().zip(slots) {
            match slot {
                Some(column) => ordered.push(column),
                None => return Err(BoardError::MissingColumn(id.to_string())),
            }
        }

        let mut task_index = HashMap::new();
        for column in &ordered {
            for task in &column.tasks {
                if task.id().as_str().is_empty() || task.title().trim().is_empty() {
                    return Err(BoardError::InvalidTask(task.id().clone()));
                }
                if task_index.insert(task.id().clone(), column.id).is_some() {
                    return Err(BoardError::DuplicateTask(task.id().clone()));
                }
            }
        }

        Ok(Self {
            columns: ordered,
            task_index,
            task_counter: 0,
        })
    }

    /// Counter value the next id will be derived from
    pub fn task_counter(&self) -> u64 {
        self.task_counter
    }

    /// Raise the id counter (never lowers it)
    ///
    /// Used when restoring a board whose earlier ids must not be handed out
    /// again.
    pub fn with_task_counter(mut self, counter: u64) -> Self {
        self.task_counter = self.task_counter.max(counter);
        self
    }

    /// Generate a new unique task ID
    ///
    /// Counter-based, so ids never collide under rapid successive inserts.
    /// Numbers already taken by existing tasks are skipped.
    pub(crate) fn generate_task_id(&mut self) -> TaskId {
        loop {
            self.task_counter += 1;
            let id = TaskId::new(self.task_counter.to_string());
            if !self.task_index.contains_key(&id) {
                return id;
            }
        }
    }

    pub(crate) fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        &mut self.columns[id.position()]
    }

    /// Remove and return the task at `index` in `column`
    ///
    /// # Errors
    /// `IndexOutOfRange` if the column has no task at `index`
    pub(crate) fn remove_at(&mut self, column: ColumnId, index: usize) -> Result<Task, BoardError> {
        let tasks = &mut self.column_mut(column).tasks;
        if index >= tasks.len() {
            return Err(BoardError::IndexOutOfRange {
                column,
                index,
                len: tasks.len(),
            });
        }
        let task = tasks.remove(index);
        self.task_index.remove(task.id());
        Ok(task)
    }

    /// Insert `task` at `index` in `column`, clamping to the tail
    pub(crate) fn insert_at(&mut self, column: ColumnId, index: usize, task: Task) {
        self.task_index.insert(task.id().clone(), column);
        let tasks = &mut self.column_mut(column).tasks;
        let index = index.min(tasks.len());
        tasks.insert(index, task);
    }

    /// Append `task` to the end of `column`
    pub(crate) fn push(&mut self, column: ColumnId, task: Task) {
        self.task_index.insert(task.id().clone(), column);
        self.column_mut(column).tasks.push(task);
    }

    /// Re-verify the board invariants
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), BoardError> {
        for (position, id) in ColumnId::ALL.iter().enumerate() {
            match self.columns.get(position) {
                Some(column) if column.id == *id => {}
                _ => return Err(BoardError::MissingColumn(id.to_string())),
            }
        }
        if self.columns.len() != ColumnId::ALL.len() {
            let extra = &self.columns[ColumnId::ALL.len()];
            return Err(BoardError::DuplicateColumn(extra.id.to_string()));
        }

        let mut seen = HashMap::new();
        for column in &self.columns {
            for task in &column.tasks {
                if seen.insert(task.id(), column.id).is_some() {
                    return Err(BoardError::DuplicateTask(task.id().clone()));
                }
                if self.task_index.get(task.id()) != Some(&column.id) {
                    return Err(BoardError::IndexMismatch(task.id().clone()));
                }
            }
        }
        if let Some(stale) = self.task_index.keys().find(|id| !seen.contains_key(id)) {
            return Err(BoardError::IndexMismatch(stale.clone()));
        }
        Ok(())
    }
}
