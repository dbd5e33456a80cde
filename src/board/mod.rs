//! Board domain models
//!
//! This module contains the board state model and its invariants.
//! It is split into submodules for better organization:
//! - `task`: Task identity and immutable task fields
//! - `column`: The fixed column set and ordered task buckets
//! - `board_data`: The Board aggregate, its constructor and id generation
//! - `queries`: Read-only accessors over a Board
//! - `serde_impl`: Serialization/deserialization implementations
//! - `error`: Error taxonomy shared with the engine

mod board_data;
mod column;
mod error;
mod queries;
mod serde_impl;
mod task;

// Re-export all public types
pub use board_data::Board;
pub use column::{Column, ColumnId};
pub use error::BoardError;
pub use task::{Task, TaskId};
