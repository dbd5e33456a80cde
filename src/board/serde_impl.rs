//! Serialization and deserialization implementations for Board
//!
//! Deserialization goes through [`Board::new`], so a board read from a seed
//! file is rejected unless it satisfies every board invariant.

use super::board_data::Board;
use super::column::Column;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// On-disk shape of a board
#[derive(Serialize, Deserialize)]
struct BoardRepr {
    #[serde(default)]
    task_counter: u64,
    #[serde(default)]
    columns: Vec<Column>,
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BoardRepr {
            task_counter: self.task_counter,
            columns: self.columns.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = BoardRepr::deserialize(deserializer)?;
        let board = Board::new(repr.columns).map_err(D::Error::custom)?;
        Ok(board.with_task_counter(repr.task_counter))
    }
}
