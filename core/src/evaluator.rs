use serde::{Deserialize, Serialize};

use crate::*;

/// Every safe cell has been opened. Mines may stay covered or flagged.
pub fn is_won(grid: &Grid) -> bool {
    grid.iter()
        .all(|cell| cell.is_mine() || !cell.status().is_covered())
}

/// Some mine has exploded.
pub fn is_lost(grid: &Grid) -> bool {
    grid.iter()
        .any(|cell| cell.status() == DisplayStatus::RevealedExplodedMine)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Terminal status of `grid`; an explosion counts as a loss even when no safe cell is left.
pub fn evaluate(grid: &Grid) -> GameStatus {
    if is_lost(grid) {
        GameStatus::Lost
    } else if is_won(grid) {
        GameStatus::Won
    } else {
        GameStatus::InProgress
    }
}
