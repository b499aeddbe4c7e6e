use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Stable identity of a cell, assigned in row-major order at generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(pub CellCount);

/// Number of mines around a revealed safe cell, always within `0..=8`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AdjacentMines(u8);

impl AdjacentMines {
    pub const MAX: u8 = 8;

    pub const fn new(count: u8) -> Option<Self> {
        if count <= Self::MAX {
            Some(Self(count))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Player-visible state of a cell.
///
/// Transitions only go forward: `Covered <-> Flagged`, and `Covered` into any revealed state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum DisplayStatus {
    Covered,
    Flagged,
    RevealedMine,
    RevealedExplodedMine,
    Revealed(AdjacentMines),
}

impl DisplayStatus {
    const COUNT_NAMES: [&'static str; 9] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
    ];
    const COUNT_GLYPHS: [&'static str; 9] = ["", "1", "2", "3", "4", "5", "6", "7", "8"];

    /// Status of a safe cell with `count` adjacent mines.
    ///
    /// # Panics
    ///
    /// When `count` exceeds 8, which can only come from a broken adjacency count.
    pub fn revealed(count: u8) -> Self {
        match AdjacentMines::new(count) {
            Some(count) => Self::Revealed(count),
            None => panic!("invalid number of adjacent mines: {count}"),
        }
    }

    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Covered)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count.get()),
            _ => None,
        }
    }

    /// Style name the renderer keys its visuals on.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Covered => "covered",
            Self::Flagged => "flagged",
            Self::RevealedMine => "mine",
            Self::RevealedExplodedMine => "mine_exploded",
            Self::Revealed(count) => Self::COUNT_NAMES[count.get() as usize],
        }
    }

    /// Text shown inside the cell.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Covered => "",
            Self::Flagged => "\u{1f6a9}",
            Self::RevealedMine | Self::RevealedExplodedMine => "\u{1f4a3}",
            Self::Revealed(count) => Self::COUNT_GLYPHS[count.get() as usize],
        }
    }
}

impl Default for DisplayStatus {
    fn default() -> Self {
        Self::Covered
    }
}

impl From<DisplayStatus> for &'static str {
    fn from(status: DisplayStatus) -> Self {
        status.name()
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One addressable position of the grid.
///
/// Only the display status changes after generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    id: CellId,
    row: Coord,
    column: Coord,
    is_mine: bool,
    status: DisplayStatus,
}

impl Cell {
    pub(crate) const fn new(id: CellId, (row, column): Coord2, is_mine: bool) -> Self {
        Self {
            id,
            row,
            column,
            is_mine,
            status: DisplayStatus::Covered,
        }
    }

    pub const fn id(&self) -> CellId {
        self.id
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn column(&self) -> Coord {
        self.column
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.column)
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn status(&self) -> DisplayStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: DisplayStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revealed_maps_every_valid_count() {
        for count in 0..=8 {
            assert_eq!(DisplayStatus::revealed(count).adjacent_mines(), Some(count));
        }
    }

    #[test]
    #[should_panic(expected = "invalid number of adjacent mines: 9")]
    fn revealed_rejects_out_of_range_count() {
        DisplayStatus::revealed(9);
    }

    #[test]
    fn names_and_glyphs() {
        assert_eq!(DisplayStatus::Covered.name(), "covered");
        assert_eq!(DisplayStatus::RevealedExplodedMine.name(), "mine_exploded");
        assert_eq!(DisplayStatus::revealed(0).name(), "zero");
        assert_eq!(DisplayStatus::revealed(8).name(), "eight");

        assert_eq!(DisplayStatus::revealed(0).glyph(), "");
        assert_eq!(DisplayStatus::revealed(3).glyph(), "3");
        assert_eq!(DisplayStatus::Flagged.glyph(), "🚩");
        assert_eq!(DisplayStatus::RevealedMine.glyph(), "💣");
    }

    #[test]
    fn status_serializes_as_name() {
        let json = serde_json::to_string(&DisplayStatus::revealed(2)).unwrap();
        assert_eq!(json, "\"two\"");
    }

    #[test]
    fn cell_serializes_with_camel_case_fields() {
        let cell = Cell::new(CellId(7), (1, 2), true);
        let json = serde_json::to_value(cell).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "row": 1,
                "column": 2,
                "isMine": true,
                "status": "covered",
            })
        );
    }
}
