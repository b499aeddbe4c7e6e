use serde::Serialize;
use sweeper_core::{Cell, Coord, GameSession};

/// Everything the renderer needs to draw one frame.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snapshot<'a> {
    rows: Coord,
    columns: Coord,
    is_won: bool,
    is_lost: bool,
    mines_left: i64,
    cells: Vec<Vec<&'a Cell>>,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn of(session: &'a GameSession) -> Self {
        let grid = session.grid();
        Self {
            rows: grid.rows(),
            columns: grid.columns(),
            is_won: session.is_won(),
            is_lost: session.is_lost(),
            mines_left: session.mines_left(),
            cells: (0..grid.rows())
                .map(|row| grid.row_cells(row).collect())
                .collect(),
        }
    }
}
