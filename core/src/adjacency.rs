use crate::*;

impl Grid {
    /// Mines among the up-to-8 in-bounds neighbors of `coords`, regardless of display status.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }

    /// In-bounds neighbor cells in NW, N, NE, W, E, SW, S, SE order.
    pub fn neighbor_cells(&self, coords: Coord2) -> impl Iterator<Item = &Cell> {
        self.iter_neighbors(coords).map(move |pos| &self[pos])
    }
}

pub fn count_adjacent_mines(grid: &Grid, cell: &Cell) -> u8 {
    grid.adjacent_mine_count(cell.coords())
}

pub fn neighbors<'a>(grid: &'a Grid, cell: &Cell) -> impl Iterator<Item = &'a Cell> + use<'a> {
    grid.neighbor_cells(cell.coords())
}
