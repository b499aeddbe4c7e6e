use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Rectangular board of cells, indexed by `(row, column)`.
///
/// Every cell's stored position matches its slot and ids are unique, counted in row-major order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Grid {
    /// Builds a fully covered grid whose mines are given by `is_mine(row-major index)`.
    pub(crate) fn from_mine_fn(
        (rows, columns): Coord2,
        mut is_mine: impl FnMut(CellCount) -> bool,
    ) -> Self {
        let mut id_counter: CellCount = 0;
        let mut mine_count: CellCount = 0;
        let shape = (usize::from(rows), usize::from(columns));
        let cells = Array2::from_shape_fn(shape, |(row, column)| {
            let id = CellId(id_counter);
            id_counter += 1;
            let mine = is_mine(id.0);
            if mine {
                mine_count += 1;
            }
            // bounded by the Coord-sized shape
            Cell::new(id, (row as Coord, column as Coord), mine)
        });
        Self { cells, mine_count }
    }

    /// Handcrafted grid with mines at exactly `mine_coords`, every cell covered.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        GameConfig::check_size(size)?;
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidMinePosition);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let columns = CellCount::from(size.1);
        Ok(Self::from_mine_fn(size, |index| {
            // row-major index back into (row, column)
            mine_mask[[(index / columns) as usize, (index % columns) as usize]]
        }))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// `(rows, columns)`.
    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Cells of one row, left to right.
    pub fn row_cells(&self, row: Coord) -> impl Iterator<Item = &Cell> {
        self.cells.row(row.into()).into_iter()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.iter().filter(|cell| cell.status().is_flagged()).count() as CellCount
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
