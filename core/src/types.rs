/// Single coordinate axis used for grid rows, columns, and positions.
pub type Coord = u16;

/// Count type used for mine counts, cell counts, and cell ids.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, column)`, both 0-based.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// `(row, column)` steps to the eight surrounding cells, read like a page:
/// the row above left to right, then the same row, then the row below.
const COMPASS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Moves one step from `(row, column)`, staying on a board of size `(rows, columns)`.
fn step(
    (row, column): Coord2,
    (d_row, d_column): (i8, i8),
    (rows, columns): Coord2,
) -> Option<Coord2> {
    let row = row.checked_add_signed(d_row.into()).filter(|&r| r < rows)?;
    let column = column.checked_add_signed(d_column.into()).filter(|&c| c < columns)?;
    Some((row, column))
}

/// Walks the cells around `center` that exist on the board, in [`COMPASS`] order.
///
/// Holds no borrow of the grid, so callers may mutate cells while walking it.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    remaining: core::slice::Iter<'static, (i8, i8)>,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            remaining: COMPASS.iter(),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (center, bounds) = (self.center, self.bounds);
        self.remaining.find_map(|&delta| step(center, delta, bounds))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining.len()))
    }
}
