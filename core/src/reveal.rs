use alloc::collections::VecDeque;

use crate::*;

impl Grid {
    /// Reveals a covered cell in place.
    ///
    /// A mine uncovers every mine and marks `coords` as the exploded one. A safe cell shows its
    /// adjacent mine count, and a zero flood-fills outward through covered safe cells. Anything
    /// other than a covered target is left untouched.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        if !self[coords].status().is_covered() {
            return Ok(RevealOutcome::NoChange);
        }

        if self[coords].is_mine() {
            self.explode(coords);
            return Ok(RevealOutcome::HitMine);
        }

        let adjacent_mines = self.adjacent_mine_count(coords);
        self[coords].set_status(DisplayStatus::revealed(adjacent_mines));
        log::debug!("Revealed cell at {:?}, mine count: {}", coords, adjacent_mines);

        if adjacent_mines == 0 {
            let opened = self.flood_reveal(coords);
            log::debug!("Flood-fill from {:?} opened {} more cells", coords, opened);
        }

        Ok(RevealOutcome::Revealed)
    }

    /// Flips a cell between covered and flagged; any revealed cell is left as is.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use DisplayStatus::*;
        use MarkOutcome::*;

        let coords = self.validate_coords(coords)?;
        let cell = &mut self[coords];

        Ok(match cell.status() {
            Covered => {
                cell.set_status(Flagged);
                Changed
            }
            Flagged => {
                cell.set_status(Covered);
                Changed
            }
            _ => NoChange,
        })
    }

    /// Opens the zero region around an already revealed zero cell, returning how many cells it
    /// opened.
    ///
    /// Only covered cells are ever opened or queued, so each cell is visited at most once.
    fn flood_reveal(&mut self, origin: Coord2) -> CellCount {
        let mut opened: CellCount = 0;
        let mut to_visit = VecDeque::from([origin]);

        while let Some(visit_coords) = to_visit.pop_front() {
            for pos in self.iter_neighbors(visit_coords) {
                let neighbor = self[pos];
                if !neighbor.status().is_covered() || neighbor.is_mine() {
                    continue;
                }

                let adjacent_mines = self.adjacent_mine_count(pos);
                self[pos].set_status(DisplayStatus::revealed(adjacent_mines));
                opened += 1;
                log::trace!(
                    "Flood opened cell at {:?}, mine count: {}",
                    pos,
                    adjacent_mines
                );

                if adjacent_mines == 0 {
                    to_visit.push_back(pos);
                }
            }
        }

        opened
    }

    fn explode(&mut self, triggered: Coord2) {
        for cell in self.iter_mut().filter(|cell| cell.is_mine()) {
            let status = if cell.coords() == triggered {
                DisplayStatus::RevealedExplodedMine
            } else {
                DisplayStatus::RevealedMine
            };
            cell.set_status(status);
        }
        log::debug!("Mine hit at {:?}", triggered);
    }
}

/// Whole-grid reveal: returns the next grid and leaves `grid` untouched.
pub fn reveal_cell(grid: &Grid, coords: Coord2) -> Result<Grid> {
    let mut next = grid.clone();
    next.reveal(coords)?;
    Ok(next)
}

/// Whole-grid flag toggle: returns the next grid and leaves `grid` untouched.
pub fn toggle_flag(grid: &Grid, coords: Coord2) -> Result<Grid> {
    let mut next = grid.clone();
    next.toggle_flag(coords)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use DisplayStatus::*;

    fn grid(size: Coord2, mines: &[Coord2]) -> Grid {
        Grid::from_mine_coords(size, mines).unwrap()
    }

    #[test]
    fn all_safe_grid_opens_completely_from_any_cell() {
        for start in [(0, 0), (2, 3), (4, 4)] {
            let grid = generate_grid(5, 5, 0.0, 9).unwrap();
            let next = reveal_cell(&grid, start).unwrap();

            assert!(next.iter().all(|cell| cell.status() == DisplayStatus::revealed(0)));
            assert!(is_won(&next));
            assert!(!is_lost(&next));
        }
    }

    #[test]
    fn flood_fill_stops_at_numbers() {
        let grid = grid((3, 3), &[(2, 2)]);
        let next = reveal_cell(&grid, (0, 0)).unwrap();

        assert_eq!(next[(0, 0)].status(), DisplayStatus::revealed(0));
        assert_eq!(next[(1, 1)].status(), DisplayStatus::revealed(1));
        assert_eq!(next[(1, 2)].status(), DisplayStatus::revealed(1));
        assert_eq!(next[(2, 2)].status(), Covered);
        assert!(is_won(&next));
    }

    #[test]
    fn numbered_cell_reveals_alone() {
        let grid = grid((3, 3), &[(0, 0)]);
        let next = reveal_cell(&grid, (1, 1)).unwrap();

        assert_eq!(next[(1, 1)].status(), DisplayStatus::revealed(1));
        assert_eq!(next.iter().filter(|cell| !cell.status().is_covered()).count(), 1);
    }

    #[test]
    fn flood_fill_skips_flagged_cells() {
        let mut grid = grid((1, 5), &[(0, 4)]);
        grid.toggle_flag((0, 1)).unwrap();

        grid.reveal((0, 0)).unwrap();

        assert_eq!(grid[(0, 0)].status(), DisplayStatus::revealed(0));
        assert_eq!(grid[(0, 1)].status(), Flagged);
        assert_eq!(grid[(0, 2)].status(), Covered);
    }

    #[test]
    fn flood_fill_walks_around_walls() {
        // a column of mines with a gap at the bottom splits the field
        let mut grid = grid((5, 5), &[(0, 2), (1, 2), (2, 2)]);

        assert_eq!(grid.reveal((0, 0)).unwrap(), RevealOutcome::Revealed);

        assert_eq!(grid[(0, 4)].status(), DisplayStatus::revealed(0));
        assert_eq!(grid[(4, 2)].status(), DisplayStatus::revealed(0));
        assert_eq!(grid[(3, 2)].status(), DisplayStatus::revealed(1));
        assert!(is_won(&grid));
    }

    #[test]
    fn hitting_mine_reveals_all_mines() {
        let grid = grid((3, 3), &[(0, 0), (1, 2), (2, 1)]);
        let mut flagged = toggle_flag(&grid, (2, 1)).unwrap();
        flagged.reveal((2, 2)).unwrap();

        let next = reveal_cell(&flagged, (0, 0)).unwrap();

        assert_eq!(next[(0, 0)].status(), RevealedExplodedMine);
        assert_eq!(next[(1, 2)].status(), RevealedMine);
        assert_eq!(next[(2, 1)].status(), RevealedMine);
        assert_eq!(next[(2, 2)].status(), DisplayStatus::revealed(2));
        for cell in next.iter().filter(|cell| !cell.is_mine()) {
            assert_eq!(cell.status(), flagged[cell.coords()].status());
        }
        assert!(is_lost(&next));
    }

    #[test]
    fn reveal_outcomes() {
        let mut grid = grid((2, 2), &[(0, 0)]);

        assert_eq!(grid.reveal((1, 1)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(grid.reveal((1, 1)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(grid.reveal((0, 0)).unwrap(), RevealOutcome::HitMine);
        assert_eq!(grid.reveal((5, 0)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn flagged_cell_is_not_revealed() {
        let mut grid = grid((2, 2), &[(0, 0)]);
        grid.toggle_flag((0, 0)).unwrap();

        assert_eq!(grid.reveal((0, 0)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(grid[(0, 0)].status(), Flagged);
    }

    #[test]
    fn whole_grid_operations_leave_input_untouched() {
        let grid = grid((3, 3), &[(1, 1)]);
        let before = grid.clone();

        let revealed = reveal_cell(&grid, (0, 0)).unwrap();
        let flagged = toggle_flag(&grid, (2, 2)).unwrap();

        assert_eq!(grid, before);
        assert_ne!(revealed, before);
        assert_eq!(flagged[(2, 2)].status(), Flagged);
    }

    #[test]
    fn toggle_flag_twice_restores_covered() {
        let grid = grid((2, 2), &[(0, 1)]);
        let twice = toggle_flag(&toggle_flag(&grid, (0, 1)).unwrap(), (0, 1)).unwrap();

        assert_eq!(twice[(0, 1)].status(), Covered);
        assert_eq!(twice, grid);
    }

    #[test]
    fn toggle_flag_ignores_revealed_cells() {
        let mut grid = grid((2, 2), &[(0, 0)]);
        grid.reveal((1, 1)).unwrap();

        assert_eq!(grid.toggle_flag((1, 1)).unwrap(), MarkOutcome::NoChange);
        assert_eq!(grid[(1, 1)].status(), DisplayStatus::revealed(1));
        assert_eq!(grid.toggle_flag((2, 2)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn large_open_board_floods_iteratively() {
        let grid = generate_grid(MAX_SIDE, MAX_SIDE, 0.0, 0).unwrap();
        let next = reveal_cell(&grid, (250, 250)).unwrap();

        assert!(is_won(&next));
    }
}
