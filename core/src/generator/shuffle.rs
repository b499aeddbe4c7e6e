use alloc::vec::Vec;

use super::*;

/// Generation strategy that shuffles every cell index and mines the first `mine_count` of them,
/// so each placement of that many mines is equally likely.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleGridGenerator {
    seed: u64,
}

impl ShuffleGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for ShuffleGridGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        use rand::prelude::*;

        let config = config.validate()?;
        let total_cells = config.total_cells();
        let mine_count = config.mine_count();

        if mine_count == 0 {
            log::warn!(
                "Density {} rounds to no mines on {} cells",
                config.mine_density,
                total_cells
            );
        } else if mine_count == total_cells {
            log::warn!("Density {} fills every cell with a mine", config.mine_density);
        }

        let mut indices: Vec<CellCount> = (0..total_cells).collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        // Fisher-Yates, walking down from the last slot
        for current in (1..indices.len()).rev() {
            let other = rng.random_range(0..=current);
            indices.swap(current, other);
        }

        let mut mine_mask = alloc::vec![false; indices.len()];
        for &index in &indices[..mine_count as usize] {
            mine_mask[index as usize] = true;
        }

        let grid = Grid::from_mine_fn(config.size(), |index| mine_mask[index as usize]);
        log::debug!(
            "Generated {}x{} grid with {} mines",
            config.rows,
            config.columns,
            grid.mine_count()
        );
        Ok(grid)
    }
}
