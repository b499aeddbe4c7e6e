use crate::*;
pub use shuffle::*;

mod shuffle;

pub trait GridGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid>;
}

/// Validates `rows`, `columns` and `mine_density`, then lays out a fresh covered grid with
/// exactly `round(rows * columns * mine_density)` uniformly placed mines.
pub fn generate_grid(rows: Coord, columns: Coord, mine_density: f64, seed: u64) -> Result<Grid> {
    let config = GameConfig::new(rows, columns, mine_density)?;
    ShuffleGridGenerator::new(seed).generate(config)
}
