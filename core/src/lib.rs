#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use cell::*;
pub use error::*;
pub use evaluator::*;
pub use generator::*;
pub use grid::*;
pub use reveal::*;
pub use session::*;
pub use types::*;

mod adjacency;
mod cell;
mod error;
mod evaluator;
mod generator;
mod grid;
mod reveal;
mod session;
mod types;

/// Largest accepted number of rows or columns.
pub const MAX_SIDE: Coord = 500;

/// Square side lengths offered by the difficulty selector.
pub const SIDE_CHOICES: [Coord; 10] = [5, 10, 15, 20, 25, 30, 35, 40, 45, 50];

/// Mine densities, in percent, offered by the difficulty selector.
pub const DENSITY_PERCENT_CHOICES: [u8; 19] = [
    5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 85, 90, 95,
];

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub rows: Coord,
    pub columns: Coord,
    /// Fraction of cells holding a mine, within `[0, 1]`.
    pub mine_density: f64,
}

impl GameConfig {
    pub fn new(rows: Coord, columns: Coord, mine_density: f64) -> Result<Self> {
        Self {
            rows,
            columns,
            mine_density,
        }
        .validate()
    }

    /// Square grid from the selector presets, density given in percent.
    pub fn from_choices(side: Coord, density_percent: u8) -> Result<Self> {
        Self::new(side, side, f64::from(density_percent) / 100.0)
    }

    pub fn validate(self) -> Result<Self> {
        Self::check_size(self.size())?;
        if !self.mine_density.is_finite() || !(0.0..=1.0).contains(&self.mine_density) {
            return Err(GameError::InvalidDensity(self.mine_density));
        }
        Ok(self)
    }

    pub(crate) fn check_size((rows, columns): Coord2) -> Result<()> {
        if (1..=MAX_SIDE).contains(&rows) && (1..=MAX_SIDE).contains(&columns) {
            Ok(())
        } else {
            Err(GameError::InvalidSize { rows, columns })
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.columns)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    /// `round(total_cells * mine_density)`, halves rounding up.
    pub fn mine_count(&self) -> CellCount {
        let exact = f64::from(self.total_cells()) * self.mine_density;
        // saturating float cast also maps NaN to 0
        let rounded = (exact + 0.5) as CellCount;
        rounded.min(self.total_cells())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
            mine_density: 0.15,
        }
    }
}

/// Result of a right click or long press on a cell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub enum MarkOutcome {
    /// The cell is already open or the game is over; the board is untouched.
    NoChange,
    /// A covered cell got a flag or a flagged cell lost it.
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Result of a reveal.
///
/// Grid-level reveals report `NoChange`, `Revealed` or `HitMine`; only a
/// [`GameSession`] knows the whole game and upgrades a reveal to `Won`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub enum RevealOutcome {
    /// The target was flagged or already open, or the game is over.
    NoChange,
    /// A safe cell opened, along with its blank surroundings when it touches no mine.
    Revealed,
    /// The target was a mine: it exploded and every other mine is now shown.
    HitMine,
    /// A safe cell opened and no covered safe cell is left.
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mine_count_rounds_half_up() {
        assert_eq!(GameConfig::new(5, 5, 0.1).unwrap().mine_count(), 3);
        assert_eq!(GameConfig::new(2, 1, 0.25).unwrap().mine_count(), 1);
        assert_eq!(GameConfig::new(10, 10, 0.15).unwrap().mine_count(), 15);
        assert_eq!(GameConfig::new(3, 3, 0.0).unwrap().mine_count(), 0);
        assert_eq!(GameConfig::new(3, 3, 1.0).unwrap().mine_count(), 9);
    }

    #[test]
    fn rejects_bad_sizes() {
        assert_eq!(
            GameConfig::new(0, 5, 0.1),
            Err(GameError::InvalidSize {
                rows: 0,
                columns: 5
            })
        );
        assert_eq!(
            GameConfig::new(5, MAX_SIDE + 1, 0.1),
            Err(GameError::InvalidSize {
                rows: 5,
                columns: MAX_SIDE + 1
            })
        );
        assert!(GameConfig::new(MAX_SIDE, MAX_SIDE, 0.1).is_ok());
    }

    #[test]
    fn rejects_bad_densities() {
        assert_eq!(
            GameConfig::new(5, 5, -0.1),
            Err(GameError::InvalidDensity(-0.1))
        );
        assert_eq!(
            GameConfig::new(5, 5, 1.5),
            Err(GameError::InvalidDensity(1.5))
        );
        assert!(matches!(
            GameConfig::new(5, 5, f64::NAN),
            Err(GameError::InvalidDensity(_))
        ));
    }

    #[test]
    fn every_preset_is_valid() {
        for side in SIDE_CHOICES {
            for density in DENSITY_PERCENT_CHOICES {
                let config = GameConfig::from_choices(side, density).unwrap();
                assert!(config.mine_count() <= config.total_cells());
            }
        }
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn outcomes_report_updates() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::HitMine.has_update());
        assert!(MarkOutcome::Changed.has_update());
        assert!(!MarkOutcome::NoChange.has_update());
    }
}
