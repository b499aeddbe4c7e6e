use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid size {rows}x{columns} is outside the supported range")]
    InvalidSize { rows: Coord, columns: Coord },
    #[error("Mine density {0} is outside [0, 1]")]
    InvalidDensity(f64),
    #[error("Mine position lies outside the grid")]
    InvalidMinePosition,
}

pub type Result<T> = core::result::Result<T, GameError>;
