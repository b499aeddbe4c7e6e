use serde::{Deserialize, Serialize};

use crate::*;

/// User action forwarded by the UI.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Reveal(Coord2),
    ToggleFlag(Coord2),
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionOutcome {
    Reveal(RevealOutcome),
    Mark(MarkOutcome),
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Mark(outcome) => outcome.has_update(),
        }
    }
}

/// Represents a game from start to finish.
///
/// Owns the current grid and replaces it wholesale on every accepted action, so a reader
/// holding the previous grid never observes a half-applied move.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    flagged_count: CellCount,
    is_won: bool,
    is_lost: bool,
}

impl GameSession {
    /// Fresh game; won and lost both start out false.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let grid = ShuffleGridGenerator::new(seed).generate(config)?;
        Ok(Self::from_parts(config, grid))
    }

    /// Session over a prepared grid, e.g. one built with [`Grid::from_mine_coords`].
    ///
    /// The grid may already be in play, so won and lost are evaluated from it.
    pub fn with_grid(grid: Grid) -> Self {
        let (rows, columns) = grid.size();
        let mine_density = f64::from(grid.mine_count()) / f64::from(grid.total_cells());
        let config = GameConfig {
            rows,
            columns,
            mine_density,
        };
        let mut session = Self::from_parts(config, grid);
        session.refresh_status();
        session
    }

    fn from_parts(config: GameConfig, grid: Grid) -> Self {
        Self {
            config,
            flagged_count: grid.flagged_count(),
            grid,
            is_won: false,
            is_lost: false,
        }
    }

    /// Starts over with a fresh grid. On error the current game is kept as is.
    pub fn new_game(&mut self, config: GameConfig, seed: u64) -> Result<()> {
        *self = Self::new(config, seed)?;
        log::debug!(
            "New {}x{} game with {} mines",
            config.rows,
            config.columns,
            self.grid.mine_count()
        );
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_won(&self) -> bool {
        self.is_won
    }

    pub fn is_lost(&self) -> bool {
        self.is_lost
    }

    pub fn status(&self) -> GameStatus {
        if self.is_lost {
            GameStatus::Lost
        } else if self.is_won {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.grid.mine_count()) - i64::from(self.flagged_count)
    }

    pub fn apply(&mut self, action: Action) -> Result<ActionOutcome> {
        Ok(match action {
            Action::Reveal(coords) => ActionOutcome::Reveal(self.reveal(coords)?),
            Action::ToggleFlag(coords) => ActionOutcome::Mark(self.toggle_flag(coords)?),
        })
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        if self.is_finished() {
            log::debug!("Ignoring reveal at {:?}, game already ended", coords);
            return Ok(RevealOutcome::NoChange);
        }
        if !self.grid[coords].status().is_covered() {
            log::debug!("Ignoring reveal at {:?}, cell is not covered", coords);
            return Ok(RevealOutcome::NoChange);
        }

        let mut next = self.grid.clone();
        next.reveal(coords)?;
        self.grid = next;
        self.refresh_status();

        Ok(match self.status() {
            GameStatus::Lost => {
                log::debug!("Game lost at {:?}", coords);
                RevealOutcome::HitMine
            }
            GameStatus::Won => {
                log::debug!("Game won at {:?}", coords);
                RevealOutcome::Won
            }
            GameStatus::InProgress => RevealOutcome::Revealed,
        })
    }

    fn refresh_status(&mut self) {
        self.is_lost = is_lost(&self.grid);
        self.is_won = !self.is_lost && is_won(&self.grid);
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.grid.validate_coords(coords)?;

        if self.is_finished() {
            log::debug!("Ignoring flag at {:?}, game already ended", coords);
            return Ok(MarkOutcome::NoChange);
        }

        let mut next = self.grid.clone();
        let outcome = next.toggle_flag(coords)?;
        if outcome.has_update() {
            if next[coords].status().is_flagged() {
                self.flagged_count += 1;
            } else {
                self.flagged_count -= 1;
            }
            self.grid = next;
        }
        Ok(outcome)
    }
}
