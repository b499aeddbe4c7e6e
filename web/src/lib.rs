use clap::Parser;
use sweeper_core::{
    Action, ActionOutcome, Coord, DENSITY_PERCENT_CHOICES, GameConfig, GameSession, MarkOutcome,
    RevealOutcome, SIDE_CHOICES,
};
use wasm_bindgen::prelude::*;

mod snapshot;
mod utils;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    /// Arguments from the page's URL hash, e.g. `#-vv --seed 42`.
    fn from_location() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let words = utils::location_hash_words(&window.location());
        Self::try_parse_from(words).unwrap_or_else(|err| {
            gloo::console::warn!(format!("Ignoring URL hash arguments: {err}"));
            Self::default()
        })
    }
}

/// Explicit seed first, then a `--seed` from the URL hash, then `Math.random`.
fn pick_seed(seed: Option<u64>) -> u64 {
    seed.or_else(|| Args::from_location().seed)
        .unwrap_or_else(utils::js_random_seed)
}

#[wasm_bindgen(start)]
pub fn run_app() {
    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let args = Args::from_location();

    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(seed) = args.seed {
        log::debug!("forced seed: {}", seed);
    }

    log::debug!("Minesweeper core ready");
}

/// Square side lengths offered by the difficulty selector.
#[wasm_bindgen(js_name = sideChoices)]
pub fn side_choices() -> Vec<Coord> {
    SIDE_CHOICES.to_vec()
}

/// Mine densities, in percent, offered by the difficulty selector.
#[wasm_bindgen(js_name = densityChoices)]
pub fn density_choices() -> Vec<u8> {
    DENSITY_PERCENT_CHOICES.to_vec()
}

fn outcome_name(outcome: ActionOutcome) -> &'static str {
    match outcome {
        ActionOutcome::Reveal(RevealOutcome::NoChange)
        | ActionOutcome::Mark(MarkOutcome::NoChange) => "noChange",
        ActionOutcome::Reveal(RevealOutcome::Revealed) => "revealed",
        ActionOutcome::Reveal(RevealOutcome::HitMine) => "hitMine",
        ActionOutcome::Reveal(RevealOutcome::Won) => "won",
        ActionOutcome::Mark(MarkOutcome::Changed) => "changed",
    }
}

/// One game as seen from JavaScript. The UI forwards clicks and redraws from `snapshot()`.
#[wasm_bindgen]
pub struct Minesweeper {
    session: GameSession,
    seed: u64,
}

#[wasm_bindgen]
impl Minesweeper {
    #[wasm_bindgen(constructor)]
    pub fn new(
        rows: Coord,
        columns: Coord,
        mine_density: f64,
        seed: Option<u64>,
    ) -> Result<Minesweeper, JsError> {
        let config = GameConfig::new(rows, columns, mine_density)?;
        let seed = pick_seed(seed);
        let session = GameSession::new(config, seed)?;
        Ok(Self { session, seed })
    }

    /// Replaces the current game; on error the old one stays playable.
    #[wasm_bindgen(js_name = newGame)]
    pub fn new_game(
        &mut self,
        rows: Coord,
        columns: Coord,
        mine_density: f64,
        seed: Option<u64>,
    ) -> Result<(), JsError> {
        let config = GameConfig::new(rows, columns, mine_density)?;
        let seed = pick_seed(seed);
        self.session.new_game(config, seed)?;
        self.seed = seed;
        Ok(())
    }

    pub fn reveal(&mut self, row: Coord, column: Coord) -> Result<String, JsError> {
        self.apply(Action::Reveal((row, column)))
    }

    /// Right click and long press both land here.
    #[wasm_bindgen(js_name = toggleFlag)]
    pub fn toggle_flag(&mut self, row: Coord, column: Coord) -> Result<String, JsError> {
        self.apply(Action::ToggleFlag((row, column)))
    }

    /// Seed of the current board; passing it back to `newGame` replays the same layout.
    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> Coord {
        self.session.grid().rows()
    }

    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> Coord {
        self.session.grid().columns()
    }

    #[wasm_bindgen(js_name = isWon)]
    pub fn is_won(&self) -> bool {
        self.session.is_won()
    }

    #[wasm_bindgen(js_name = isLost)]
    pub fn is_lost(&self) -> bool {
        self.session.is_lost()
    }

    #[wasm_bindgen(js_name = minesLeft)]
    pub fn mines_left(&self) -> i32 {
        self.session.mines_left() as i32
    }

    #[wasm_bindgen(js_name = statusAt)]
    pub fn status_at(&self, row: Coord, column: Coord) -> Result<String, JsError> {
        let grid = self.session.grid();
        let coords = grid.validate_coords((row, column))?;
        Ok(grid[coords].status().name().to_owned())
    }

    #[wasm_bindgen(js_name = glyphAt)]
    pub fn glyph_at(&self, row: Coord, column: Coord) -> Result<String, JsError> {
        let grid = self.session.grid();
        let coords = grid.validate_coords((row, column))?;
        Ok(grid[coords].status().glyph().to_owned())
    }

    /// JSON with the board dimensions, won/lost flags, mines left and every cell by row.
    pub fn snapshot(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&snapshot::Snapshot::of(&self.session))?)
    }
}

impl Minesweeper {
    fn apply(&mut self, action: Action) -> Result<String, JsError> {
        let outcome = self.session.apply(action).inspect_err(|err| {
            log::warn!("Rejected {:?}: {}", action, err);
        })?;
        Ok(outcome_name(outcome).to_owned())
    }
}
