//! Computer opponent built on the fixed-budget alpha-beta search.
//!
//! Options:
//! - `Depth`: ply budget used when a call does not ask for one (default 4).
//! - `Seed`: reseeds the tie-break generator; `random` draws a fresh seed.

use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineError, EngineOutput, SearchParams};
use crate::game_state::game_state::GameState;
use crate::search::minimax::MinimaxSearch;

pub const DEFAULT_DEPTH: u8 = 4;

pub struct MinimaxEngine {
    default_depth: u8,
    search: MinimaxSearch,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8, seed: Option<u64>) -> Self {
        Self {
            default_depth: default_depth.max(1),
            search: MinimaxSearch::new(seed),
        }
    }

    #[inline]
    pub fn default_depth(&self) -> u8 {
        self.default_depth
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH, None)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Mailbox Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        let invalid = || EngineError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        if name.eq_ignore_ascii_case("Depth") {
            let parsed = value.trim().parse::<u8>().map_err(|_| invalid())?;
            if parsed == 0 {
                return Err(invalid());
            }
            self.default_depth = parsed;
            debug!(depth = parsed, "engine depth set");
            return Ok(());
        }
        if name.eq_ignore_ascii_case("Seed") {
            let seed = match value.trim() {
                v if v.eq_ignore_ascii_case("random") => None,
                v => Some(v.parse::<u64>().map_err(|_| invalid())?),
            };
            self.search.reseed(seed);
            debug!(?seed, "engine reseeded");
            return Ok(());
        }
        Err(EngineError::UnknownOption(name.to_owned()))
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineError> {
        let depth = params.depth.unwrap_or(self.default_depth).max(1);
        let report = self.search.best_move(game_state, depth)?;

        let mut out = EngineOutput {
            best_move: Some(report.best_move),
            score: Some(report.score),
            boards_evaluated: report.boards_evaluated,
            info_lines: report.info_lines,
        };
        if params.depth.is_some() {
            out.info_lines
                .push(format!("info string minimax_engine requested_depth {depth}"));
        }
        Ok(out)
    }
}
