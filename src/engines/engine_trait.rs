//! Engine abstraction layer used by the terminal front end.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use thiserror::Error;

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;
use crate::search::minimax::SearchError;

#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Overrides the engine's configured ply budget for this call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub score: Option<i32>,
    pub boards_evaluated: u64,
    pub info_lines: Vec<String>,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown engine option '{0}'")]
    UnknownOption(String),
    #[error("invalid value '{value}' for engine option '{name}'")]
    InvalidOptionValue { name: String, value: String },
    #[error(transparent)]
    Search(#[from] SearchError),
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), EngineError> {
        Err(EngineError::UnknownOption(name.to_owned()))
    }

    /// Pick a move for the side to move. The position is handed back
    /// unchanged.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineError>;
}
