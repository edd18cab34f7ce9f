//! Fixed-budget minimax with alpha-beta pruning.
//!
//! White maximizes and Black minimizes an absolute, White-positive score.
//! Quiet plies spend one unit of the ply budget; captures are free, up to
//! `ply_budget` free plies along any one line, so exchanges are followed to
//! the end without letting a line grow past twice the budget.
//!
//! The search plays moves on the caller's `GameState` and takes every one of
//! them back before returning.

use std::ops::ControlFlow;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, trace};

use crate::game_state::chess_types::Team;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::{collect_legal_moves, for_each_legal_move};
use crate::move_generation::move_generator::{CheckMode, MoveScope};
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("no legal moves available for the side to move")]
    NoLegalMoves,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: Move,
    pub score: i32,
    pub boards_evaluated: u64,
    pub elapsed_ms: i64,
    pub info_lines: Vec<String>,
}

pub struct MinimaxSearch<S: BoardScorer = MaterialScorer> {
    scorer: S,
    rng: StdRng,
}

impl MinimaxSearch<MaterialScorer> {
    /// Material search; `None` seeds the tie-break generator from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_scorer(MaterialScorer, seed)
    }
}

impl<S: BoardScorer> MinimaxSearch<S> {
    pub fn with_scorer(scorer: S, seed: Option<u64>) -> Self {
        Self {
            scorer,
            rng: seeded_rng(seed),
        }
    }

    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = seeded_rng(seed);
    }

    /// Score every legal root move and return the best one for the side to
    /// move, choosing uniformly among equal scores.
    pub fn best_move(
        &mut self,
        game_state: &mut GameState,
        ply_budget: u8,
    ) -> Result<SearchReport, SearchError> {
        let started = Utc::now();
        let ply_budget = ply_budget.max(1);
        let side = game_state.side_to_move;
        let maximizing = side == Team::White;

        let root_moves = collect_legal_moves(game_state, MoveScope::Team(side), CheckMode::Full);
        if root_moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }
        debug!(
            ply_budget,
            root_moves = root_moves.len(),
            ?side,
            "minimax search start"
        );

        let mut walker = TreeWalker {
            scorer: &self.scorer,
            boards_evaluated: 0,
        };
        let mut best: Option<Move> = None;
        let mut best_score = sentinel(maximizing);
        let mut ties = 0u32;

        for mv in root_moves {
            let score = walker.minimax(
                game_state,
                mv,
                i32::from(ply_budget) - 1,
                ply_budget,
                i32::MIN,
                i32::MAX,
            );
            trace!(mv = %move_to_long_algebraic(mv), score, "root move scored");

            let improves = best.is_none()
                || if maximizing {
                    score > best_score
                } else {
                    score < best_score
                };

            if improves {
                best = Some(mv);
                best_score = score;
                ties = 1;
            } else if score == best_score {
                // Reservoir pick: the n-th equal move replaces the incumbent
                // with probability 1/n.
                ties += 1;
                if self.rng.random_range(0..ties) == 0 {
                    best = Some(mv);
                }
            }
        }

        let best_move = best.ok_or(SearchError::NoLegalMoves)?;
        let elapsed_ms = (Utc::now() - started).num_milliseconds();
        let boards_evaluated = walker.boards_evaluated;

        debug!(
            best = %move_to_long_algebraic(best_move),
            score = best_score,
            boards_evaluated,
            elapsed_ms,
            "minimax search finished"
        );

        let info_lines = vec![
            format!(
                "info string minimax budget {ply_budget} score {best_score} boards {boards_evaluated} time_ms {elapsed_ms}"
            ),
            format!(
                "info string minimax bestmove {} tied {ties}",
                move_to_long_algebraic(best_move)
            ),
        ];

        Ok(SearchReport {
            best_move,
            score: best_score,
            boards_evaluated,
            elapsed_ms,
            info_lines,
        })
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Starting value of a node before any reply improves it.
#[inline]
const fn sentinel(maximizing: bool) -> i32 {
    if maximizing {
        i32::MIN
    } else {
        i32::MAX
    }
}

/// Per-call search state; the evaluation count lives here, not in a global.
struct TreeWalker<'a, S: BoardScorer> {
    scorer: &'a S,
    boards_evaluated: u64,
}

impl<S: BoardScorer> TreeWalker<'_, S> {
    /// Value of the position after `mv`, with `depth` units of budget left
    /// below it and `free_captures` capture plies still allowed for free.
    fn minimax(
        &mut self,
        game_state: &mut GameState,
        mv: Move,
        depth: i32,
        free_captures: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        apply_move(game_state, mv);

        let (depth, free_captures) = if mv.is_capture() && free_captures > 0 {
            (depth + 1, free_captures - 1)
        } else {
            (depth, free_captures)
        };

        let value = if depth <= 0 {
            self.boards_evaluated += 1;
            self.scorer.score(game_state)
        } else {
            let side = game_state.side_to_move;
            let maximizing = side == Team::White;
            let mut value = sentinel(maximizing);

            let _ = for_each_legal_move(
                game_state,
                MoveScope::Team(side),
                CheckMode::Full,
                |game, reply| {
                    let child = self.minimax(game, reply, depth - 1, free_captures, alpha, beta);
                    if maximizing {
                        value = value.max(child);
                        alpha = alpha.max(value);
                    } else {
                        value = value.min(child);
                        beta = beta.min(value);
                    }
                    if alpha >= beta {
                        ControlFlow::Break(())
                    } else {
                        ControlFlow::Continue(())
                    }
                },
            );
            value
        };

        undo_move(game_state);
        value
    }
}
