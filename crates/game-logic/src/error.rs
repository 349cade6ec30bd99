//! Error taxonomy for the tournament core.
//!
//! Nothing here is recoverable: every error propagates to the top of
//! the run and terminates it. A failed run never produces a partial
//! leaderboard.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArenaError {
    /// Game identifier outside the fixed supported set.
    #[error("unknown game `{0}` (expected prison, staghunt, chicken or pennies)")]
    UnknownGame(String),

    /// A strategy returned something other than the two legal moves.
    /// Carries enough context to reproduce the violation.
    #[error("illegal move `{symbol}` in strategy {strategy} in move {round}")]
    IllegalMove {
        strategy: String,
        symbol: char,
        round: usize,
    },

    /// Malformed move symbol reached a parse boundary. The match engine
    /// validates strategy output first, so seeing this from a payoff
    /// lookup indicates an engine bug.
    #[error("invalid action symbol `{0}` (expected `a` or `b`)")]
    InvalidAction(char),

    #[error("report io: {0}")]
    Io(#[from] std::io::Error),

    #[error("report encoding: {0}")]
    Json(#[from] serde_json::Error),
}
