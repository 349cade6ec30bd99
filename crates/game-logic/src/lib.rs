//! Core logic for repeated two-player normal-form game tournaments.
//!
//! Supports a fixed set of symmetric 2-action games (prisoner's
//! dilemma, stag hunt, chicken, matching pennies), plays matches of
//! randomized or fixed length between pluggable strategies, and ranks
//! the accumulated payoffs on a leaderboard.

mod error;
mod game;
mod leaderboard;
mod report;
mod strategy;
mod tournament;

pub use error::ArenaError;
pub use game::{fixed_series, play_match, MatchResult, RoundLengths, MIN_ROUNDS};
pub use leaderboard::{rank, Ranking};
pub use report::TournamentReport;
pub use strategy::{
    Action, Alternate, AlwaysA, AlwaysB, GrimTrigger, MoveHistory, Random, Seat, Strategy,
    TitForTat,
};
pub use tournament::{run_tournament, TournamentOutcome};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The supported normal-form games.
///
/// The set is closed: arbitrary payoff matrices supplied at runtime are
/// deliberately not supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Prison,
    StagHunt,
    Chicken,
    Pennies,
}

impl Game {
    /// Canonical lowercase name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Game::Prison => "prison",
            Game::StagHunt => "staghunt",
            Game::Chicken => "chicken",
            Game::Pennies => "pennies",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Game {
    type Err = ArenaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prison" => Ok(Game::Prison),
            "staghunt" => Ok(Game::StagHunt),
            "chicken" => Ok(Game::Chicken),
            "pennies" => Ok(Game::Pennies),
            other => Err(ArenaError::UnknownGame(other.to_string())),
        }
    }
}

/// Payoff matrix lookup for one round.
/// Returns (seat 1 score, seat 2 score).
///
/// The constants reproduce the reference experiments and must not be
/// altered, or results stop being comparable across implementations.
pub fn payoff(game: Game, one: Action, two: Action) -> (i32, i32) {
    use Action::{A, B};
    match (game, one, two) {
        (Game::Prison, A, A) => (1, 1),
        (Game::Prison, A, B) => (3, 0),
        (Game::Prison, B, A) => (0, 3),
        (Game::Prison, B, B) => (2, 2),
        (Game::StagHunt, A, A) => (8, 8),
        (Game::StagHunt, A, B) => (0, 4),
        (Game::StagHunt, B, A) => (4, 0),
        (Game::StagHunt, B, B) => (6, 6),
        (Game::Chicken, A, A) => (2, 2),
        (Game::Chicken, A, B) => (1, 3),
        (Game::Chicken, B, A) => (3, 1),
        (Game::Chicken, B, B) => (0, 0),
        (Game::Pennies, A, A) => (1, -1),
        (Game::Pennies, A, B) => (-1, 1),
        (Game::Pennies, B, A) => (-1, 1),
        (Game::Pennies, B, B) => (1, -1),
    }
}
