//! Match execution engine and the randomized match-length rule.

use crate::error::ArenaError;
use crate::strategy::{Action, MoveHistory, Seat, Strategy};
use crate::{payoff, Game};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Minimum number of rounds in a randomized-length match.
pub const MIN_ROUNDS: u32 = 1000;

/// Result of one complete match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchResult {
    /// Seat 1's payoff sum divided by the round count.
    pub average_one: f64,
    /// Seat 2's payoff sum divided by the round count.
    pub average_two: f64,
    /// Seat 1's view of the match, own action first in every entry.
    pub history_one: MoveHistory,
    /// Seat 2's view, mirror image of seat 1's.
    pub history_two: MoveHistory,
}

/// Randomized match-length generator.
///
/// Starting at [`MIN_ROUNDS`], draw a uniform integer in [0, 9]; while
/// the draw is non-zero, add a round and draw again. Each extension is
/// independent (memoryless), so additional length is geometric with
/// mean 10.
pub struct RoundLengths<R: Rng> {
    rng: R,
}

impl RoundLengths<SmallRng> {
    /// Generator seeded for reproducible tournament runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> RoundLengths<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Number of rounds for the next match, always ≥ [`MIN_ROUNDS`].
    pub fn next_round_count(&mut self) -> u32 {
        let mut rounds = MIN_ROUNDS;
        while self.rng.random_range(0..10) != 0 {
            rounds += 1;
        }
        rounds
    }

    /// One freshly drawn round count per series element.
    pub fn series(&mut self, len: usize) -> Vec<u32> {
        (0..len).map(|_| self.next_round_count()).collect()
    }
}

/// Series of identical round counts, for when a fixed length is
/// supplied externally and the generator is bypassed.
pub fn fixed_series(rounds: u32, len: usize) -> Vec<u32> {
    vec![rounds; len]
}

/// Play one match of `round_count` rounds between two strategies.
///
/// Each seat is handed its own history (own action first) before
/// deciding, so round `i` sees rounds `0..i`. An illegal move symbol
/// aborts the match immediately with the offending strategy's name and
/// the 0-based round index; no later round is ever played.
pub fn play_match(
    game: Game,
    one: &dyn Strategy,
    two: &dyn Strategy,
    round_count: u32,
) -> Result<MatchResult, ArenaError> {
    let mut history_one: MoveHistory = Vec::with_capacity(round_count as usize);
    let mut history_two: MoveHistory = Vec::with_capacity(round_count as usize);
    let mut sum_one = 0i64;
    let mut sum_two = 0i64;

    for round in 0..round_count {
        let symbol_one = one.decide(game, Seat::One, &history_one);
        let symbol_two = two.decide(game, Seat::Two, &history_two);

        let action_one =
            Action::from_symbol(symbol_one).map_err(|_| ArenaError::IllegalMove {
                strategy: one.name().to_string(),
                symbol: symbol_one,
                round: round as usize,
            })?;
        let action_two =
            Action::from_symbol(symbol_two).map_err(|_| ArenaError::IllegalMove {
                strategy: two.name().to_string(),
                symbol: symbol_two,
                round: round as usize,
            })?;

        history_one.push((action_one, action_two));
        history_two.push((action_two, action_one));

        let (score_one, score_two) = payoff(game, action_one, action_two);
        sum_one += i64::from(score_one);
        sum_two += i64::from(score_two);
    }

    Ok(MatchResult {
        average_one: sum_one as f64 / f64::from(round_count),
        average_two: sum_two as f64 / f64::from(round_count),
        history_one,
        history_two,
    })
}
