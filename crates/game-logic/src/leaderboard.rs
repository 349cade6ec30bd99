//! Leaderboard normalization and ranking.

use crate::Game;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// 1-based position.
    pub rank: usize,
    pub name: String,
    /// Per-match average payoff.
    pub score: f64,
}

/// Rank accumulated totals into a leaderboard.
///
/// Each total is divided by `matches_per_strategy` — distinct opponents
/// faced times series length — to a comparable per-match average.
/// `prison` sorts ascending (the cooperative equilibrium framing treats
/// lower as better); every other game sorts descending. Equal scores
/// fall back to name order so rankings are stable.
pub fn rank(
    totals: &BTreeMap<String, f64>,
    game: Game,
    matches_per_strategy: usize,
) -> Vec<Ranking> {
    let divisor = matches_per_strategy.max(1) as f64;
    let mut rows: Vec<(String, f64)> = totals
        .iter()
        .map(|(name, total)| (name.clone(), total / divisor))
        .collect();

    rows.sort_by(|x, y| {
        let by_score = match game {
            Game::Prison => x.1.total_cmp(&y.1),
            _ => y.1.total_cmp(&x.1),
        };
        by_score.then_with(|| x.0.cmp(&y.0))
    });

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, score))| Ranking {
            rank: i + 1,
            name,
            score,
        })
        .collect()
}
