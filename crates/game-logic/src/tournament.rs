//! Round-robin tournament scheduling and score accumulation.

use crate::error::ArenaError;
use crate::game::play_match;
use crate::strategy::{MoveHistory, Strategy};
use crate::Game;
use std::collections::BTreeMap;
use std::time::Instant;

/// Everything a finished tournament run produced.
#[derive(Debug, Default)]
pub struct TournamentOutcome {
    /// Strategy name → sum of its per-match average payoffs across
    /// every opponent and series element, both seats combined. Raw
    /// ranking score before leaderboard normalization.
    pub totals: BTreeMap<String, f64>,
    /// `histories[strategy][opponent]` → that strategy's own view of
    /// every completed match against the opponent, in series order.
    pub histories: BTreeMap<String, BTreeMap<String, Vec<MoveHistory>>>,
}

/// Play every unordered pair of distinct strategies through the full
/// match series.
///
/// Pairs are visited exactly once, in deterministic name order; a
/// strategy never plays itself. Both participants are credited
/// simultaneously per series element, so a final total scales with
/// (opponents faced) × (series length). Any engine error aborts the
/// whole run.
pub fn run_tournament(
    game: Game,
    strategies: &[Box<dyn Strategy>],
    series_lengths: &[u32],
) -> Result<TournamentOutcome, ArenaError> {
    let mut order: Vec<&dyn Strategy> = strategies.iter().map(|s| s.as_ref()).collect();
    order.sort_by(|x, y| x.name().cmp(y.name()));

    let mut outcome = TournamentOutcome::default();
    for strategy in &order {
        outcome.totals.insert(strategy.name().to_string(), 0.0);
        outcome
            .histories
            .insert(strategy.name().to_string(), BTreeMap::new());
    }

    let tournament_start = Instant::now();
    for (i, one) in order.iter().enumerate() {
        for two in order.iter().skip(i + 1) {
            log::info!(
                "playing {} matches of {} against {}",
                series_lengths.len(),
                one.name(),
                two.name()
            );
            let pair_start = Instant::now();

            for &round_count in series_lengths {
                let result = play_match(game, *one, *two, round_count)?;

                *outcome.totals.entry(one.name().to_string()).or_insert(0.0) +=
                    result.average_one;
                *outcome.totals.entry(two.name().to_string()).or_insert(0.0) +=
                    result.average_two;

                outcome
                    .histories
                    .entry(one.name().to_string())
                    .or_default()
                    .entry(two.name().to_string())
                    .or_default()
                    .push(result.history_one);
                outcome
                    .histories
                    .entry(two.name().to_string())
                    .or_default()
                    .entry(one.name().to_string())
                    .or_default()
                    .push(result.history_two);
            }

            log::debug!("pair finished in {:.2?}", pair_start.elapsed());
        }
    }
    log::info!("tournament finished in {:.2?}", tournament_start.elapsed());

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{AlwaysA, AlwaysB, TitForTat};
    use crate::ArenaError;
    use crate::{Action, Seat};
    use std::cell::Cell;

    fn field() -> Vec<Box<dyn Strategy>> {
        vec![Box::new(AlwaysA), Box::new(AlwaysB), Box::new(TitForTat)]
    }

    #[test]
    fn test_three_strategies_play_three_pairs() {
        let outcome = run_tournament(Game::Prison, &field(), &[2, 2]).unwrap();

        // Every strategy faced exactly the two others, never itself.
        for (name, opponents) in &outcome.histories {
            assert_eq!(opponents.len(), 2, "{name} has wrong opponent count");
            assert!(!opponents.contains_key(name), "{name} played itself");
            for matches in opponents.values() {
                assert_eq!(matches.len(), 2);
            }
        }

        // 3 unordered pairs, each logged from both sides.
        let sides: usize = outcome.histories.values().map(|o| o.len()).sum();
        assert_eq!(sides, 6);
    }

    #[test]
    fn test_totals_hand_computed() {
        // prison, one 4-round match per pair:
        //   always-a vs always-b:    (a,b) x4 -> averages 3.0 / 0.0
        //   always-a vs tit-for-tat: (a,a) x4 -> averages 1.0 / 1.0
        //   always-b vs tit-for-tat: (b,a) then (b,b) x3
        //                            -> averages 1.5 / 2.25
        let outcome = run_tournament(Game::Prison, &field(), &[4]).unwrap();

        assert!((outcome.totals["always-a"] - 4.0).abs() < 1e-12);
        assert!((outcome.totals["always-b"] - 1.5).abs() < 1e-12);
        assert!((outcome.totals["tit-for-tat"] - 3.25).abs() < 1e-12);
    }

    #[test]
    fn test_registration_order_is_irrelevant() {
        let forward = run_tournament(Game::Chicken, &field(), &[3, 5]).unwrap();
        let reversed: Vec<Box<dyn Strategy>> =
            vec![Box::new(TitForTat), Box::new(AlwaysB), Box::new(AlwaysA)];
        let backward = run_tournament(Game::Chicken, &reversed, &[3, 5]).unwrap();

        assert_eq!(forward.totals, backward.totals);
    }

    #[test]
    fn test_single_strategy_plays_nothing() {
        let lonely: Vec<Box<dyn Strategy>> = vec![Box::new(AlwaysA)];
        let outcome = run_tournament(Game::Prison, &lonely, &[2]).unwrap();

        assert_eq!(outcome.totals["always-a"], 0.0);
        assert!(outcome.histories["always-a"].is_empty());
    }

    /// Emits an illegal symbol on its very first decision.
    struct Saboteur {
        calls: Cell<usize>,
    }

    impl Strategy for Saboteur {
        fn name(&self) -> &str {
            "saboteur"
        }

        fn decide(&self, _game: Game, _seat: Seat, _history: &[(Action, Action)]) -> char {
            self.calls.set(self.calls.get() + 1);
            'z'
        }
    }

    #[test]
    fn test_engine_error_aborts_whole_run() {
        let strategies: Vec<Box<dyn Strategy>> = vec![
            Box::new(AlwaysA),
            Box::new(Saboteur { calls: Cell::new(0) }),
            Box::new(TitForTat),
        ];

        let err = run_tournament(Game::Prison, &strategies, &[5]).unwrap_err();
        match err {
            ArenaError::IllegalMove { strategy, round, .. } => {
                assert_eq!(strategy, "saboteur");
                assert_eq!(round, 0);
            }
            other => panic!("expected IllegalMove, got {other:?}"),
        }
    }
}
