//! Strategy interface and the built-in strategy library.

use crate::error::ArenaError;
use crate::Game;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;

/// One of the two legal moves in any supported game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    A,
    B,
}

impl Action {
    /// Wire symbol handed back by strategies.
    pub fn symbol(self) -> char {
        match self {
            Action::A => 'a',
            Action::B => 'b',
        }
    }

    /// Parse an untrusted strategy output symbol.
    pub fn from_symbol(symbol: char) -> Result<Self, ArenaError> {
        match symbol {
            'a' => Ok(Action::A),
            'b' => Ok(Action::B),
            other => Err(ArenaError::InvalidAction(other)),
        }
    }

    pub fn other(self) -> Self {
        match self {
            Action::A => Action::B,
            Action::B => Action::A,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which of the two roles a strategy occupies in a match. Payoff
/// interpretation depends on the seat (the pennies table is
/// asymmetric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn number(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }
}

/// Per-seat match history: one `(own action, opponent action)` entry
/// per round played so far. Created empty at match start, appended to
/// by the engine only, discarded after the match.
pub type MoveHistory = Vec<(Action, Action)>;

/// Decision interface every tournament participant implements.
///
/// `decide` returns a raw move symbol rather than an [`Action`]:
/// strategy output is untrusted plugin territory, and a symbol outside
/// {`a`, `b`} must be observable so the engine can abort the run
/// naming the offender. The engine never inspects strategy internals
/// beyond this call.
pub trait Strategy {
    /// Unique display name, also used in illegal-move reports.
    fn name(&self) -> &str;

    /// Choose the next move given the game, the occupied seat and the
    /// rounds played so far (own action first in every entry).
    fn decide(&self, game: Game, seat: Seat, history: &[(Action, Action)]) -> char;
}

/// Plays `a` every round.
pub struct AlwaysA;

impl Strategy for AlwaysA {
    fn name(&self) -> &str {
        "always-a"
    }

    fn decide(&self, _game: Game, _seat: Seat, _history: &[(Action, Action)]) -> char {
        Action::A.symbol()
    }
}

/// Plays `b` every round.
pub struct AlwaysB;

impl Strategy for AlwaysB {
    fn name(&self) -> &str {
        "always-b"
    }

    fn decide(&self, _game: Game, _seat: Seat, _history: &[(Action, Action)]) -> char {
        Action::B.symbol()
    }
}

/// Alternates between the two actions, opening with `a`.
pub struct Alternate;

impl Strategy for Alternate {
    fn name(&self) -> &str {
        "alternate"
    }

    fn decide(&self, _game: Game, _seat: Seat, history: &[(Action, Action)]) -> char {
        if history.len() % 2 == 0 {
            Action::A.symbol()
        } else {
            Action::B.symbol()
        }
    }
}

/// Copies the opponent's previous action, opening with `a`.
pub struct TitForTat;

impl Strategy for TitForTat {
    fn name(&self) -> &str {
        "tit-for-tat"
    }

    fn decide(&self, _game: Game, _seat: Seat, history: &[(Action, Action)]) -> char {
        match history.last() {
            None => Action::A.symbol(),
            Some((_, opponent)) => opponent.symbol(),
        }
    }
}

/// Plays `a` until the opponent plays `b` once, then `b` forever.
pub struct GrimTrigger;

impl Strategy for GrimTrigger {
    fn name(&self) -> &str {
        "grim-trigger"
    }

    fn decide(&self, _game: Game, _seat: Seat, history: &[(Action, Action)]) -> char {
        let betrayed = history.iter().any(|(_, opponent)| *opponent == Action::B);
        if betrayed {
            Action::B.symbol()
        } else {
            Action::A.symbol()
        }
    }
}

/// Uniform random choice each round from a seedable generator.
///
/// Interior mutability keeps the `decide` signature shared with the
/// stateless strategies; the tournament is single-threaded.
pub struct Random {
    rng: RefCell<SmallRng>,
}

impl Random {
    /// Generator seeded for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: RefCell::new(SmallRng::from_os_rng()),
        }
    }
}

impl Strategy for Random {
    fn name(&self) -> &str {
        "random"
    }

    fn decide(&self, _game: Game, _seat: Seat, _history: &[(Action, Action)]) -> char {
        if self.rng.borrow_mut().random_bool(0.5) {
            Action::A.symbol()
        } else {
            Action::B.symbol()
        }
    }
}
