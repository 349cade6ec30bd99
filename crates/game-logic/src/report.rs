//! Tournament report persistence.

use crate::error::ArenaError;
use crate::leaderboard::Ranking;
use crate::Game;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Final rankings of one tournament run, as written to disk.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentReport {
    pub game: Game,
    /// Matches played per strategy pair.
    pub series_count: usize,
    pub rankings: Vec<Ranking>,
}

impl TournamentReport {
    pub fn new(game: Game, series_count: usize, rankings: Vec<Ranking>) -> Self {
        Self {
            game,
            series_count,
            rankings,
        }
    }

    /// Write the report as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ArenaError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a previously saved report.
    pub fn load(path: &Path) -> Result<Self, ArenaError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
