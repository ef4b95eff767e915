//! Per-session player settings and statistics, owned by the engine.

use alloc::string::{String, ToString};
use core::fmt;

use crate::config::{Difficulty, FLEET_SIZE};

pub const DEFAULT_NICKNAME: &str = "Admiral";

/// Running tallies for the current game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionStats {
    pub shots_fired: u32,
    pub successful_hits: u32,
    pub enemy_ships_destroyed: u32,
    pub player_ships_destroyed: u32,
}

impl SessionStats {
    /// Player hit rate as a percentage; zero before the first shot.
    pub fn accuracy(&self) -> f64 {
        if self.shots_fired == 0 {
            0.0
        } else {
            f64::from(self.successful_hits) * 100.0 / f64::from(self.shots_fired)
        }
    }
}

/// Nickname, difficulty and statistics for one player.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    nickname: String,
    difficulty: Difficulty,
    stats: SessionStats,
}

impl Session {
    pub fn new(nickname: &str, difficulty: Difficulty) -> Self {
        let mut session = Self {
            nickname: DEFAULT_NICKNAME.to_string(),
            difficulty,
            stats: SessionStats::default(),
        };
        session.set_nickname(nickname);
        session
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Trims `nickname`; blank names leave the current one in place.
    pub fn set_nickname(&mut self, nickname: &str) {
        let trimmed = nickname.trim();
        if !trimmed.is_empty() {
            self.nickname = trimmed.to_string();
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub(crate) fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub(crate) fn record_player_shot(&mut self, hit: bool, sunk: bool) {
        self.stats.shots_fired += 1;
        if hit {
            self.stats.successful_hits += 1;
        }
        if sunk {
            self.stats.enemy_ships_destroyed += 1;
        }
    }

    pub(crate) fn record_player_ship_lost(&mut self) {
        self.stats.player_ships_destroyed += 1;
    }

    pub(crate) fn set_stats(&mut self, stats: SessionStats) {
        self.stats = stats;
    }

    /// Clears statistics but keeps nickname and difficulty.
    pub fn reset_statistics(&mut self) {
        self.stats = SessionStats::default();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_NICKNAME, Difficulty::default())
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== GAME SESSION ===")?;
        writeln!(f, "Player: {}", self.nickname)?;
        writeln!(f, "Difficulty: {}", self.difficulty)?;
        writeln!(
            f,
            "Enemy Ships Destroyed: {}/{}",
            self.stats.enemy_ships_destroyed, FLEET_SIZE
        )?;
        writeln!(
            f,
            "Player Ships Destroyed: {}/{}",
            self.stats.player_ships_destroyed, FLEET_SIZE
        )?;
        writeln!(f, "Total Shots Fired: {}", self.stats.shots_fired)?;
        writeln!(f, "Successful Hits: {}", self.stats.successful_hits)?;
        write!(f, "Accuracy: {:.1}%", self.stats.accuracy())
    }
}
