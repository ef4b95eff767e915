//! Fixed game constants and the tunables a front end may choose.

use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Number of ships each side places.
pub const FLEET_SIZE: usize = 10;

/// Fleet in placement order.
pub const FLEET: [ShipKind; FLEET_SIZE] = [
    ShipKind::Carrier,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Frigate,
    ShipKind::Frigate,
    ShipKind::Frigate,
    ShipKind::Frigate,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

/// Upper bound on random placement retries for a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// AI difficulty, selecting the machine's shooting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
pub enum Difficulty {
    /// Uniformly random shots.
    #[default]
    Easy,
    /// Fires at the neighbours of the last hit.
    Medium,
    /// Checkerboard hunting with a queued target phase.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a difficulty name is not one of easy, medium or hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDifficultyError;

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "difficulty must be one of EASY, MEDIUM or HARD")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or(ParseDifficultyError)
    }
}

/// Cosmetic pacing of the machine turn. Has no effect on game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkDelay {
    pub before_first_shot: Duration,
    pub between_shots: Duration,
}

impl ThinkDelay {
    /// No pacing at all, for headless play and tests.
    pub const fn none() -> Self {
        Self {
            before_first_shot: Duration::ZERO,
            between_shots: Duration::ZERO,
        }
    }

    /// Same delay before every shot.
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            before_first_shot: delay,
            between_shots: delay,
        }
    }
}

impl Default for ThinkDelay {
    fn default() -> Self {
        Self {
            before_first_shot: Duration::from_millis(1000),
            between_shots: Duration::from_millis(800),
        }
    }
}

/// Total segments of a list of ship kinds.
pub const fn fleet_cells(kinds: &[ShipKind]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < kinds.len() {
        total += kinds[i].length();
        i += 1;
    }
    total
}
