//! Headless games where a strategy stands in for the human player.

use alloc::vec::Vec;
use rand::Rng;

use crate::ai::{ShootingStrategy, Strategy};
use crate::common::{PlacementError, ShotError};
use crate::config::Difficulty;
use crate::game::{GameEngine, Outcome, Phase, Side};

/// Summary of a finished autoplayed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoplayReport {
    pub outcome: Outcome,
    pub player_shots: usize,
    pub machine_shots: usize,
}

/// Engine with both fleets placed at random and the battle started.
pub fn new_battle<R: Rng + ?Sized>(
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<GameEngine, PlacementError> {
    let mut engine = GameEngine::with_difficulty(difficulty);
    engine.place_remaining_randomly(rng)?;
    engine.start_new_game(rng)?;
    Ok(engine)
}

/// Play the battle to the end, with `player` choosing the human side's shots.
pub fn play_out<R: Rng + ?Sized>(
    engine: &mut GameEngine,
    player: &mut Strategy,
    rng: &mut R,
) -> Result<AutoplayReport, ShotError> {
    let mut player_shots = 0;
    let mut machine_shots = 0;
    loop {
        match engine.phase() {
            Phase::Battle(Side::Player) => {
                let target = player.next_shot(engine.machine_board(), rng);
                let report = engine.shoot(target)?;
                player_shots += 1;
                if report.result.is_hit() {
                    player.on_hit(target);
                }
                if report.result.is_sunk() {
                    let cells: Vec<_> = engine
                        .machine_board()
                        .ship_at(target)
                        .map(|s| s.cells().to_vec())
                        .unwrap_or_default();
                    player.on_sunk(&cells);
                }
            }
            Phase::Battle(Side::Machine) => {
                machine_shots += engine.run_ai_turn(rng, |_| {})?;
            }
            Phase::GameOver(outcome) => {
                return Ok(AutoplayReport {
                    outcome,
                    player_shots,
                    machine_shots,
                });
            }
            Phase::Placement => return Err(ShotError::NotInBattle),
        }
        // Events are only of interest to interactive front ends.
        engine.drain_events().for_each(drop);
    }
}
