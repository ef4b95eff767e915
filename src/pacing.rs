#![cfg(feature = "std")]
//! Paced execution of the machine turn on the tokio timer.

use rand::Rng;
use tokio::time::sleep;

use crate::common::ShotError;
use crate::config::ThinkDelay;
use crate::game::{GameEngine, ShotReport};

/// Drive the machine turn to completion, sleeping between shots.
///
/// The engine stays mutably borrowed for the whole turn, so no player shot
/// can interleave with the machine's. Dropping the future abandons the rest
/// of the turn without firing further shots.
pub async fn run_ai_turn_paced<R, F>(
    engine: &mut GameEngine,
    rng: &mut R,
    delay: ThinkDelay,
    mut on_step: F,
) -> Result<usize, ShotError>
where
    R: Rng + ?Sized,
    F: FnMut(&ShotReport),
{
    let mut steps = 0;
    let mut pause = delay.before_first_shot;
    while engine.is_machine_turn() {
        if !pause.is_zero() {
            sleep(pause).await;
        }
        let report = engine.ai_step(rng)?;
        on_step(&report);
        steps += 1;
        pause = delay.between_shots;
    }
    Ok(steps)
}
