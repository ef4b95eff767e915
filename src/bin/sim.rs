use broadside::{new_battle, play_out, Difficulty, Outcome, Strategy};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [easy|medium|hard]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let difficulty: Difficulty = match args.get(2) {
        Some(d) => d.parse()?,
        None => Difficulty::Hard,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = new_battle(difficulty, &mut rng)?;
    // The stand-in player always uses the strongest strategy.
    let mut player = Strategy::for_difficulty(Difficulty::Hard);
    let report = play_out(&mut engine, &mut player, &mut rng)?;

    let winner = match report.outcome {
        Outcome::PlayerWon => "player",
        Outcome::PlayerLost => "machine",
    };

    let result = json!({
        "seed": seed,
        "difficulty": difficulty.name(),
        "player": {"shots": report.player_shots, "ships_lost": engine.player_board().sunk_ship_count()},
        "machine": {"shots": report.machine_shots, "ships_lost": engine.machine_board().sunk_ship_count()},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
