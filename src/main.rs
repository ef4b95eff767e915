#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::{Path, PathBuf};
#[cfg(feature = "std")]
use std::time::Duration;

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use broadside::{
    init_logging, new_battle, persistence, play_out, run_ai_turn_paced, ui, Coordinate,
    Difficulty, GameEngine, Orientation, Outcome, Phase, Session, ShotReport, ShotResult, Side,
    Strategy, ThinkDelay, DEFAULT_NICKNAME, FLEET_SIZE,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the machine in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = DEFAULT_NICKNAME)]
        nickname: String,
        #[arg(long, help = "Machine think time per shot in milliseconds")]
        think_ms: Option<u64>,
        #[arg(long, help = "Write the game to this file after every turn")]
        save: Option<PathBuf>,
        #[arg(long, requires = "save", help = "Continue the game stored in --save")]
        resume: bool,
    },
    /// Watch a strategy play the machine on the local machine.
    Local {
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        player_difficulty: Difficulty,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            nickname,
            think_ms,
            save,
            resume,
        } => {
            let mut rng = make_rng(seed);
            let session = Session::new(&nickname, difficulty);
            let mut engine = match &save {
                Some(path) if resume => persistence::resume_or_new(path, session),
                _ => GameEngine::new(session),
            };
            let delay = think_ms
                .map(|ms| ThinkDelay::uniform(Duration::from_millis(ms)))
                .unwrap_or_default();
            let input = io::stdin();
            let mut input = input.lock();
            play(&mut engine, &mut rng, delay, save.as_deref(), &mut input).await?;
        }
        Commands::Local {
            difficulty,
            player_difficulty,
            seed,
        } => {
            println!(
                "Starting local game: {} strategy against {} AI...",
                player_difficulty, difficulty
            );
            let mut rng = make_rng(seed);
            let mut engine = new_battle(difficulty, &mut rng)?;
            let mut player = Strategy::for_difficulty(player_difficulty);
            let report = play_out(&mut engine, &mut player, &mut rng)?;
            println!("{}", ui::render_player_view(&engine));
            announce_outcome(report.outcome);
            println!(
                "Shots fired: player {}, machine {}",
                report.player_shots, report.machine_shots
            );
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
async fn play(
    engine: &mut GameEngine,
    rng: &mut SmallRng,
    delay: ThinkDelay,
    save: Option<&Path>,
    input: &mut impl BufRead,
) -> anyhow::Result<()> {
    if engine.phase() == Phase::Placement {
        place_fleet(engine, rng, input)?;
        engine.start_new_game(rng)?;
    }
    println!("\nEnter targets like B7. Type 'quit' to leave the battle.");

    loop {
        match engine.phase() {
            Phase::Battle(Side::Player) => {
                println!("\n{}", ui::render_player_view(engine));
                let Some(target) = prompt_target(input)? else {
                    println!("Leaving the battle.");
                    break;
                };
                match engine.shoot(target) {
                    Ok(report) => announce_shot(&report),
                    Err(e) => println!("✗ {}", e),
                }
            }
            Phase::Battle(Side::Machine) => {
                println!("\nThe enemy is taking aim...");
                run_ai_turn_paced(engine, rng, delay, announce_shot).await?;
            }
            Phase::GameOver(outcome) => {
                println!("\n{}", ui::render_player_view(engine));
                announce_outcome(outcome);
                break;
            }
            Phase::Placement => anyhow::bail!("battle has not started"),
        }
        for event in engine.drain_events() {
            log::debug!("event: {:?}", event);
        }
        if let (Some(path), Some(saved)) = (save, engine.snapshot()) {
            if let Err(e) = persistence::save_to_path(path, &saved) {
                log::warn!("could not save game: {:#}", e);
            }
        }
    }

    println!("\n{}", engine.session());
    Ok(())
}

#[cfg(feature = "std")]
fn read_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    io::stdout().flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(feature = "std")]
fn parse_placement(line: &str) -> Result<(Coordinate, Orientation), String> {
    let mut parts = line.split_whitespace();
    let coord = parts
        .next()
        .ok_or("Missing coordinate")?
        .parse::<Coordinate>()
        .map_err(|e| e.to_string())?;
    let orientation = match parts.next() {
        None => Orientation::Horizontal,
        Some(o) if o.eq_ignore_ascii_case("h") => Orientation::Horizontal,
        Some(o) if o.eq_ignore_ascii_case("v") => Orientation::Vertical,
        Some(o) => return Err(format!("Invalid orientation '{}' - use H or V", o)),
    };
    if parts.next().is_some() {
        return Err("Too many values - expected e.g. A5 H".to_string());
    }
    Ok((coord, orientation))
}

#[cfg(feature = "std")]
fn place_fleet(
    engine: &mut GameEngine,
    rng: &mut SmallRng,
    input: &mut impl BufRead,
) -> anyhow::Result<()> {
    println!("\n════════════════════════════════════════════════════════════");
    println!("                    SHIP PLACEMENT PHASE");
    println!("════════════════════════════════════════════════════════════");
    println!("  • Enter coordinates and orientation (e.g., A5 H or A5 V)");
    println!("  • Press ENTER for random placement, 'auto' for the whole fleet");

    while let Some(ship) = engine.next_ship_to_place() {
        let kind = ship.kind();
        let length = ship.length();
        let number = FLEET_SIZE - engine.ships_to_place() + 1;
        println!("\n{}", ui::render_own_board(engine.player_board()));
        println!("Ship {}/{}: {} (length {})", number, FLEET_SIZE, kind, length);
        print!("Enter placement: ");

        let line = read_line(input)?.context("input closed during placement")?;
        if line.is_empty() {
            let (start, orientation) = engine.place_next_randomly(rng)?;
            println!("✓ {} randomly placed at {} ({:?})", kind, start, orientation);
            continue;
        }
        if line.eq_ignore_ascii_case("auto") {
            engine.place_remaining_randomly(rng)?;
            println!("✓ Remaining fleet placed at random");
            continue;
        }
        match parse_placement(&line) {
            Ok((start, orientation)) => match engine.place_ship(start, length, orientation) {
                Ok(()) => println!("✓ {} placed at {}", kind, start),
                Err(e) => println!("✗ {}", e),
            },
            Err(msg) => println!("✗ {}", msg),
        }
    }
    println!("\n{}", ui::render_own_board(engine.player_board()));
    Ok(())
}

#[cfg(feature = "std")]
fn prompt_target(input: &mut impl BufRead) -> anyhow::Result<Option<Coordinate>> {
    loop {
        print!("Your target: ");
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        if line.is_empty() {
            continue;
        }
        match line.parse::<Coordinate>() {
            Ok(target) => return Ok(Some(target)),
            Err(e) => println!("✗ {}", e),
        }
    }
}

#[cfg(feature = "std")]
fn announce_shot(report: &ShotReport) {
    let who = match report.shooter {
        Side::Player => "You fire",
        Side::Machine => "Enemy fires",
    };
    match report.result {
        ShotResult::Miss => println!("{} at {}: miss", who, report.target),
        ShotResult::Hit => println!("{} at {}: HIT!", who, report.target),
        ShotResult::Sunk(kind) => println!("{} at {}: {} SUNK!", who, report.target, kind),
    }
}

#[cfg(feature = "std")]
fn announce_outcome(outcome: Outcome) {
    match outcome {
        Outcome::PlayerWon => {
            println!("\nVICTORY!");
            println!("You have sunk all enemy ships!");
        }
        Outcome::PlayerLost => {
            println!("\nDEFEAT");
            println!("All your ships have been destroyed.");
        }
    }
}
