//! Game engine: placement queue, turn order and end-of-game detection.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use log::{info, warn};
use rand::Rng;

use crate::ai::{self, ShootingStrategy, Strategy};
use crate::board::{Board, CellState};
use crate::common::{PlacementError, ShotError, ShotResult};
use crate::config::{Difficulty, FLEET};
use crate::coordinate::Coordinate;
use crate::session::{Session, SessionStats};
use crate::ship::{Orientation, Ship};

/// One of the two participants, used both for turns and for boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Machine,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Machine,
            Side::Machine => Side::Player,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    PlayerWon,
    PlayerLost,
}

/// Engine state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The player is placing the fleet.
    Placement,
    /// Battle, with the side whose turn it is.
    Battle(Side),
    GameOver(Outcome),
}

/// Current status of a game, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Notifications for the presentation layer, drained with
/// [`GameEngine::drain_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BoardChanged(Side),
    ShotFired {
        shooter: Side,
        target: Coordinate,
        result: ShotResult,
    },
    TurnChanged(Side),
    GameOver(Outcome),
}

/// What a single accepted shot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: Side,
    pub target: Coordinate,
    pub result: ShotResult,
    /// Phase after the shot was applied.
    pub phase: Phase,
}

impl ShotReport {
    /// `true` when the shooter does not get another shot.
    pub fn turn_over(&self) -> bool {
        self.phase != Phase::Battle(self.shooter)
    }
}

/// Persistable game: both boards and whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedGame {
    pub player_board: Board,
    pub machine_board: Board,
    pub player_turn: bool,
}

fn fleet_queue() -> VecDeque<Ship> {
    FLEET.iter().map(|k| Ship::new(*k)).collect()
}

/// Owns both boards, the fleet still to place and the machine's strategy.
pub struct GameEngine {
    player_board: Board,
    machine_board: Board,
    phase: Phase,
    fleet: VecDeque<Ship>,
    strategy: Strategy,
    session: Session,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Fresh engine in the placement phase.
    pub fn new(session: Session) -> Self {
        let strategy = Strategy::for_difficulty(session.difficulty());
        Self {
            player_board: Board::new(),
            machine_board: Board::new(),
            phase: Phase::Placement,
            fleet: fleet_queue(),
            strategy,
            session,
            events: Vec::new(),
        }
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(Session::new("", difficulty))
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn machine_board(&self) -> &Board {
        &self.machine_board
    }

    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Machine => &self.machine_board,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_player_turn(&self) -> bool {
        self.phase == Phase::Battle(Side::Player)
    }

    pub fn is_machine_turn(&self) -> bool {
        self.phase == Phase::Battle(Side::Machine)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    pub fn status(&self) -> GameStatus {
        match self.phase {
            Phase::GameOver(Outcome::PlayerWon) => GameStatus::Won,
            Phase::GameOver(Outcome::PlayerLost) => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn set_nickname(&mut self, nickname: &str) {
        self.session.set_nickname(nickname);
    }

    pub fn difficulty(&self) -> Difficulty {
        self.strategy.difficulty()
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Swap in a fresh strategy; nothing carries over from the old one.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!("AI difficulty set to {}", difficulty);
        self.strategy = Strategy::for_difficulty(difficulty);
        self.session.set_difficulty(difficulty);
    }

    /// Head of the placement queue, without removing it.
    pub fn next_ship_to_place(&self) -> Option<&Ship> {
        self.fleet.front()
    }

    pub fn ships_to_place(&self) -> usize {
        self.fleet.len()
    }

    /// Take pending notifications.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Place the head of the fleet queue on the player's board.
    pub fn place_ship(
        &mut self,
        start: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        if self.phase != Phase::Placement {
            return Err(PlacementError::FleetComplete);
        }
        let next = self.fleet.front().ok_or(PlacementError::FleetComplete)?;
        if next.length() != length {
            return Err(PlacementError::WrongLength {
                expected: next.length(),
                got: length,
            });
        }
        self.player_board
            .place_ship(next.clone(), start, orientation)?;
        self.fleet.pop_front();
        self.events.push(GameEvent::BoardChanged(Side::Player));
        Ok(())
    }

    /// Place the head of the fleet queue at a random position.
    pub fn place_next_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Coordinate, Orientation), PlacementError> {
        if self.phase != Phase::Placement {
            return Err(PlacementError::FleetComplete);
        }
        let next = self.fleet.front().ok_or(PlacementError::FleetComplete)?;
        let placed = self.player_board.place_ship_randomly(rng, next.clone())?;
        self.fleet.pop_front();
        self.events.push(GameEvent::BoardChanged(Side::Player));
        Ok(placed)
    }

    /// Place every ship still in the queue at random.
    pub fn place_remaining_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), PlacementError> {
        while !self.fleet.is_empty() {
            self.place_next_randomly(rng)?;
        }
        Ok(())
    }

    /// Deploy the machine fleet and open the battle with the player's turn.
    pub fn start_new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PlacementError> {
        if self.phase != Phase::Placement {
            return Err(PlacementError::FleetComplete);
        }
        if !self.fleet.is_empty() {
            return Err(PlacementError::FleetIncomplete {
                remaining: self.fleet.len(),
            });
        }
        let mut machine_board = Board::new();
        machine_board.place_fleet_randomly(rng, &FLEET)?;
        self.machine_board = machine_board;
        self.strategy.reset();
        self.session.reset_statistics();
        self.phase = Phase::Battle(Side::Player);
        info!("battle started against {} AI", self.difficulty());
        self.events.push(GameEvent::BoardChanged(Side::Machine));
        self.events.push(GameEvent::TurnChanged(Side::Player));
        Ok(())
    }

    /// Back to an empty placement phase. Nickname and difficulty are kept.
    pub fn reset_game(&mut self) {
        self.player_board = Board::new();
        self.machine_board = Board::new();
        self.fleet = fleet_queue();
        self.phase = Phase::Placement;
        self.strategy.reset();
        self.session.reset_statistics();
        self.events.clear();
        self.events.push(GameEvent::BoardChanged(Side::Player));
        self.events.push(GameEvent::BoardChanged(Side::Machine));
    }

    /// Player fires at the machine board. A hit keeps the turn, a miss
    /// hands it to the machine.
    pub fn shoot(&mut self, target: Coordinate) -> Result<ShotReport, ShotError> {
        match self.phase {
            Phase::Battle(Side::Player) => {}
            Phase::Battle(Side::Machine) => return Err(ShotError::NotPlayerTurn),
            Phase::Placement | Phase::GameOver(_) => return Err(ShotError::NotInBattle),
        }
        let result = self.machine_board.resolve_shot(target)?;
        self.session
            .record_player_shot(result.is_hit(), result.is_sunk());
        Ok(self.conclude_shot(Side::Player, target, result))
    }

    /// One machine shot chosen by the active strategy.
    pub fn ai_step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ShotReport, ShotError> {
        match self.phase {
            Phase::Battle(Side::Machine) => {}
            Phase::Battle(Side::Player) => return Err(ShotError::NotMachineTurn),
            Phase::Placement | Phase::GameOver(_) => return Err(ShotError::NotInBattle),
        }
        let mut target = self.strategy.next_shot(&self.player_board, rng);
        if !self.player_board.is_targetable(target) {
            warn!("strategy picked spent cell {}, using a random target", target);
            target = ai::random_target(&self.player_board, rng);
        }
        let result = self.player_board.resolve_shot(target)?;
        if result.is_hit() {
            self.strategy.on_hit(target);
        }
        if result.is_sunk() {
            if let Some(ship) = self.player_board.ship_at(target) {
                self.strategy.on_sunk(ship.cells());
            }
            self.session.record_player_ship_lost();
        }
        Ok(self.conclude_shot(Side::Machine, target, result))
    }

    /// Run machine steps until it misses or the game ends, calling `on_step`
    /// after each one. Returns the number of shots taken.
    pub fn run_ai_turn<R, F>(&mut self, rng: &mut R, mut on_step: F) -> Result<usize, ShotError>
    where
        R: Rng + ?Sized,
        F: FnMut(&ShotReport),
    {
        let mut steps = 0;
        while self.is_machine_turn() {
            let report = self.ai_step(rng)?;
            on_step(&report);
            steps += 1;
        }
        Ok(steps)
    }

    fn conclude_shot(&mut self, shooter: Side, target: Coordinate, result: ShotResult) -> ShotReport {
        let defender = shooter.opponent();
        self.events.push(GameEvent::ShotFired {
            shooter,
            target,
            result,
        });
        self.events.push(GameEvent::BoardChanged(defender));

        if self.board(defender).is_fleet_destroyed() {
            let outcome = match shooter {
                Side::Player => Outcome::PlayerWon,
                Side::Machine => Outcome::PlayerLost,
            };
            info!("game over: {:?}", outcome);
            self.phase = Phase::GameOver(outcome);
            self.events.push(GameEvent::GameOver(outcome));
        } else if !result.is_hit() {
            self.phase = Phase::Battle(defender);
            self.events.push(GameEvent::TurnChanged(defender));
        }

        ShotReport {
            shooter,
            target,
            result,
            phase: self.phase,
        }
    }

    /// Snapshot for persistence. `None` until the battle has started.
    pub fn snapshot(&self) -> Option<SavedGame> {
        match self.phase {
            Phase::Placement => None,
            Phase::Battle(_) | Phase::GameOver(_) => Some(SavedGame {
                player_board: self.player_board.clone(),
                machine_board: self.machine_board.clone(),
                player_turn: self.phase != Phase::Battle(Side::Machine),
            }),
        }
    }

    /// Rebuild an engine from a snapshot. Statistics are recounted from the
    /// boards and a fresh strategy is told about unsunk hits on the player
    /// board.
    pub fn restore(saved: SavedGame, session: Session) -> Self {
        let SavedGame {
            player_board,
            machine_board,
            player_turn,
        } = saved;
        let phase = if player_board.is_fleet_destroyed() {
            Phase::GameOver(Outcome::PlayerLost)
        } else if machine_board.is_fleet_destroyed() {
            Phase::GameOver(Outcome::PlayerWon)
        } else if player_turn {
            Phase::Battle(Side::Player)
        } else {
            Phase::Battle(Side::Machine)
        };

        let mut strategy = Strategy::for_difficulty(session.difficulty());
        Coordinate::all()
            .filter(|c| player_board.cell(*c) == CellState::Hit)
            .for_each(|c| strategy.on_hit(c));

        let shots = machine_board
            .cells()
            .iter()
            .filter(|s| !s.is_targetable())
            .count();
        let hits = machine_board
            .cells()
            .iter()
            .filter(|s| matches!(s, CellState::Hit | CellState::Sunk))
            .count();
        let mut session = session;
        session.set_stats(SessionStats {
            shots_fired: shots as u32,
            successful_hits: hits as u32,
            enemy_ships_destroyed: machine_board.sunk_ship_count() as u32,
            player_ships_destroyed: player_board.sunk_ship_count() as u32,
        });

        Self {
            player_board,
            machine_board,
            phase,
            fleet: VecDeque::new(),
            strategy,
            session,
            events: Vec::new(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Session::default())
    }
}
