//! Machine shooting strategies.
//!
//! Every strategy only ever returns coordinates the board has not been fired
//! upon yet, as long as such a coordinate exists. Once the board is exhausted
//! they fall back to `A1`.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::{Board, CellState};
use crate::config::Difficulty;
use crate::coordinate::Coordinate;

/// Capability shared by all strategies. Notifications default to no-ops.
pub trait ShootingStrategy {
    /// Choose the next target on the opponent's board.
    fn next_shot<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Coordinate;

    /// A shot at `target` struck a ship.
    fn on_hit(&mut self, _target: Coordinate) {}

    /// The ship occupying `ship_cells` went down.
    fn on_sunk(&mut self, _ship_cells: &[Coordinate]) {}

    /// Forget everything learned about the current opponent.
    fn reset(&mut self) {}
}

/// Uniform pick among all targetable cells.
pub fn random_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Coordinate {
    let candidates: Vec<Coordinate> = board.targetable_cells().collect();
    candidates.choose(rng).copied().unwrap_or(Coordinate::ORIGIN)
}

/// Easy: no memory, every shot is random.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl ShootingStrategy for RandomStrategy {
    fn next_shot<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Coordinate {
        random_target(board, rng)
    }
}

/// Medium: searches around the most recent hit, random otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdjacentStrategy {
    last_hit: Option<Coordinate>,
}

impl AdjacentStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_hit(&self) -> Option<Coordinate> {
        self.last_hit
    }
}

impl ShootingStrategy for AdjacentStrategy {
    fn next_shot<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Coordinate {
        if let Some(hit) = self.last_hit {
            if let Some(target) = hit.neighbors().find(|c| board.is_targetable(*c)) {
                debug!("adjacent shot at {} next to {}", target, hit);
                return target;
            }
            // Neighbourhood exhausted.
            self.last_hit = None;
        }
        random_target(board, rng)
    }

    fn on_hit(&mut self, target: Coordinate) {
        self.last_hit = Some(target);
    }

    fn reset(&mut self) {
        self.last_hit = None;
    }
}

/// Hard: checkerboard hunting plus a FIFO target queue fed by hits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuntTargetStrategy {
    target_queue: VecDeque<Coordinate>,
    hit_history: Vec<Coordinate>,
}

impl HuntTargetStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending targets in the order they will be tried.
    pub fn target_queue(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.target_queue.iter().copied()
    }

    /// Hits not yet known to belong to a sunk ship.
    pub fn hit_history(&self) -> &[Coordinate] {
        &self.hit_history
    }

    fn enqueue(&mut self, coord: Coordinate) {
        if !self.target_queue.contains(&coord) {
            self.target_queue.push_back(coord);
        }
    }

    fn pop_target(&mut self, board: &Board) -> Option<Coordinate> {
        while let Some(target) = self.target_queue.pop_front() {
            if board.is_targetable(target) {
                return Some(target);
            }
        }
        None
    }

    /// Queue targetable neighbours of every remembered hit that is not sunk.
    fn retarget_from_history(&mut self, board: &Board) {
        let pending: Vec<Coordinate> = self
            .hit_history
            .iter()
            .copied()
            .filter(|hit| board.cell(*hit) == CellState::Hit)
            .collect();
        for hit in pending {
            for adj in hit.neighbors() {
                if board.is_targetable(adj) {
                    self.enqueue(adj);
                }
            }
        }
    }

    fn hunt<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Coordinate {
        let checkerboard: Vec<Coordinate> = board
            .targetable_cells()
            .filter(Coordinate::is_checkerboard)
            .collect();
        match checkerboard.choose(rng) {
            Some(shot) => {
                debug!("hunting on checkerboard at {}", shot);
                *shot
            }
            None => {
                debug!("checkerboard exhausted, random fallback");
                random_target(board, rng)
            }
        }
    }
}

impl ShootingStrategy for HuntTargetStrategy {
    fn next_shot<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Coordinate {
        if let Some(target) = self.pop_target(board) {
            debug!("targeting {}", target);
            return target;
        }
        self.retarget_from_history(board);
        if let Some(target) = self.pop_target(board) {
            debug!("re-targeting {}", target);
            return target;
        }
        Self::hunt(board, rng)
    }

    fn on_hit(&mut self, target: Coordinate) {
        if !self.hit_history.contains(&target) {
            self.hit_history.push(target);
        }
        // Known misses may be queued here; `pop_target` drops spent cells.
        for adj in target.neighbors() {
            if !self.hit_history.contains(&adj) {
                self.enqueue(adj);
            }
        }
    }

    fn on_sunk(&mut self, ship_cells: &[Coordinate]) {
        debug!("ship sunk, dropping pursuit of {} cells", ship_cells.len());
        self.hit_history.retain(|c| !ship_cells.contains(c));
        for cell in ship_cells {
            for adj in cell.neighbors() {
                self.target_queue.retain(|c| *c != adj);
            }
        }
    }

    fn reset(&mut self) {
        self.target_queue.clear();
        self.hit_history.clear();
    }
}

/// The machine's active strategy, selected by difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    Random(RandomStrategy),
    Adjacent(AdjacentStrategy),
    HuntTarget(HuntTargetStrategy),
}

impl Strategy {
    /// Fresh strategy for `difficulty`, with no memory.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Strategy::Random(RandomStrategy),
            Difficulty::Medium => Strategy::Adjacent(AdjacentStrategy::new()),
            Difficulty::Hard => Strategy::HuntTarget(HuntTargetStrategy::new()),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        match self {
            Strategy::Random(_) => Difficulty::Easy,
            Strategy::Adjacent(_) => Difficulty::Medium,
            Strategy::HuntTarget(_) => Difficulty::Hard,
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::for_difficulty(Difficulty::default())
    }
}

impl ShootingStrategy for Strategy {
    fn next_shot<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Coordinate {
        match self {
            Strategy::Random(s) => s.next_shot(board, rng),
            Strategy::Adjacent(s) => s.next_shot(board, rng),
            Strategy::HuntTarget(s) => s.next_shot(board, rng),
        }
    }

    fn on_hit(&mut self, target: Coordinate) {
        match self {
            Strategy::Random(s) => s.on_hit(target),
            Strategy::Adjacent(s) => s.on_hit(target),
            Strategy::HuntTarget(s) => s.on_hit(target),
        }
    }

    fn on_sunk(&mut self, ship_cells: &[Coordinate]) {
        match self {
            Strategy::Random(s) => s.on_sunk(ship_cells),
            Strategy::Adjacent(s) => s.on_sunk(ship_cells),
            Strategy::HuntTarget(s) => s.on_sunk(ship_cells),
        }
    }

    fn reset(&mut self) {
        match self {
            Strategy::Random(s) => s.reset(),
            Strategy::Adjacent(s) => s.reset(),
            Strategy::HuntTarget(s) => s.reset(),
        }
    }
}
