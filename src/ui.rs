#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{
    board::{Board, CellState},
    config::BOARD_SIZE,
    coordinate::Coordinate,
    game::GameEngine,
};

fn cell_char(state: CellState, reveal: bool) -> char {
    match state {
        CellState::Water => '.',
        CellState::ShipPresent if reveal => 'S',
        CellState::ShipPresent => '.',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Sunk => '#',
    }
}

fn render_grid(board: &Board, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("    ╔═══════════════════════╗\n");
    out.push_str("    ║  ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c) as char);
    }
    out.push_str(" ║\n");
    out.push_str("    ╠═══════════════════════╣\n");
    for r in 0..BOARD_SIZE as usize {
        let _ = write!(out, "    ║ {:2}", r + 1);
        for c in 0..BOARD_SIZE as usize {
            let ch = Coordinate::new(r, c)
                .map(|coord| cell_char(board.cell(coord), reveal))
                .unwrap_or(' ');
            let _ = write!(out, " {}", ch);
        }
        out.push_str(" ║\n");
    }
    out.push_str("    ╚═══════════════════════╝\n");
    out
}

/// The player's own board with ships revealed.
pub fn render_own_board(board: &Board) -> String {
    let mut out = render_grid(board, true);
    out.push_str("    Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water\n");
    out
}

/// The opponent's board with undamaged ships hidden.
pub fn render_target_board(board: &Board) -> String {
    let mut out = render_grid(board, false);
    out.push_str("    Legend: X=Hit  #=Sunk  o=Miss  .=Unknown\n");
    out
}

/// One line per ship: name, length and whether it is still afloat.
pub fn render_fleet_status(board: &Board) -> String {
    let mut out = String::new();
    for ship in board.ships() {
        let status = if ship.is_sunk() { "SUNK" } else { "Active" };
        let _ = writeln!(out, "      {} ({}): {}", ship.kind(), ship.length(), status);
    }
    out
}

/// Opponent board on top, own board below, each followed by its fleet status.
pub fn render_player_view(engine: &GameEngine) -> String {
    let mut out = String::from("Enemy waters:\n");
    out.push_str(&render_target_board(engine.machine_board()));
    out.push_str(&render_fleet_status(engine.machine_board()));
    out.push_str("\nYour fleet:\n");
    out.push_str(&render_own_board(engine.player_board()));
    out.push_str(&render_fleet_status(engine.player_board()));
    out
}
