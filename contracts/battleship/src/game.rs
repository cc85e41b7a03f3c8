use soroban_sdk::{Address, Env, Vec};

use crate::error::Error;
use crate::types::{Coord, Round, Ship, ShipType, BOARD_COLS, BOARD_ROWS};

pub fn require_player(round: &Round, player: &Address) -> Result<(), Error> {
    if *player == round.p1 || round.p2.as_ref() == Some(player) {
        Ok(())
    } else {
        Err(Error::NotPlayer)
    }
}

/// Validates a rectangular placement against the fleet configuration and
/// returns the encoded full-health ship. The checks run in a fixed order so
/// each failure mode is independently observable: ship id, rectangle
/// orientation, board bounds, declared size.
pub fn place_ship(
    ship_types: &Vec<ShipType>,
    ship_id: u32,
    top_left: &Coord,
    bottom_right: &Coord,
) -> Result<Ship, Error> {
    if ship_id >= ship_types.len() {
        return Err(Error::ShipIdOutOfBound);
    }
    if top_left.row > bottom_right.row || top_left.col > bottom_right.col {
        return Err(Error::InvalidRectangle);
    }
    // Coordinates are unsigned, so with an ordered rectangle only the
    // bottom-right corner can leave the board.
    if bottom_right.row >= BOARD_ROWS || bottom_right.col >= BOARD_COLS {
        return Err(Error::OutOfBound);
    }

    let ty = ship_types.get_unchecked(ship_id);
    let rows = bottom_right.row - top_left.row + 1;
    let cols = bottom_right.col - top_left.col + 1;
    // No implicit rotation: the rectangle must match the declared
    // orientation exactly.
    if rows != ty.size.row || cols != ty.size.col {
        return Err(Error::SizeMismatch);
    }

    Ok(Ship {
        top_left: top_left.clone(),
        bottom_right: bottom_right.clone(),
        body: full_body(rows * cols),
        alive: true,
    })
}

// The constructor caps ship types at 64 cells, so the shift cannot
// overflow.
fn full_body(cells: u32) -> u64 {
    (1u64 << cells) - 1
}

fn covers(ship: &Ship, cell: &Coord) -> bool {
    cell.row >= ship.top_left.row
        && cell.row <= ship.bottom_right.row
        && cell.col >= ship.top_left.col
        && cell.col <= ship.bottom_right.col
}

/// Body bit covering `cell`. Row-major cell index from `top_left`, first
/// cell on the highest bit (see `Ship`). Caller guarantees `cell` is inside
/// the ship's rectangle.
fn body_bit(ship: &Ship, cell: &Coord) -> u64 {
    let rows = ship.bottom_right.row - ship.top_left.row + 1;
    let cols = ship.bottom_right.col - ship.top_left.col + 1;
    let idx = (cell.row - ship.top_left.row) * cols + (cell.col - ship.top_left.col);
    1u64 << (rows * cols - 1 - idx)
}

pub struct MoveOutcome {
    pub hit: bool,
    /// Ship ids whose body reached zero on this move.
    pub sunk: Vec<u32>,
    pub fleet_destroyed: bool,
}

/// Resolves one cell against a fleet. Any still-alive ship whose rectangle
/// covers the cell counts as a hit and has the matching body bit cleared;
/// firing again at an already-cleared cell of a living ship is a hit with
/// no body change. Dead ships are skipped, so a sink is reported exactly
/// once. Overlapping ships (placement does not forbid them) can all be hit
/// by a single move.
pub fn apply_move(env: &Env, ships: &mut Vec<Ship>, cell: &Coord) -> MoveOutcome {
    let mut hit = false;
    let mut sunk = Vec::new(env);
    let mut alive_left = 0u32;

    for i in 0..ships.len() {
        let mut ship = ships.get_unchecked(i);
        if !ship.alive {
            continue;
        }
        if covers(&ship, cell) {
            hit = true;
            ship.body &= !body_bit(&ship, cell);
            if ship.body == 0 {
                ship.alive = false;
                sunk.push_back(i);
            }
            ships.set(i, ship.clone());
        }
        if ship.alive {
            alive_left += 1;
        }
    }

    MoveOutcome {
        hit,
        sunk,
        fleet_destroyed: alive_left == 0,
    }
}
