use soroban_sdk::{contracttype, Address, String};

pub const BOARD_ROWS: u32 = 10;
pub const BOARD_COLS: u32 = 10;

/// A `(row, col)` pair. Doubles as a `(rows, cols)` dimension pair in
/// `ShipType::size` and `get_board_size`, the same way the original wire
/// format used a bare two-element array for both.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

/// Fleet template every player places once per round. Fixed at deployment;
/// the constructor rejects sizes that leave the board or exceed 64 cells
/// (the width of a ship body).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShipType {
    pub name: String,
    pub size: Coord,
}

/// One placed ship of one player in one round.
///
/// `body` tracks unhit cells. Cells are numbered row-major within the
/// ship's own footprint starting at `top_left`; cell `i` of an `n`-cell
/// ship occupies bit `n - 1 - i`, so the first cell is the highest set bit.
/// A fresh `n`-cell ship carries `body = (1 << n) - 1`; `body == 0` means
/// sunk. The zero ship marks a slot that has not been set up yet.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ship {
    pub top_left: Coord,
    pub bottom_right: Coord,
    pub body: u64,
    pub alive: bool,
}

impl Ship {
    pub fn unplaced() -> Self {
        Ship {
            top_left: Coord { row: 0, col: 0 },
            bottom_right: Coord { row: 0, col: 0 },
            body: 0,
            alive: false,
        }
    }
}

/// Round lifecycle. Progress is strictly forward; the two move states
/// alternate until a terminal `Won` state is reached.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameState {
    P1Joined,
    P2Joined,
    P1Move,
    P2Move,
    P1Won,
    P2Won,
}

/// One two-player game instance. `p2` is `None` until someone joins.
/// `end_time` stays 0 until a win; rounds are never deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Round {
    pub id: u64,
    pub p1: Address,
    pub p2: Option<Address>,
    pub state: GameState,
    pub start_time: u64,
    pub last_update: u64,
    pub end_time: u64,
}
