//! Contract events, the only notification surface. Clients subscribe or
//! poll; nothing is pushed synchronously. Every event carries the round id
//! as a topic.

use soroban_sdk::{contractevent, Address};

use crate::types::{Coord, GameState};

#[contractevent]
pub struct NewGame {
    #[topic]
    pub round_id: u64,
    pub p1: Address,
}

#[contractevent]
pub struct P2Joined {
    #[topic]
    pub round_id: u64,
    pub p2: Address,
}

#[contractevent]
pub struct SetupShip {
    #[topic]
    pub round_id: u64,
    pub player: Address,
    pub ship_id: u32,
}

#[contractevent]
pub struct GameStart {
    #[topic]
    pub round_id: u64,
}

#[contractevent]
pub struct Hit {
    #[topic]
    pub round_id: u64,
    pub opponent: Address,
}

#[contractevent]
pub struct SinkShip {
    #[topic]
    pub round_id: u64,
    pub opponent: Address,
    pub ship_id: u32,
}

#[contractevent]
pub struct GameWon {
    #[topic]
    pub round_id: u64,
    pub winner: Address,
    pub state: GameState,
}

/// Carries the resulting game state, not the action, so observers can tell
/// hit/miss/turn/win from the event stream alone. Always published last in
/// a move.
#[contractevent]
pub struct PlayerMove {
    #[topic]
    pub round_id: u64,
    pub player: Address,
    pub cell: Coord,
    pub state: GameState,
}
