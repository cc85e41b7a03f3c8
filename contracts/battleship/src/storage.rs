use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::error::Error;
use crate::types::{Coord, Round, Ship, ShipType};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    ShipTypes,
    NextRoundId,
    Round(u64),
    Ships(u64, Address),
    Moves(u64, Address),
}

pub const ROUND_TTL_LEDGERS: u32 = 518_400;

pub fn admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("admin not set")
}

pub fn ship_types(env: &Env) -> Vec<ShipType> {
    env.storage()
        .instance()
        .get(&DataKey::ShipTypes)
        .expect("ship types not set")
}

pub fn next_round_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextRoundId)
        .unwrap_or(0)
}

/// Returns the id for a new round and advances the counter. Ids are never
/// reused.
pub fn bump_round_id(env: &Env) -> u64 {
    let id = next_round_id(env);
    env.storage().instance().set(&DataKey::NextRoundId, &(id + 1));
    id
}

pub fn load_round(env: &Env, round_id: u64) -> Result<Round, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Round(round_id))
        .ok_or(Error::NotFound)
}

pub fn save_round(env: &Env, round: &Round) {
    let key = DataKey::Round(round.id);
    env.storage().persistent().set(&key, round);
    env.storage()
        .persistent()
        .extend_ttl(&key, ROUND_TTL_LEDGERS, ROUND_TTL_LEDGERS);
}

/// Loads a player's fleet, defaulting every slot to the zero ship so the
/// view matches mapping semantics for players who have not set up yet.
pub fn load_ships(env: &Env, round_id: u64, player: &Address, total: u32) -> Vec<Ship> {
    env.storage()
        .persistent()
        .get(&DataKey::Ships(round_id, player.clone()))
        .unwrap_or_else(|| {
            let mut ships = Vec::new(env);
            for _ in 0..total {
                ships.push_back(Ship::unplaced());
            }
            ships
        })
}

pub fn save_ships(env: &Env, round_id: u64, player: &Address, ships: &Vec<Ship>) {
    let key = DataKey::Ships(round_id, player.clone());
    env.storage().persistent().set(&key, ships);
    env.storage()
        .persistent()
        .extend_ttl(&key, ROUND_TTL_LEDGERS, ROUND_TTL_LEDGERS);
}

pub fn load_moves(env: &Env, round_id: u64, player: &Address) -> Vec<Coord> {
    env.storage()
        .persistent()
        .get(&DataKey::Moves(round_id, player.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn save_moves(env: &Env, round_id: u64, player: &Address, moves: &Vec<Coord>) {
    let key = DataKey::Moves(round_id, player.clone());
    env.storage().persistent().set(&key, moves);
    env.storage()
        .persistent()
        .extend_ttl(&key, ROUND_TTL_LEDGERS, ROUND_TTL_LEDGERS);
}
