#![no_std]

mod error;
mod events;
mod game;
mod storage;
mod types;

pub use error::Error;
pub use types::{Coord, GameState, Round, Ship, ShipType, BOARD_COLS, BOARD_ROWS};

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

use storage::DataKey;

#[contract]
pub struct BattleshipContract;

#[contractimpl]
impl BattleshipContract {
    /// `ship_types` is the ordered fleet every player must place once per
    /// round; it is fixed for the contract's lifetime. Every ship must fit
    /// the board and hold at most 64 cells so its body fits a `u64`.
    pub fn __constructor(
        env: Env,
        admin: Address,
        ship_types: Vec<ShipType>,
    ) -> Result<(), Error> {
        for ty in ship_types.iter() {
            if ty.size.row == 0
                || ty.size.col == 0
                || ty.size.row > BOARD_ROWS
                || ty.size.col > BOARD_COLS
            {
                return Err(Error::InvalidShipType);
            }
            if ty.size.row * ty.size.col > 64 {
                return Err(Error::InvalidShipType);
            }
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::ShipTypes, &ship_types);
        env.storage().instance().set(&DataKey::NextRoundId, &0u64);
        Ok(())
    }

    /// Opens a new round with the caller as player 1. Anyone may start a
    /// round, including repeatedly; ids are monotonic and never reused.
    pub fn new_game(env: Env, player: Address) -> u64 {
        player.require_auth();

        let round_id = storage::bump_round_id(&env);
        let now = env.ledger().timestamp();
        let round = Round {
            id: round_id,
            p1: player.clone(),
            p2: None,
            state: GameState::P1Joined,
            start_time: now,
            last_update: now,
            end_time: 0,
        };
        storage::save_round(&env, &round);

        events::NewGame {
            round_id,
            p1: player,
        }
        .publish(&env);
        round_id
    }

    pub fn p2_join(env: Env, round_id: u64, player: Address) -> Result<(), Error> {
        player.require_auth();

        let mut round = storage::load_round(&env, round_id)?;
        if round.state != GameState::P1Joined {
            return Err(Error::InvalidState);
        }
        if player == round.p1 {
            return Err(Error::SelfJoin);
        }

        round.p2 = Some(player.clone());
        round.state = GameState::P2Joined;
        round.last_update = env.ledger().timestamp();
        storage::save_round(&env, &round);

        events::P2Joined {
            round_id,
            p2: player,
        }
        .publish(&env);
        Ok(())
    }

    /// Places (or re-places) one ship before the game starts. Re-setup is
    /// allowed until `start_game`; the last call wins. Cross-ship overlap
    /// is not checked.
    pub fn setup_ship(
        env: Env,
        round_id: u64,
        player: Address,
        ship_id: u32,
        top_left: Coord,
        bottom_right: Coord,
    ) -> Result<(), Error> {
        player.require_auth();

        let mut round = storage::load_round(&env, round_id)?;
        game::require_player(&round, &player)?;
        if round.state != GameState::P1Joined && round.state != GameState::P2Joined {
            return Err(Error::InvalidState);
        }

        let ship_types = storage::ship_types(&env);
        let ship = game::place_ship(&ship_types, ship_id, &top_left, &bottom_right)?;

        let mut ships = storage::load_ships(&env, round_id, &player, ship_types.len());
        ships.set(ship_id, ship);
        storage::save_ships(&env, round_id, &player, &ships);

        round.last_update = env.ledger().timestamp();
        storage::save_round(&env, &round);

        events::SetupShip {
            round_id,
            player,
            ship_id,
        }
        .publish(&env);
        Ok(())
    }

    /// Moves the round into play once both fleets are fully placed. There
    /// is no way back into setup after this.
    pub fn start_game(env: Env, round_id: u64, player: Address) -> Result<(), Error> {
        player.require_auth();

        let mut round = storage::load_round(&env, round_id)?;
        game::require_player(&round, &player)?;
        if round.state != GameState::P2Joined {
            return Err(Error::InvalidState);
        }

        let total = storage::ship_types(&env).len();
        let p2 = round.p2.clone().ok_or(Error::InvalidState)?;
        for p in [&round.p1, &p2] {
            let ships = storage::load_ships(&env, round_id, p, total);
            for ship in ships.iter() {
                if ship.body == 0 {
                    return Err(Error::ShipsNotSetup);
                }
            }
        }

        round.state = GameState::P1Move;
        round.last_update = env.ledger().timestamp();
        storage::save_round(&env, &round);

        events::GameStart { round_id }.publish(&env);
        Ok(())
    }

    /// Fires at one cell of the opponent's board and advances the turn.
    /// Returns the resulting game state. Duplicate moves are accepted and
    /// recorded; see `game::apply_move` for repeat-hit semantics.
    pub fn player_move(
        env: Env,
        round_id: u64,
        player: Address,
        cell: Coord,
    ) -> Result<GameState, Error> {
        player.require_auth();

        let mut round = storage::load_round(&env, round_id)?;
        let (mover, opponent) = match round.state {
            GameState::P1Move => {
                let p2 = round.p2.clone().ok_or(Error::InvalidState)?;
                (round.p1.clone(), p2)
            }
            GameState::P2Move => {
                let p2 = round.p2.clone().ok_or(Error::InvalidState)?;
                (p2, round.p1.clone())
            }
            _ => return Err(Error::InvalidState),
        };
        if player != mover {
            return Err(Error::NotYourTurn);
        }
        if cell.row >= BOARD_ROWS || cell.col >= BOARD_COLS {
            return Err(Error::MoveOutOfBound);
        }

        let mut moves = storage::load_moves(&env, round_id, &player);
        moves.push_back(cell.clone());
        storage::save_moves(&env, round_id, &player, &moves);

        let total = storage::ship_types(&env).len();
        let mut ships = storage::load_ships(&env, round_id, &opponent, total);
        let outcome = game::apply_move(&env, &mut ships, &cell);
        storage::save_ships(&env, round_id, &opponent, &ships);

        if outcome.hit {
            events::Hit {
                round_id,
                opponent: opponent.clone(),
            }
            .publish(&env);
        }
        for ship_id in outcome.sunk.iter() {
            events::SinkShip {
                round_id,
                opponent: opponent.clone(),
                ship_id,
            }
            .publish(&env);
        }

        let now = env.ledger().timestamp();
        if outcome.fleet_destroyed {
            round.state = if round.state == GameState::P1Move {
                GameState::P1Won
            } else {
                GameState::P2Won
            };
            round.end_time = now;
            events::GameWon {
                round_id,
                winner: player.clone(),
                state: round.state.clone(),
            }
            .publish(&env);
        } else {
            round.state = if round.state == GameState::P1Move {
                GameState::P2Move
            } else {
                GameState::P1Move
            };
        }
        round.last_update = now;
        storage::save_round(&env, &round);

        events::PlayerMove {
            round_id,
            player,
            cell,
            state: round.state.clone(),
        }
        .publish(&env);
        Ok(round.state)
    }

    // ==================== Queries ====================

    pub fn get_round(env: Env, round_id: u64) -> Result<Round, Error> {
        storage::load_round(&env, round_id)
    }

    pub fn get_round_moves(env: Env, round_id: u64, player: Address) -> Result<Vec<Coord>, Error> {
        storage::load_round(&env, round_id)?;
        Ok(storage::load_moves(&env, round_id, &player))
    }

    pub fn get_round_ships(env: Env, round_id: u64, player: Address) -> Result<Vec<Ship>, Error> {
        storage::load_round(&env, round_id)?;
        let total = storage::ship_types(&env).len();
        Ok(storage::load_ships(&env, round_id, &player, total))
    }

    pub fn get_ship_types(env: Env) -> Vec<ShipType> {
        storage::ship_types(&env)
    }

    pub fn get_ship_type_num(env: Env) -> u32 {
        storage::ship_types(&env).len()
    }

    pub fn get_board_size(_env: Env) -> Coord {
        Coord {
            row: BOARD_ROWS,
            col: BOARD_COLS,
        }
    }

    pub fn next_round_id(env: Env) -> u64 {
        storage::next_round_id(&env)
    }

    pub fn owner(env: Env) -> Address {
        storage::admin(&env)
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = storage::admin(&env);
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}
