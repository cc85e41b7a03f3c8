use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotFound = 1,
    InvalidState = 2,
    SelfJoin = 3,
    NotPlayer = 4,
    ShipIdOutOfBound = 5,
    InvalidRectangle = 6,
    OutOfBound = 7,
    SizeMismatch = 8,
    ShipsNotSetup = 9,
    NotYourTurn = 10,
    MoveOutOfBound = 11,
    InvalidShipType = 12,
}
