use std::fmt::{self, Display};

use crate::{direction::Direction, pos::HexPos};

/// One move: place a new power-1 token, or propagate an owned token's power
/// outward along a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Spawn { pos: HexPos },
    Spread { pos: HexPos, direction: Direction },
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Spawn { pos } => write!(f, "SPAWN {pos}"),
            Action::Spread { pos, direction } => write!(f, "SPREAD {pos} {direction}"),
        }
    }
}
