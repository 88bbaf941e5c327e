mod action;
mod board;
mod color;
mod direction;
mod error;
mod game;
mod game_result;
mod move_gen;
mod pos;
mod tile;

pub use action::Action;
pub use board::Board;
pub use color::Color;
pub use direction::Direction;
pub use error::PlayError;
pub use game::Game;
pub use game_result::GameResult;
pub use pos::HexPos;
pub use tile::{Tile, MAX_POWER};
