use crate::{action::Action, color::Color, direction::Direction, game::Game, pos::HexPos};

impl<const N: usize> Game<N> {
    /// Enumerate every action `color` could take: a spawn per empty cell and
    /// six spreads per owned cell, in a fixed row-major scan.
    /// Spawns and spreads are returned separately because the late-game
    /// candidate policy treats them differently.
    pub fn possible_actions(&self, color: Color) -> (Vec<Action>, Vec<Action>) {
        let mut spawns = Vec::new();
        let mut spreads = Vec::new();
        for r in 0..N {
            for q in 0..N {
                let pos = HexPos::new(r, q);
                match self.board[pos] {
                    None => spawns.push(Action::Spawn { pos }),
                    Some(tile) if tile.color == color => {
                        for direction in Direction::ALL {
                            spreads.push(Action::Spread { pos, direction });
                        }
                    }
                    Some(_) => {}
                }
            }
        }
        (spawns, spreads)
    }
}
