use std::cmp::Ordering;

use crate::{
    action::Action,
    board::Board,
    color::Color,
    direction::Direction,
    error::PlayError,
    game_result::GameResult,
    pos::HexPos,
    tile::Tile,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game<const N: usize> {
    pub board: Board<N>,
    pub to_move: Color,
    pub turn: u32,
}

impl<const N: usize> Default for Game<N> {
    fn default() -> Self {
        Game {
            board: Board::default(),
            to_move: Color::Red,
            turn: 0,
        }
    }
}

impl<const N: usize> Game<N> {
    /// Turn count at which an undecided game is scored and stopped.
    pub const TURN_HORIZON: u32 = (N * N * N) as u32;
    /// Combined cell count of the board.
    pub const CELL_COUNT: u32 = (N * N) as u32;

    fn execute_spawn(&mut self, pos: HexPos) -> Result<(), PlayError> {
        if self.board[pos].is_some() {
            return Err(PlayError::Occupied);
        }
        self.board[pos] = Some(Tile::new(self.to_move));
        Ok(())
    }

    fn execute_spread(&mut self, pos: HexPos, direction: Direction) -> Result<(), PlayError> {
        let tile = self.board[pos].ok_or(PlayError::EmptySource)?;
        if tile.color != self.to_move {
            return Err(PlayError::NotOwned);
        }
        // The source empties and its power is dropped one unit per cell along
        // the ray. Landing cells flip to the mover; a cell pushed past the
        // power cap clears instead.
        self.board[pos] = None;
        for target in pos.ray::<N>(direction, tile.power as usize) {
            self.board[target] = match self.board[target] {
                None => Some(Tile::new(self.to_move)),
                Some(hit) => hit.captured_by(self.to_move),
            };
        }
        Ok(())
    }

    /// Apply one action for the side to move.
    /// The error is recoverable for search callers, which simply pick a
    /// different candidate. The state is unchanged when an error is returned.
    pub fn play(&mut self, action: Action) -> Result<(), PlayError> {
        match action {
            Action::Spawn { pos } => self.execute_spawn(pos),
            Action::Spread { pos, direction } => self.execute_spread(pos, direction),
        }?;
        self.turn += 1;
        self.to_move = self.to_move.next();
        Ok(())
    }

    /// Terminal test and winner detection in one.
    /// The game ends once a side runs out of power after the opening phase,
    /// or when the turn horizon is reached. The side with strictly greater
    /// total power wins; an exact tie is a draw.
    pub fn result(&self) -> GameResult {
        if self.turn < 2 {
            return GameResult::Ongoing;
        }
        let red = self.board.total_power(Color::Red);
        let blue = self.board.total_power(Color::Blue);
        if red == 0 || blue == 0 || self.turn >= Self::TURN_HORIZON {
            match red.cmp(&blue) {
                Ordering::Greater => GameResult::Winner(Color::Red),
                Ordering::Less => GameResult::Winner(Color::Blue),
                Ordering::Equal => GameResult::Draw,
            }
        } else {
            GameResult::Ongoing
        }
    }

    /// Heuristic score of the position from `perspective`, used only by
    /// search. Power difference is weighted over cell-count difference, and
    /// the power weight grows once half the board is occupied.
    pub fn evaluate(&self, perspective: Color) -> i32 {
        let own_power = self.board.total_power(perspective) as i32;
        let opp_power = self.board.total_power(perspective.next()) as i32;
        let own_cells = self.board.count_cells(perspective) as i32;
        let opp_cells = self.board.count_cells(perspective.next()) as i32;

        let endgame = own_cells + opp_cells >= (Self::CELL_COUNT / 2) as i32;
        let power_weight = if endgame { 3 } else { 2 };
        let cell_weight = 1;

        power_weight * (own_power - opp_power) + cell_weight * (own_cells - opp_cells)
    }
}
