use infexion::{Action, Color, Game, PlayError};
use log::info;

use crate::{
    config::{SearchConfig, Strategy},
    search::{Mcts, Minimax},
};

/// Run one engine for `color` against `state` and return one legal action.
/// The strategy and budget come from the config; the engines themselves
/// guarantee a legal answer even when the budget is exhausted immediately.
pub fn choose_action<const N: usize>(
    state: &Game<N>,
    color: Color,
    config: &SearchConfig,
) -> Action {
    debug_assert_eq!(state.to_move, color);
    match config.strategy {
        Strategy::Minimax => Minimax::new(state.clone(), color, config).search(),
        Strategy::Mcts => Mcts::new(state.clone(), config).search(),
    }
}

/// One side of the game: a retained game state plus a search configuration.
///
/// The surrounding harness asks for an action when it is this side's turn
/// and reports every action actually played, own and opponent alike.
pub struct Agent<const N: usize> {
    color: Color,
    game: Game<N>,
    config: SearchConfig,
}

impl<const N: usize> Agent<N> {
    pub fn new(color: Color, config: SearchConfig) -> Self {
        Agent {
            color,
            game: Game::default(),
            config,
        }
    }

    pub fn from_state(game: Game<N>, color: Color, config: SearchConfig) -> Self {
        Agent {
            color,
            game,
            config,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn game(&self) -> &Game<N> {
        &self.game
    }

    /// Decide the next action for the retained state.
    pub fn choose_action(&mut self) -> Action {
        let action = choose_action(&self.game, self.color, &self.config);
        info!("{} plays {action}", self.color);
        action
    }

    /// Fold a played action into the retained state.
    /// An illegal action here is a protocol violation by the harness or the
    /// opponent, so the error is surfaced instead of recovered.
    pub fn observe(&mut self, action: Action) -> Result<(), PlayError> {
        self.game.play(action)
    }
}
