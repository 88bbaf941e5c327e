//! Pit the two engines against each other on a local board.

use infexion::{Color, GameResult};
use infexion_agent::{Agent, SearchConfig, Strategy};
use log::{info, LevelFilter};

fn main() {
    simple_logging::log_to_stderr(LevelFilter::Debug);

    let red = SearchConfig {
        strategy: Strategy::Minimax,
        max_depth: 2,
        ..Default::default()
    };
    let blue = SearchConfig {
        strategy: Strategy::Mcts,
        iterations: 400,
        ..Default::default()
    };

    let mut red = Agent::<7>::new(Color::Red, red);
    let mut blue = Agent::<7>::new(Color::Blue, blue);

    loop {
        let result = red.game().result();
        if result != GameResult::Ongoing {
            info!("game over after {} turns: {result:?}", red.game().turn);
            break;
        }
        let action = if red.game().to_move == Color::Red {
            red.choose_action()
        } else {
            blue.choose_action()
        };
        red.observe(action).expect("engines only pick legal actions");
        blue.observe(action).expect("engines only pick legal actions");
    }
}
