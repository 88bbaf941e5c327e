use std::time::{Duration, Instant};

use infexion::{Action, Color, Game, GameResult};
use log::debug;
use rand::{rngs::StdRng, Rng};

use super::{node::Node, policy::candidate_actions};
use crate::config::SearchConfig;

/// Monte Carlo tree search with UCT selection.
///
/// Each playout runs the four usual phases: descend by UCT until a node with
/// an untried action, expand one child, play a uniform-random rollout to a
/// terminal state, then push the result back up while the recursion unwinds,
/// flipping the reward at every level.
pub struct Mcts<const N: usize> {
    root: Node<N>,
    rng: StdRng,
    iterations: u32,
    time_limit: Duration,
    exploration: f32,
    power_cap: u32,
}

impl<const N: usize> Mcts<N> {
    pub fn new(game: Game<N>, config: &SearchConfig) -> Self {
        let mut rng = config.rng();
        let power_cap = config.power_cap_for::<N>();
        Mcts {
            root: Node::root(game, power_cap, &mut rng),
            rng,
            iterations: config.iterations,
            time_limit: config.time_limit,
            exploration: config.exploration,
            power_cap,
        }
    }

    /// Run playouts until the iteration cap or the deadline, then return the
    /// most visited root action.
    pub fn search(&mut self) -> Action {
        let start = Instant::now();
        let deadline = start + self.time_limit;
        let mut playouts = 0;
        while playouts < self.iterations && Instant::now() < deadline {
            Self::playout(
                &mut self.root,
                &mut self.rng,
                self.exploration,
                self.power_cap,
            );
            playouts += 1;
        }
        debug!(
            "mcts: {playouts} playouts, {} root children, {:?} elapsed",
            self.root.children.len(),
            start.elapsed()
        );
        self.pick_action(true)
            .unwrap_or_else(|| self.random_fallback())
    }

    /// The final pick. When `exploitation` is true this is the most visited
    /// child; otherwise a child sampled by visit weight, for variety.
    pub fn pick_action(&mut self, exploitation: bool) -> Option<Action> {
        if exploitation {
            self.root.best_action()
        } else {
            self.root.sample_action(&mut self.rng)
        }
    }

    fn playout(node: &mut Node<N>, rng: &mut StdRng, exploration: f32, power_cap: u32) -> f32 {
        // Rewards are scored for the player who moved into this node.
        let perspective = node.game.to_move.next();
        let reward = match node.game.result() {
            GameResult::Ongoing => {
                if let Some(index) = Self::expand(node, rng, power_cap) {
                    let child = &mut node.children[index];
                    let perspective = child.game.to_move.next();
                    let reward = Self::rollout(child.game.clone(), perspective, rng, power_cap);
                    child.visits += 1;
                    child.wins += reward;
                    1.0 - reward
                } else if node.children.is_empty() {
                    // Nothing playable at a non-terminal node: score the
                    // standing power balance instead of failing.
                    Self::standoff(&node.game, perspective)
                } else {
                    let child = Self::select(&mut node.children, node.visits, exploration);
                    1.0 - Self::playout(child, rng, exploration, power_cap)
                }
            }
            result => Self::reward(result, perspective),
        };
        node.visits += 1;
        node.wins += reward;
        reward
    }

    /// Materialize one untried action into a child.
    /// A candidate that fails to apply is dropped and another is sampled.
    fn expand(node: &mut Node<N>, rng: &mut StdRng, power_cap: u32) -> Option<usize> {
        while !node.untried.is_empty() {
            let pick = rng.gen_range(0..node.untried.len());
            let action = node.untried.swap_remove(pick);
            let mut game = node.game.clone();
            if game.play(action).is_ok() {
                node.children.push(Node::child(game, action, power_cap, rng));
                return Some(node.children.len() - 1);
            }
        }
        None
    }

    fn select(children: &mut [Node<N>], parent_visits: u32, exploration: f32) -> &mut Node<N> {
        let ln_n = (parent_visits as f32).ln();
        let uct = |child: &Node<N>| -> f32 {
            child.win_rate() + exploration * (ln_n / child.visits as f32).sqrt()
        };
        children
            .iter_mut()
            .max_by(|a, b| uct(a).partial_cmp(&uct(b)).expect("tried comparing nan"))
            .expect("tried to select on a node without children")
    }

    /// Uniform-random play on a disposable copy until the game ends.
    fn rollout(mut game: Game<N>, perspective: Color, rng: &mut StdRng, power_cap: u32) -> f32 {
        loop {
            let result = game.result();
            if result != GameResult::Ongoing {
                return Self::reward(result, perspective);
            }
            let mut candidates = candidate_actions(&game, game.to_move, power_cap, rng);
            loop {
                if candidates.is_empty() {
                    return Self::standoff(&game, perspective);
                }
                let pick = rng.gen_range(0..candidates.len());
                let action = candidates.swap_remove(pick);
                if game.play(action).is_ok() {
                    break;
                }
            }
        }
    }

    fn reward(result: GameResult, perspective: Color) -> f32 {
        match result {
            GameResult::Winner(color) if color == perspective => 1.0,
            GameResult::Winner(_) => 0.0,
            GameResult::Draw => 0.5,
            GameResult::Ongoing => unreachable!("reward of an ongoing game"),
        }
    }

    /// Reward stand-in for positions where no candidate action applies.
    fn standoff(game: &Game<N>, perspective: Color) -> f32 {
        let own = game.board.total_power(perspective);
        let opp = game.board.total_power(perspective.next());
        match own.cmp(&opp) {
            std::cmp::Ordering::Greater => 1.0,
            std::cmp::Ordering::Less => 0.0,
            std::cmp::Ordering::Equal => 0.5,
        }
    }

    /// Budget exhausted before any expansion: fall back to a random legal
    /// action rather than failing.
    fn random_fallback(&mut self) -> Action {
        let game = self.root.game.clone();
        let mut candidates =
            candidate_actions(&game, game.to_move, self.power_cap, &mut self.rng);
        while !candidates.is_empty() {
            let pick = self.rng.gen_range(0..candidates.len());
            let action = candidates.swap_remove(pick);
            if game.clone().play(action).is_ok() {
                return action;
            }
        }
        // The cap may have suppressed spawns with no spread available.
        let (spawns, spreads) = game.possible_actions(game.to_move);
        spreads
            .into_iter()
            .chain(spawns)
            .next()
            .expect("no legal action available")
    }
}
