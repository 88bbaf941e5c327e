use std::time::{Duration, Instant};

use infexion::{Action, Color, Game, GameResult};
use log::debug;
use rand::{rngs::StdRng, Rng};

use super::policy::candidate_actions;
use crate::config::SearchConfig;

/// Sentinel for a decided game, far above any heuristic score.
pub(crate) const WIN: i32 = i32::MAX / 2;

/// Internal unwind signal for a depth abandoned at the deadline.
/// Never escapes the crate.
pub(crate) struct Timeout;

/// Iterative-deepening alpha-beta search.
///
/// Depths 1..=max_depth are searched in turn; the answer of the last fully
/// completed depth is kept, and a depth cut short by the wall clock is
/// discarded. All leaf evaluations use the root color, only the
/// maximize/minimize role alternates with ply parity.
pub struct Minimax<const N: usize> {
    root: Game<N>,
    color: Color,
    rng: StdRng,
    max_depth: usize,
    time_limit: Duration,
    power_cap: u32,
    nodes: u64,
}

impl<const N: usize> Minimax<N> {
    pub fn new(game: Game<N>, color: Color, config: &SearchConfig) -> Self {
        Minimax {
            root: game,
            color,
            rng: config.rng(),
            max_depth: config.max_depth,
            time_limit: config.time_limit,
            power_cap: config.power_cap_for::<N>(),
            nodes: 0,
        }
    }

    pub fn search(&mut self) -> Action {
        let start = Instant::now();
        self.search_until(start + self.time_limit)
    }

    pub fn search_until(&mut self, deadline: Instant) -> Action {
        let start = Instant::now();
        let mut best = None;
        for depth in 1..=self.max_depth {
            self.nodes = 0;
            match self.depth_search(depth, deadline) {
                Ok((value, action)) => {
                    if action.is_some() {
                        best = action;
                    }
                    debug!(
                        "minimax: depth {depth} complete, value {value}, {} nodes, {:?} elapsed",
                        self.nodes,
                        start.elapsed()
                    );
                }
                Err(Timeout) => {
                    debug!("minimax: depth {depth} abandoned after {:?}", start.elapsed());
                    break;
                }
            }
            if Instant::now() >= deadline {
                break;
            }
        }
        best.unwrap_or_else(|| self.random_fallback())
    }

    /// One full alpha-beta search to `depth`, or `Timeout` if the deadline
    /// passed before it finished.
    pub(crate) fn depth_search(
        &mut self,
        depth: usize,
        deadline: Instant,
    ) -> Result<(i32, Option<Action>), Timeout> {
        let root = self.root.clone();
        self.alpha_beta(&root, depth, i32::MIN, i32::MAX, true, deadline)
    }

    fn alpha_beta(
        &mut self,
        game: &Game<N>,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        deadline: Instant,
    ) -> Result<(i32, Option<Action>), Timeout> {
        self.nodes += 1;
        match game.result() {
            GameResult::Ongoing => {}
            GameResult::Winner(color) => {
                let value = if color == self.color { WIN } else { -WIN };
                return Ok((value, None));
            }
            GameResult::Draw => return Ok((0, None)),
        }
        if depth == 0 {
            return Ok((game.evaluate(self.color), None));
        }
        if Instant::now() >= deadline {
            return Err(Timeout);
        }

        let children = self.ordered_children(game, maximizing);
        if children.is_empty() {
            // Nothing playable at a non-terminal node: score it as a leaf.
            return Ok((game.evaluate(self.color), None));
        }

        let mut best_action = None;
        if maximizing {
            let mut best_value = i32::MIN;
            for (action, child) in children {
                let (value, _) = self.alpha_beta(&child, depth - 1, alpha, beta, false, deadline)?;
                if value > best_value {
                    best_value = value;
                    best_action = Some(action);
                }
                alpha = alpha.max(best_value);
                if beta <= alpha {
                    break;
                }
            }
            Ok((best_value, best_action))
        } else {
            let mut best_value = i32::MAX;
            for (action, child) in children {
                let (value, _) = self.alpha_beta(&child, depth - 1, alpha, beta, true, deadline)?;
                if value < best_value {
                    best_value = value;
                    best_action = Some(action);
                }
                beta = beta.min(best_value);
                if beta <= alpha {
                    break;
                }
            }
            Ok((best_value, best_action))
        }
    }

    /// Successor states ordered so that likely-better moves are searched
    /// first, which tightens the alpha-beta window sooner.
    fn ordered_children(&mut self, game: &Game<N>, maximizing: bool) -> Vec<(Action, Game<N>)> {
        let candidates = candidate_actions(game, game.to_move, self.power_cap, &mut self.rng);
        let mut children = Vec::with_capacity(candidates.len());
        for action in candidates {
            let mut child = game.clone();
            if child.play(action).is_ok() {
                children.push((action, child));
            }
        }
        children.sort_by_key(|(_, child)| child.evaluate(self.color));
        if maximizing {
            children.reverse();
        }
        children
    }

    /// A search that never completed depth 1 still has to answer.
    fn random_fallback(&mut self) -> Action {
        let game = self.root.clone();
        let mut candidates =
            candidate_actions(&game, game.to_move, self.power_cap, &mut self.rng);
        while !candidates.is_empty() {
            let pick = self.rng.gen_range(0..candidates.len());
            let action = candidates.swap_remove(pick);
            if game.clone().play(action).is_ok() {
                return action;
            }
        }
        let (spawns, spreads) = game.possible_actions(game.to_move);
        spreads
            .into_iter()
            .chain(spawns)
            .next()
            .expect("no legal action available")
    }
}
