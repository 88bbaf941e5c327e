use infexion::{Action, Game};
use rand::rngs::StdRng;
use rand_distr::{Distribution, WeightedIndex};

use super::policy::candidate_actions;

/// One node of the MCTS tree. The node owns its game state and its children;
/// backpropagation happens while the recursive playout unwinds, so no parent
/// links are needed.
///
/// `wins` accumulates rewards from the perspective of the player who moved
/// into this node, flipping at every tree level.
pub struct Node<const N: usize> {
    pub game: Game<N>,
    pub action: Option<Action>,
    pub children: Vec<Node<N>>,
    pub untried: Vec<Action>,
    pub visits: u32,
    pub wins: f32,
}

impl<const N: usize> Node<N> {
    pub fn root(game: Game<N>, power_cap: u32, rng: &mut StdRng) -> Self {
        let untried = candidate_actions(&game, game.to_move, power_cap, rng);
        Node {
            game,
            action: None,
            children: Vec::new(),
            untried,
            visits: 0,
            wins: 0.0,
        }
    }

    pub fn child(game: Game<N>, action: Action, power_cap: u32, rng: &mut StdRng) -> Self {
        let untried = candidate_actions(&game, game.to_move, power_cap, rng);
        Node {
            game,
            action: Some(action),
            children: Vec::new(),
            untried,
            visits: 0,
            wins: 0.0,
        }
    }

    pub fn win_rate(&self) -> f32 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / self.visits as f32
        }
    }

    /// The child action with the most visits, ties broken by win rate.
    /// Exploration plays no part in the final choice.
    pub fn best_action(&self) -> Option<Action> {
        self.children
            .iter()
            .max_by(|a, b| {
                (a.visits, a.win_rate())
                    .partial_cmp(&(b.visits, b.win_rate()))
                    .expect("tried comparing nan")
            })
            .and_then(|child| child.action)
    }

    /// A child action sampled with probability proportional to visits.
    /// Used for opening variety instead of the greedy pick.
    pub fn sample_action(&self, rng: &mut StdRng) -> Option<Action> {
        let weights: Vec<u32> = self.children.iter().map(|child| child.visits).collect();
        let distr = WeightedIndex::new(&weights).ok()?;
        self.children[distr.sample(rng)].action
    }
}
