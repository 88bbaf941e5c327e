use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};

/// Which engine decides the next action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Minimax,
    Mcts,
}

/// Budget and tuning knobs shared by both engines.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Minimax ply cap for iterative deepening.
    pub max_depth: usize,
    /// Wall-clock budget for one decision, shared by both engines.
    pub time_limit: Duration,
    /// MCTS playout cap.
    pub iterations: u32,
    /// UCT exploration constant.
    pub exploration: f32,
    /// Combined-power threshold past which spawns are suppressed.
    /// Defaults to the board cell count when unset.
    pub power_cap: Option<u32>,
    /// Fixing the seed makes either engine deterministic.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            strategy: Strategy::Minimax,
            max_depth: 3,
            time_limit: Duration::from_millis(800),
            iterations: 1000,
            exploration: std::f32::consts::SQRT_2,
            power_cap: None,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn power_cap_for<const N: usize>(&self) -> u32 {
        self.power_cap.unwrap_or((N * N) as u32)
    }
}
