mod mcts;
mod minimax;
mod node;
mod policy;

pub use mcts::Mcts;
pub use minimax::Minimax;
pub use node::Node;
pub use policy::candidate_actions;
