use infexion::{Action, Color, Game};
use rand::{rngs::StdRng, seq::SliceRandom};

/// Candidate actions for one ply of search: spreads in scan order, then the
/// spawns in a shuffled order. Once the combined power on the board reaches
/// the cap there is no room left to grow, so spawns are dropped and the
/// mover must spread.
pub fn candidate_actions<const N: usize>(
    game: &Game<N>,
    color: Color,
    power_cap: u32,
    rng: &mut StdRng,
) -> Vec<Action> {
    let (mut spawns, spreads) = game.possible_actions(color);
    let mut actions = spreads;
    if game.board.total_power_all() < power_cap {
        spawns.shuffle(rng);
        actions.extend(spawns);
    }
    actions
}
