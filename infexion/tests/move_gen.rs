use infexion::*;

fn occupied<const N: usize>(game: &mut Game<N>, r: usize, q: usize, color: Color, power: u8) {
    game.board[HexPos::new(r, q)] = Some(Tile { color, power });
}

#[test]
fn empty_board_has_only_spawns() {
    let game = Game::<7>::default();
    let (spawns, spreads) = game.possible_actions(Color::Red);
    assert_eq!(spawns.len(), 49);
    assert!(spreads.is_empty());
}

#[test]
fn owned_cells_spread_in_all_six_directions() {
    let mut game = Game::<7>::default();
    occupied(&mut game, 3, 3, Color::Red, 2);

    let (spawns, spreads) = game.possible_actions(Color::Red);
    assert_eq!(spawns.len(), 48);
    assert_eq!(spreads.len(), 6);
    assert!(spreads.iter().all(|action| matches!(
        action,
        Action::Spread { pos, .. } if *pos == HexPos::new(3, 3)
    )));
}

#[test]
fn no_spreads_for_opponent_cells() {
    let mut game = Game::<7>::default();
    occupied(&mut game, 3, 3, Color::Red, 2);

    let (spawns, spreads) = game.possible_actions(Color::Blue);
    assert_eq!(spawns.len(), 48);
    assert!(spreads.is_empty());
}

#[test]
fn every_enumerated_action_is_playable() {
    let mut game = Game::<7>::default();
    occupied(&mut game, 1, 1, Color::Red, 3);
    occupied(&mut game, 4, 2, Color::Blue, 2);
    game.turn = 4;

    let (spawns, spreads) = game.possible_actions(Color::Red);
    for action in spawns.into_iter().chain(spreads) {
        let mut clone = game.clone();
        clone.play(action).unwrap();
    }
}

#[test]
fn evaluation_weighs_power_over_cells() {
    let mut game = Game::<7>::default();
    occupied(&mut game, 0, 0, Color::Red, 3);
    occupied(&mut game, 6, 6, Color::Blue, 1);

    // 2 * (3 - 1) + 1 * (1 - 1)
    assert_eq!(game.evaluate(Color::Red), 4);
    assert_eq!(game.evaluate(Color::Blue), -4);
}

#[test]
fn evaluation_turns_aggressive_once_half_the_board_fills() {
    // On a 3x3 board four occupied cells reach the endgame threshold.
    let mut game = Game::<3>::default();
    occupied(&mut game, 0, 0, Color::Red, 2);
    occupied(&mut game, 0, 1, Color::Red, 1);
    occupied(&mut game, 1, 0, Color::Blue, 1);
    assert_eq!(game.evaluate(Color::Red), 2 * 2 + 1);

    occupied(&mut game, 2, 2, Color::Blue, 1);
    assert_eq!(game.evaluate(Color::Red), 3 * 1 + 0);
}
