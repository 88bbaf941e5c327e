use infexion::*;

fn occupied<const N: usize>(game: &mut Game<N>, r: usize, q: usize, color: Color, power: u8) {
    game.board[HexPos::new(r, q)] = Some(Tile { color, power });
}

#[test]
fn opening_phase_is_never_terminal() {
    let mut game = Game::<7>::default();
    assert!(game.board.empty());
    assert_eq!(game.result(), GameResult::Ongoing);

    // After RED's first spawn BLUE has zero power, but the game goes on.
    game.play(Action::Spawn {
        pos: HexPos::new(3, 3),
    })
    .unwrap();
    assert!(!game.board.empty());
    assert_eq!(game.result(), GameResult::Ongoing);
}

#[test]
fn eliminating_the_opponent_wins() {
    let mut game = Game::<7>::default();
    occupied(&mut game, 2, 2, Color::Red, 3);
    game.turn = 6;
    assert_eq!(game.result(), GameResult::Winner(Color::Red));
}

#[test]
fn mutual_elimination_is_a_draw() {
    let mut game = Game::<7>::default();
    game.turn = 6;
    assert_eq!(game.result(), GameResult::Draw);
}

#[test]
fn turn_horizon_scores_by_power() {
    let mut game = Game::<7>::default();
    occupied(&mut game, 0, 0, Color::Red, 2);
    occupied(&mut game, 5, 5, Color::Blue, 3);

    game.turn = Game::<7>::TURN_HORIZON - 1;
    assert_eq!(game.result(), GameResult::Ongoing);

    game.turn = Game::<7>::TURN_HORIZON;
    assert_eq!(game.result(), GameResult::Winner(Color::Blue));
}

#[test]
fn turn_horizon_power_tie_is_a_draw() {
    let mut game = Game::<7>::default();
    occupied(&mut game, 0, 0, Color::Red, 2);
    occupied(&mut game, 5, 5, Color::Blue, 2);
    game.turn = Game::<7>::TURN_HORIZON;
    assert_eq!(game.result(), GameResult::Draw);
}

#[test]
fn terminal_result_is_stable() {
    let mut game = Game::<7>::default();
    occupied(&mut game, 1, 4, Color::Red, 5);
    game.turn = Game::<7>::TURN_HORIZON;

    // Re-evaluating a horizon state changes nothing.
    let first = game.result();
    assert_eq!(first, GameResult::Winner(Color::Red));
    assert_eq!(game.result(), first);
}
