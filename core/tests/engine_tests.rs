// SPDX-License-Identifier: MIT OR Apache-2.0

use checkers_core::engine::{legal_moves, random_move, PlayerBackend, RandomPlayer};
use checkers_core::{Board, Coord, Game, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn empty_board() -> Board {
    Board::new(8, 0).unwrap()
}

#[test]
fn opening_position_has_seven_steps_per_side() {
    let board = Board::new(8, 3).unwrap();

    for side in [Side::Light, Side::Dark] {
        let candidates = legal_moves(&board, side);
        assert!(candidates.jumps.is_empty());
        // Front-row pieces have two diagonals each, minus one blocked at
        // each edge: 4 pieces x 2 - 1 = 7.
        assert_eq!(candidates.steps.len(), 7);
    }
}

#[test]
fn every_generated_move_is_a_two_coordinate_path() {
    let board = Board::new(8, 3).unwrap();
    let candidates = legal_moves(&board, Side::Light);
    for mv in candidates.jumps.iter().chain(candidates.steps.iter()) {
        assert_eq!(mv.path.len(), 2);
    }
}

#[test]
fn jumps_empty_the_step_list() {
    let mut board = empty_board();
    board.set(Coord::new(2, 2), Some(Side::Light));
    board.set(Coord::new(6, 2), Some(Side::Light));
    board.set(Coord::new(3, 3), Some(Side::Dark));

    let candidates = legal_moves(&board, Side::Light);
    assert_eq!(candidates.jumps.len(), 1);
    assert_eq!(
        candidates.jumps[0].path,
        vec![Coord::new(2, 2), Coord::new(4, 4)]
    );
    // Plain steps all fail the forced-capture check.
    assert!(candidates.steps.is_empty());
}

#[test]
fn random_choice_always_takes_the_jump() {
    let mut board = empty_board();
    board.set(Coord::new(2, 2), Some(Side::Light));
    board.set(Coord::new(6, 2), Some(Side::Light));
    board.set(Coord::new(3, 3), Some(Side::Dark));

    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mv = random_move(&board, Side::Light, &mut rng).unwrap();
        assert_eq!(mv.path, vec![Coord::new(2, 2), Coord::new(4, 4)]);
    }
}

#[test]
fn same_seed_same_move() {
    let board = Board::new(8, 3).unwrap();

    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    assert_eq!(
        random_move(&board, Side::Light, &mut a),
        random_move(&board, Side::Light, &mut b)
    );
}

#[test]
fn generator_returns_none_exactly_when_the_game_is_over() {
    // Dark stuck on its back rank: no move, game over on construction.
    let mut board = empty_board();
    board.set(Coord::new(0, 0), Some(Side::Dark));
    board.set(Coord::new(4, 4), Some(Side::Light));
    let game = Game::from_position(board, Side::Dark);

    assert!(game.is_over());
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(game.random_legal_move(&mut rng), None);

    let live = Game::new(8, 3).unwrap();
    assert!(!live.is_over());
    assert!(live.random_legal_move(&mut rng).is_some());
}

#[test]
fn random_player_plays_a_full_game_to_completion() {
    let mut game = Game::new(8, 3).unwrap();
    let mut player = RandomPlayer::seeded(1234);

    // A no-promotion game cannot cycle: every plain step advances a piece
    // and every jump removes one, so this terminates.
    let mut plies = 0usize;
    while let Some(mv) = player.next_move(&game) {
        game.play_move(&mv).expect("generated move must be legal");
        plies += 1;
        assert!(plies < 10_000, "game failed to terminate");
    }

    assert!(game.is_over());
    if let Some(winner) = game.winner() {
        assert_eq!(game.board().count_of(winner.opposite()), 0);
    }
}

#[test]
fn seeded_players_replay_the_same_game() {
    let mut first = Vec::new();
    let mut second = Vec::new();

    for log in [&mut first, &mut second] {
        let mut game = Game::new(8, 3).unwrap();
        let mut player = RandomPlayer::seeded(99);
        while let Some(mv) = player.next_move(&game) {
            log.push(mv.clone());
            game.play_move(&mv).unwrap();
        }
    }

    assert_eq!(first, second);
}
