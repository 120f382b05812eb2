//! Property checks over self-played games.
//!
//! Each game walks from the start position picking pseudo-random legal moves
//! (a fixed LCG, so runs are reproducible). At every position every
//! from/to pair on the board is tried.

use dama::rules::{is_legal_move_for, Rules};
use dama::{count_pieces, Game, MoveError, Side, Square};

fn all_squares() -> impl Iterator<Item = Square> {
    (0..8).flat_map(|r| (0..8).map(move |c| Square::new(r, c)))
}

fn next_rand(seed: &mut u64) -> u64 {
    *seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *seed >> 33
}

fn legal_moves(game: &Game) -> Vec<(Square, Square)> {
    let mut out = Vec::new();
    for from in all_squares() {
        for to in all_squares() {
            if is_legal_move_for(game.board(), game.turn(), game.rules(), from, to) {
                out.push((from, to));
            }
        }
    }
    out
}

fn occupied_by(game: &Game, side: Side) -> usize {
    all_squares()
        .filter(|&sq| game.board().piece_on(sq).is_some_and(|p| p.side == side))
        .count()
}

fn check_rejections_do_not_mutate(game: &Game) {
    let mut probe = game.clone();
    for from in all_squares() {
        for to in all_squares() {
            if is_legal_move_for(game.board(), game.turn(), game.rules(), from, to) {
                continue;
            }
            let result: Result<_, MoveError> = probe.attempt_move(from, to);
            assert!(result.is_err(), "{} -> {} accepted but not legal", from, to);
            assert_eq!(&probe, game, "rejected {} -> {} mutated the game", from, to);
        }
    }
}

fn play_random_game(seed: u64, rules: Rules, max_plies: usize) {
    let mut seed = seed;
    let mut game = Game::new().with_rules(rules);

    for _ in 0..max_plies {
        check_rejections_do_not_mutate(&game);

        let moves = legal_moves(&game);
        if moves.is_empty() {
            break;
        }
        let (from, to) = moves[(next_rand(&mut seed) as usize) % moves.len()];

        let before = game.clone();
        let mover = before.board().piece_on(from).expect("legal move has a piece");
        let chain_before = before.turn().capture_chain_active();
        let count_before = count_pieces(before.board());

        let outcome = game.attempt_move(from, to).expect("legal move was rejected");
        let count_after = count_pieces(game.board());

        // counts are a pure view of the board
        assert_eq!(count_after.light, occupied_by(&game, Side::Light));
        assert_eq!(count_after.dark, occupied_by(&game, Side::Dark));

        // a capture removes exactly one opposing piece
        let own_before = count_before.for_side(mover.side);
        let opp_before = count_before.for_side(mover.side.opposite());
        assert_eq!(count_after.for_side(mover.side), own_before);
        match outcome.captured {
            Some(sq) => {
                assert!(before.board().piece_on(sq).is_some_and(|p| p.side != mover.side));
                assert_eq!(count_after.for_side(mover.side.opposite()), opp_before - 1);
            }
            None => assert_eq!(count_after.for_side(mover.side.opposite()), opp_before),
        }

        // men go backwards only inside a chain
        if !mover.king && !chain_before && !rules.backward_captures {
            assert_eq!((to.row - from.row).signum(), mover.side.forward());
        }

        // promotion on arrival, kings stay kings
        let landed = game.board().piece_on(to).expect("piece on destination");
        assert_eq!(outcome.promoted, !mover.king && to.row == mover.side.far_row());
        if mover.king || to.row == mover.side.far_row() {
            assert!(landed.king);
        }

        // the side flips exactly when the turn ends
        if outcome.chain_continues {
            assert_eq!(game.turn().active_side, mover.side);
            assert_eq!(game.turn().capture_chain, Some(to));
        } else {
            assert_eq!(game.turn().active_side, mover.side.opposite());
            assert!(!game.turn().capture_chain_active());
        }
        assert_eq!(outcome.next_active_side, game.turn().active_side);
    }
}

#[test]
fn random_games_hold_invariants() {
    for seed in [1u64, 7, 42, 1234] {
        play_random_game(seed, Rules::default(), 40);
    }
}

#[test]
fn random_games_with_backward_captures() {
    let rules = Rules {
        backward_captures: true,
    };
    for seed in [3u64, 99] {
        play_random_game(seed, rules, 40);
    }
}
