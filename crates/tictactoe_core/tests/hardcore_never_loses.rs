//! Exhaustive check that the minimax opponent cannot be beaten.

use tictactoe_core::{Board, Hardcore, Mark, Position, Strategy, has_won, is_draw};

#[derive(Debug, Default)]
struct Tally {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

/// Tries every X move from `board`, answering each with Hardcore as O.
fn explore(board: &Board, tally: &mut Tally) {
    for pos in board.empty_positions() {
        let mut next = board.clone();
        next.apply(pos, Mark::X).expect("empty position");
        if has_won(&next, Mark::X) {
            tally.x_wins += 1;
            continue;
        }
        if is_draw(&next) {
            tally.draws += 1;
            continue;
        }

        Hardcore::new().play(&mut next, Mark::O).expect("board has room");
        if has_won(&next, Mark::O) {
            tally.o_wins += 1;
            continue;
        }
        if is_draw(&next) {
            tally.draws += 1;
            continue;
        }

        explore(&next, tally);
    }
}

#[test]
fn test_hardcore_never_loses_as_second_mover() {
    let mut tally = Tally::default();
    explore(&Board::new(), &mut tally);

    assert_eq!(tally.x_wins, 0, "{tally:?}");
    assert!(tally.draws > 0, "{tally:?}");
    assert!(tally.o_wins > 0, "{tally:?}");
}

#[test]
fn test_hardcore_answers_every_opening() {
    for opening in Position::ALL {
        let mut board = Board::new();
        board.apply(opening, Mark::X).unwrap();
        let reply = Hardcore::new().play(&mut board, Mark::O).unwrap();
        if opening == Position::CENTER {
            assert!(reply.is_corner(), "center answered with {reply}");
        } else if opening.is_corner() {
            assert_eq!(reply, Position::CENTER, "{opening} answered with {reply}");
        }
    }
}
