//! Whole games through the console shell with scripted stdin.

use std::io::Cursor;
use tictactoe_cli::{ConsoleShell, Settings, play};
use tictactoe_core::{GameError, Mark, Outcome, ShellError};

fn run(settings: &Settings, input: &str) -> (Result<Outcome, GameError>, String) {
    let mut shell = ConsoleShell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false);
    let result = play(settings, &mut shell);
    (result, String::from_utf8(shell.into_output()).unwrap())
}

fn settings(toml: &str) -> Settings {
    toml::from_str(toml).unwrap()
}

#[test]
fn two_players_from_menu() {
    let (result, text) = run(&Settings::default(), "1\n1\n4\n2\n5\n3\n");
    assert_eq!(result.unwrap(), Outcome::Win { mark: Mark::X, was_cpu: false });
    assert!(text.starts_with("SELECT OPPONENT\n1. 2nd Player\n"));
    assert!(text.contains("Enter Move for O (1-9): "));
    assert!(text.trim_end().ends_with("Congrats, X has won."));
    assert!(text.contains("  X | X | X\n"));
}

#[test]
fn occupied_square_is_retried() {
    let (result, text) = run(&settings("opponent = \"human\""), "5\n5\n1\n2\n9\n3\n4\n8\n6\n7\n");
    assert!(result.is_ok());
    assert_eq!(
        text.matches("That square is already occupied. Please enter valid input.")
            .count(),
        1
    );
}

#[test]
fn hardcore_wins_against_careless_play() {
    // O answers 1 with 5, blocks 3, then completes 3-5-7.
    let (result, text) = run(&settings("opponent = \"hardcore\""), "1\n2\n4\n6\n8\n");
    assert_eq!(result.unwrap(), Outcome::Win { mark: Mark::O, was_cpu: true });
    assert!(text.contains("O has won. Better luck next time."));
    assert!(!text.contains("SELECT OPPONENT"));
}

#[test]
fn draw_is_announced() {
    // X O X / X O X / O X O
    let (result, text) = run(&settings("opponent = \"human\""), "1\n2\n3\n5\n4\n7\n6\n9\n8\n");
    assert_eq!(result.unwrap(), Outcome::Draw);
    assert!(text.contains("IT'S A DRAW!!"));
}

#[test]
fn input_ending_mid_game_is_an_error() {
    let (result, text) = run(&settings("opponent = \"easy\"\nseed = 4"), "5\n");
    assert_eq!(result, Err(GameError::Shell(ShellError::InputClosed)));
    assert!(!text.contains("has won"));
}

#[test]
fn seeded_easy_games_repeat() {
    let config = settings("opponent = \"easy\"\nseed = 11");
    let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(3);
    let first = run(&config, &script);
    let second = run(&config, &script);
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
}
