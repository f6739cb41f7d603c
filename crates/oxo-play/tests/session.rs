//! Scripted sessions driven through `Session::run`.

use oxo_play::{Session, SessionConfig, Tally};
use oxo_core::Player;

fn run_script(script: &str, config: SessionConfig) -> (Tally, String) {
    let mut out = Vec::new();
    let tally = Session::with_config(script.as_bytes(), &mut out, config)
        .run()
        .expect("in-memory session should not fail");
    (tally, String::from_utf8(out).unwrap())
}

#[test]
fn greedy_human_never_beats_the_engine() {
    // Tries every cell in order; occupied cells are reported and skipped.
    let script = "0\n1\n2\n3\n4\n5\n6\n7\n8\n";
    let (tally, transcript) = run_script(script, SessionConfig::default());
    assert_eq!(tally.rounds(), 1);
    assert_eq!(tally.x_wins, 0);
    assert!(
        transcript.contains("Tough one. AI won.") || transcript.contains("Result: draw."),
        "{transcript}"
    );
}

#[test]
fn moves_after_game_over_are_rejected() {
    let script = "0\n1\n2\n3\n4\n5\n6\n7\n8\n0\n";
    let (tally, transcript) = run_script(script, SessionConfig::default());
    assert_eq!(tally.rounds(), 1);
    assert!(transcript.contains("error: the game is over"));
}

#[test]
fn engine_opens_in_center_when_human_plays_second() {
    let (_, transcript) = run_script("first off\n", SessionConfig::default());
    assert!(transcript.contains("new game: you play O"));
    assert!(transcript.contains("engine plays 4"));
}

#[test]
fn configured_second_player_starts_immediately() {
    let (_, transcript) = run_script("", SessionConfig { human: Player::O });
    assert!(transcript.contains("engine plays 4"));
    assert!(transcript.contains("Your turn: O"));
}

#[test]
fn quit_ignores_remaining_input() {
    let (tally, transcript) = run_script("quit\n0\n", SessionConfig::default());
    assert_eq!(tally, Tally::default());
    assert!(!transcript.contains("engine plays"));
}

#[test]
fn bad_commands_are_reported_and_the_session_continues() {
    let (_, transcript) = run_script("jump\nmove\n9\nscore\n", SessionConfig::default());
    assert!(transcript.contains("error: unknown command: jump"));
    assert!(transcript.contains("error: 'move' needs an argument"));
    assert!(transcript.contains("error: move 9 is out of range"));
    assert!(transcript.contains("X: 0  O: 0  Draws: 0"));
}

#[test]
fn two_rounds_are_tallied_separately() {
    let round = "0\n1\n2\n3\n4\n5\n6\n7\n8\n";
    let script = format!("{round}new\n{round}");
    let (tally, _) = run_script(&script, SessionConfig::default());
    assert_eq!(tally.rounds(), 2);
    assert_eq!(tally.x_wins, 0);
}
