//! Scripted shell sessions
//!
//! These tests drive the interactive shell through its front door: a
//! scripted input stream goes in, the full transcript comes out, and the
//! league state is inspected afterwards.

use sportsleague::domain::league::League;
use sportsleague::domain::player::PlayerId;
use sportsleague::shell::Shell;

/// Runs a scripted session and returns the transcript and final league
fn run_session(script: &str) -> (String, League) {
    let mut output = Vec::new();
    let league = {
        let mut shell = Shell::new(League::new(), script.as_bytes(), &mut output);
        shell.run().expect("session runs to completion");
        shell.league().clone()
    };
    (String::from_utf8(output).expect("utf8 transcript"), league)
}

#[test]
fn test_full_session_registers_assigns_and_reports() {
    let script = "1\nHornets\nCharlotte\n\
                  2\nKyle\nLowry\nGuard\n\
                  3\n1\n1\n\
                  10\n\
                  0\n";

    let (transcript, league) = run_session(script);

    assert!(transcript.contains("Team registered successfully!"));
    assert!(transcript.contains("Team{id=1, name='Hornets', city='Charlotte', players=0/15}"));
    assert!(transcript.contains("Player registered successfully!"));
    assert!(transcript.contains("Player assigned to team successfully!"));
    assert!(transcript.contains("Total Teams: 1"));
    assert!(transcript.contains("Total Players: 1"));
    assert!(transcript.contains("Assigned Players: 1"));
    assert!(transcript.contains("Unassigned Players: 0"));
    assert!(transcript.contains("Thank you for using the League Roster Manager!"));

    assert_eq!(league.total_teams(), 1);
    assert_eq!(league.assigned_players(), 1);
}

#[test]
fn test_duplicate_team_name_is_reported_and_not_registered() {
    let script = "1\nHornets\nCharlotte\n\
                  1\nHORNETS\nCharlotte\n\
                  0\n";

    let (transcript, league) = run_session(script);

    assert!(transcript.contains("Error: team name 'HORNETS' is already registered"));
    assert_eq!(league.total_teams(), 1);
}

#[test]
fn test_blank_team_name_aborts_the_screen() {
    let script = "1\n\n0\n";

    let (transcript, league) = run_session(script);

    assert!(transcript.contains("Error: Team name cannot be empty!"));
    assert_eq!(league.total_teams(), 0);
}

#[test]
fn test_invalid_menu_choice_and_number_retry() {
    let script = "42\nabc\n0\n";

    let (transcript, _league) = run_session(script);

    assert!(transcript.contains("Error: Invalid choice. Please try again."));
    // "abc" was fed to the next choice prompt and re-prompted.
    assert!(transcript.contains("Please enter a valid number: "));
}

#[test]
fn test_remove_flow_lists_assigned_players_with_team_names() {
    let script = "1\nHornets\nCharlotte\n\
                  2\nKyle\nLowry\nGuard\n\
                  3\n1\n1\n\
                  4\n1\n\
                  0\n";

    let (transcript, league) = run_session(script);

    assert!(transcript.contains("Assigned Players:"));
    assert!(transcript.contains("(Team: Hornets)"));
    assert!(transcript.contains("Player removed from team successfully!"));
    assert!(!league
        .find_player_by_id(PlayerId::new(1))
        .expect("player registered during session")
        .is_assigned());
}

#[test]
fn test_roster_view_resolves_player_records() {
    let script = "1\nHornets\nCharlotte\n\
                  2\nKyle\nLowry\nGuard\n\
                  3\n1\n1\n\
                  7\n1\n\
                  0\n";

    let (transcript, _league) = run_session(script);

    assert!(transcript.contains("--- Hornets Roster ---"));
    assert!(transcript
        .contains("Player{id=1, first_name='Kyle', last_name='Lowry', position='Guard', team=1}"));
}

#[test]
fn test_closed_input_ends_the_session_cleanly() {
    let script = "5\n";

    let (transcript, _league) = run_session(script);

    assert!(transcript.contains("No teams registered yet."));
    assert!(transcript.contains("Thank you for using the League Roster Manager!"));
}
