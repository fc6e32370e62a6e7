//! Line-oriented front end.
//!
//! This module drives a [`Game`] from any buffered reader and writes to any writer, printing the
//! map and a prompt the way a classic terminal game does. It is used when the full-screen
//! interface is not wanted, for instance when input is piped from a file.

use std::{
    collections::VecDeque,
    io::{BufRead, Lines, Write},
};

use color_eyre::eyre::Result;
use tracing::debug;

use crate::{
    game::{Game, Step},
    types::{Command, GameState},
};

/// Prompt printed before every command is read.
pub(crate) const PROMPT: &str = "Enter move (W/A/S/D/M/Q): ";

/// Plays a session until it is won or quit, reading commands from `input`.
///
/// The map is printed before every prompt, so each turn starts from the current grid. Every
/// non-whitespace character read counts as one command, so several moves may be typed on a single
/// line. Reaching the end of the input is treated as a quit command.
///
/// # Errors
///
/// Returns any I/O error raised while reading commands or writing output.
pub fn play<R: BufRead, W: Write>(game: &mut Game, input: R, output: &mut W) -> Result<GameState> {
    let mut lines = input.lines();
    let mut pending = VecDeque::new();

    while !game.state().is_terminal() {
        print_map(game, output)?;
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(symbol) = next_symbol(&mut lines, &mut pending)? else {
            debug!("input exhausted, quitting");
            writeln!(output)?;
            report(game, Command::Quit, output)?;
            break;
        };

        match Command::parse(symbol) {
            Some(command) => report(game, command, output)?,
            None => writeln!(output, "Unrecognised command {symbol:?}.")?,
        }
    }

    Ok(game.state())
}

/// Applies one command and prints its feedback.
///
/// The winning position is printed here since no further prompt follows it. A map request needs
/// no output of its own because the next turn prints the map anyway.
fn report<W: Write>(game: &mut Game, command: Command, output: &mut W) -> Result<()> {
    let step = game.step(command);

    if step == Step::Won {
        print_map(game, output)?;
    }
    if let Some(message) = step.message() {
        writeln!(output, "{message}")?;
    }

    Ok(())
}

/// Prints the map with a leading blank line and one row per line.
fn print_map<W: Write>(game: &Game, output: &mut W) -> Result<()> {
    writeln!(output)?;
    for row in game.render() {
        writeln!(output, "{row}")?;
    }

    Ok(())
}

/// Returns the next non-whitespace character of the input, reading more lines as needed.
fn next_symbol<R: BufRead>(
    lines: &mut Lines<R>,
    pending: &mut VecDeque<char>,
) -> Result<Option<char>> {
    loop {
        if let Some(symbol) = pending.pop_front() {
            return Ok(Some(symbol));
        }

        match lines.next() {
            Some(line) => pending.extend(line?.chars().filter(|symbol| !symbol.is_whitespace())),
            None => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{file_loader::load, game::WIN_MESSAGE};

    /// Five by five maze with the start and end markers on the diagonal.
    const SMALL: &str = "#####\n#S  #\n# # #\n#  E#\n#####";

    /// Runs a console session over the small maze and returns the final state and the output.
    fn run_session(input: &str) -> (GameState, String) {
        let mut game = Game::new(load(SMALL).expect("sample maze should load"));
        let mut output = Vec::new();

        let state = play(&mut game, Cursor::new(input), &mut output)
            .expect("console session should not fail on in-memory buffers");

        (
            state,
            String::from_utf8(output).expect("console output should be UTF-8"),
        )
    }

    #[test]
    fn test_play_winning_session() {
        let (state, output) = run_session("d\nd\ns\ns\n");

        assert_eq!(state, GameState::Won, "right, right, down, down reaches the end marker");
        assert!(
            output.ends_with(&format!("\n#####\n#S  #\n# # #\n#  X#\n#####\n{WIN_MESSAGE}\n")),
            "the winning map is followed by the win message, got {output:?}"
        );
    }

    #[test]
    fn test_play_several_commands_per_line() {
        let (state, _) = run_session("D d\nsS\n");
        assert_eq!(state, GameState::Won, "each character is a separate, case-insensitive move");
    }

    #[test]
    fn test_play_initial_map_and_prompt() {
        let (_, output) = run_session("q\n");

        assert!(
            output.starts_with(&format!("\n#####\n#X  #\n# # #\n#  E#\n#####\n{PROMPT}")),
            "the map is shown before the first prompt, got {output:?}"
        );
    }

    #[test]
    fn test_play_map_before_every_prompt() {
        let (_, output) = run_session("d\nw\nq\n");

        let moved = format!("\n#####\n#SX #\n# # #\n#  E#\n#####\n{PROMPT}");
        assert_eq!(output.matches(PROMPT).count(), 3, "one prompt per command, got {output:?}");
        assert_eq!(
            output.matches(&moved).count(),
            2,
            "the moved map precedes the prompt after the move and after the blocked move, got \
             {output:?}"
        );
    }

    #[test]
    fn test_play_quit() {
        let (state, output) = run_session("q\nd\n");

        assert_eq!(state, GameState::Quit, "q ends the session");
        assert!(output.ends_with("Game quit.\n"), "input after quitting is not read");
    }

    #[test]
    fn test_play_blocked_move_is_reported() {
        let (_, output) = run_session("w\nq\n");
        assert!(output.contains("a wall is in the way"), "got {output:?}");
    }

    #[test]
    fn test_play_unknown_command_is_reported() {
        let (state, output) = run_session("x\nq\n");

        assert_eq!(state, GameState::Quit, "an unknown command does not end the session");
        assert!(output.contains("Unrecognised command 'x'."), "got {output:?}");
    }

    #[test]
    fn test_play_show_map() {
        let (state, output) = run_session("d\nm\nq\n");

        assert_eq!(state, GameState::Quit, "showing the map does not end the session");
        assert!(
            output.contains(&format!("\n#####\n#SX #\n# # #\n#  E#\n#####\n{PROMPT}\n#####\n")),
            "the map is shown again after m, got {output:?}"
        );
    }

    #[test]
    fn test_play_end_of_input_quits() {
        let (state, output) = run_session("d\n");

        assert_eq!(state, GameState::Quit, "running out of input counts as quitting");
        assert!(output.ends_with("Game quit.\n"), "got {output:?}");
    }
}
