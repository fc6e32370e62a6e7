//! Command line surface and top-level session driver.

use std::{
    io::{self, Write as _},
    path::PathBuf,
};

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{debug, error, info, Level};

use crate::{
    console,
    error::ExitStatus,
    file_loader,
    game::{Game, QUIT_MESSAGE, WIN_MESSAGE},
    logging,
    types::GameState,
    App,
};

/// Walk a maze from its start marker `S` to its end marker `E`.
///
/// Move with W/A/S/D, redraw the map with M and quit with Q.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Path to the maze file to play.
    pub maze: PathBuf,
    /// Play in the terminal's normal line mode instead of the full-screen interface.
    #[arg(long)]
    pub plain: bool,
    /// Append diagnostic logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
    /// Most verbose level written to the log file.
    #[arg(long, value_name = "LEVEL", default_value_t = Level::DEBUG)]
    pub log_level: Level,
}

impl Cli {
    /// Parses the process arguments.
    ///
    /// Unlike [`Parser::parse`], this does not terminate the process on failure. Usage errors are
    /// printed and mapped onto [`ExitStatus::ArgumentError`], while `--help` and `--version` print
    /// their output and map onto [`ExitStatus::Success`].
    ///
    /// # Errors
    ///
    /// Returns the status the process should exit with when no session should be started.
    pub fn from_args() -> Result<Self, ExitStatus> {
        Self::try_parse().map_err(|err| {
            if let Err(print_err) = err.print() {
                debug!(error = %print_err, "failed to print argument error");
            }
            exit_status_for(&err)
        })
    }
}

/// Maps a parse failure onto the process exit status.
///
/// Help and version requests are reported by clap as errors that print to standard output; they
/// exit successfully.
fn exit_status_for(err: &clap::Error) -> ExitStatus {
    if err.use_stderr() {
        ExitStatus::ArgumentError
    } else {
        ExitStatus::Success
    }
}

/// Loads the maze named on the command line and plays it to completion.
///
/// The maze is validated before the terminal is touched, so a bad file is reported on standard
/// error with the matching exit status and no session is started.
///
/// # Errors
///
/// Returns an error if logging cannot be set up or if terminal I/O fails during the session.
pub fn run(cli: &Cli) -> Result<ExitStatus> {
    if let Some(path) = &cli.log_file {
        logging::init(path, cli.log_level)?;
    }
    info!(maze = %cli.maze.display(), plain = cli.plain, "starting");

    let maze = match file_loader::read_maze_file(&cli.maze) {
        Ok(maze) => maze,
        Err(err) => {
            error!(error = %err, "failed to load maze");
            eprintln!("{err}");
            return Ok(err.exit_status());
        }
    };

    let mut game = Game::new(maze);
    if cli.plain {
        let _ = console::play(&mut game, io::stdin().lock(), &mut io::stdout().lock())?;
        return Ok(ExitStatus::Success);
    }

    let mut terminal = ratatui::try_init()?;
    let result = App::new(game).run(&mut terminal);
    ratatui::restore();

    let mut stdout = io::stdout().lock();
    match result? {
        GameState::Won => writeln!(stdout, "{WIN_MESSAGE}")?,
        GameState::Quit => writeln!(stdout, "{QUIT_MESSAGE}")?,
        GameState::Playing => {}
    }

    Ok(ExitStatus::Success)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["labyrintuine", "maze.txt"]).expect("path alone is valid");

        assert_eq!(cli.maze, PathBuf::from("maze.txt"), "the positional argument is the maze path");
        assert!(!cli.plain, "the full-screen interface is the default");
        assert_eq!(cli.log_file, None, "logging is off unless a file is given");
        assert_eq!(cli.log_level, Level::DEBUG, "the log level defaults to debug");
    }

    #[test]
    fn test_cli_all_options() {
        let cli = Cli::try_parse_from([
            "labyrintuine",
            "--plain",
            "--log-file",
            "game.log",
            "--log-level",
            "trace",
            "maze.txt",
        ])
        .expect("all options should parse");

        assert!(cli.plain, "--plain selects the console front end");
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")), "--log-file takes a path");
        assert_eq!(cli.log_level, Level::TRACE, "--log-level parses tracing level names");
    }

    #[test]
    fn test_cli_missing_maze_is_usage_error() {
        let err = Cli::try_parse_from(["labyrintuine"]).expect_err("the maze path is required");
        assert!(err.use_stderr(), "usage errors go to standard error");
        assert_eq!(exit_status_for(&err), ExitStatus::ArgumentError, "usage errors exit with 1");
    }

    #[test]
    fn test_cli_extra_argument_is_usage_error() {
        let err = Cli::try_parse_from(["labyrintuine", "a.txt", "b.txt"])
            .expect_err("only one maze path is accepted");
        assert!(err.use_stderr(), "usage errors go to standard error");
    }

    #[test]
    fn test_cli_help_is_not_an_error() {
        let err = Cli::try_parse_from(["labyrintuine", "--help"]).expect_err("help short-circuits");
        assert!(!err.use_stderr(), "help goes to standard output");
        assert_eq!(exit_status_for(&err), ExitStatus::Success, "help exits with 0");
    }

    #[test]
    fn test_cli_version_is_not_an_error() {
        let err =
            Cli::try_parse_from(["labyrintuine", "--version"]).expect_err("version short-circuits");
        assert_eq!(exit_status_for(&err), ExitStatus::Success, "version exits with 0");
    }

    #[test]
    fn test_run_missing_file() {
        let cli = Cli::try_parse_from(["labyrintuine", "--plain", "no/such/maze.txt"])
            .expect("arguments should parse");

        let status = run(&cli).expect("a missing file is reported through the status");
        assert_eq!(status, ExitStatus::FileError, "a missing maze file exits with 2");
    }
}
