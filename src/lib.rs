//! Terminal maze game.
//!
//! A maze is read from a text file made of walls (`#`), open cells (spaces), one start marker
//! (`S`) and one end marker (`E`). The player begins on the start marker, moves one cell at a time
//! with W/A/S/D and wins upon reaching the end marker.
//!
//! The crate splits into a validated grid ([`Maze`], built by [`load`]), pure movement rules
//! ([`apply_move`] and [`has_won`]), a session state machine ([`Game`]) and two front ends: a
//! full-screen interface ([`App`]) and a line-oriented one ([`play`]).

mod app;
mod cli;
mod console;
mod error;
mod events;
mod file_loader;
mod game;
mod logging;
mod maze;
mod movement;
mod types;
mod ui;

pub use app::App;
pub use cli::{run, Cli};
pub use console::play;
pub use error::{ExitStatus, LoadError, MazeError};
pub use file_loader::{load, read_maze_file};
pub use game::{Game, Step, QUIT_MESSAGE, WIN_MESSAGE};
pub use maze::{Maze, MAX_DIM, MIN_DIM, PLAYER_SYMBOL};
pub use movement::{apply_move, has_won};
pub use types::{Cell, Command, Direction, GameState, Outcome, Position};
