//! Game session: the maze, the player and the whole-game state machine.

use tracing::info;

use crate::{
    maze::Maze,
    movement,
    types::{Command, GameState, Outcome, Position},
};

/// Message shown when the player reaches the end marker.
pub const WIN_MESSAGE: &str = "Congratulations! You have won the game.";

/// Message shown when the player leaves the game.
pub const QUIT_MESSAGE: &str = "Game quit.";

/// Feedback produced by a single command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A movement attempt that did not finish the game.
    Move(Outcome),
    /// An accepted movement that landed on the end marker.
    Won,
    /// The map should be displayed again.
    ShowMap,
    /// The player left the game.
    Quit,
    /// The game had already ended; the command was not applied.
    Finished,
}

impl Step {
    /// One-line message describing this step to the player, if any.
    ///
    /// Accepted moves and map requests speak for themselves through the redrawn grid and carry no
    /// message.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Move(Outcome::Moved) | Self::ShowMap => None,
            Self::Move(Outcome::Blocked) => Some("You can't move there, a wall is in the way."),
            Self::Move(Outcome::OutOfBounds) => Some("You can't move outside the maze."),
            Self::Won => Some(WIN_MESSAGE),
            Self::Quit => Some(QUIT_MESSAGE),
            Self::Finished => Some("The game is over."),
        }
    }
}

/// Single-player session over one maze.
///
/// The session owns the read-only maze and the player's position. The position is only ever
/// changed by accepted moves, and the state only ever leaves [`GameState::Playing`] once.
#[derive(Clone, Debug)]
pub struct Game {
    /// The maze being walked.
    maze: Maze,
    /// Current player position.
    player: Position,
    /// Whole-game state.
    state: GameState,
    /// Number of accepted moves so far.
    moves: usize,
}

impl Game {
    /// Starts a session with the player on the maze's start marker.
    #[must_use]
    pub const fn new(maze: Maze) -> Self {
        let player = maze.start();
        Self {
            maze,
            player,
            state: GameState::Playing,
            moves: 0,
        }
    }

    /// The maze being walked.
    #[must_use]
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Current player position.
    #[must_use]
    pub const fn player(&self) -> Position {
        self.player
    }

    /// Current whole-game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Number of accepted moves so far.
    #[must_use]
    pub const fn moves(&self) -> usize {
        self.moves
    }

    /// Applies one command and reports what happened.
    ///
    /// Commands received after the game reached a terminal state are not applied and yield
    /// [`Step::Finished`].
    pub fn step(&mut self, command: Command) -> Step {
        if self.state.is_terminal() {
            return Step::Finished;
        }

        match command {
            Command::Move(direction) => {
                let (player, outcome) = movement::apply_move(&self.maze, self.player, direction);
                self.player = player;

                if outcome != Outcome::Moved {
                    return Step::Move(outcome);
                }

                self.moves += 1;
                if movement::has_won(&self.maze, self.player) {
                    info!(moves = self.moves, "player reached the end marker");
                    self.state = GameState::Won;
                    Step::Won
                } else {
                    Step::Move(outcome)
                }
            }
            Command::ShowMap => Step::ShowMap,
            Command::Quit => {
                info!(moves = self.moves, position = %self.player, "player quit");
                self.state = GameState::Quit;
                Step::Quit
            }
        }
    }

    /// Renders the maze with the player drawn on top, see [`Maze::render`].
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.maze.render(self.player)
    }
}
