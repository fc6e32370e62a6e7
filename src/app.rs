//! Core application state and loop for the full-screen interface.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{events, game::Game, types::GameState, ui};

/// Application state container for the full-screen interface.
///
/// This structure holds the state Ratatui renders from and Crossterm events write to: the game
/// session itself plus the bits of presentation state that outlive a single frame.
pub struct App {
    /// Application exit flag.
    ///
    /// This field is set once the player quits, or once they dismiss the victory popup. It starts
    /// off `false`.
    pub(crate) exit: bool,
    /// Game session being played.
    pub(crate) game: Game,
    /// Feedback for the most recent command.
    ///
    /// This field holds the one-line message shown in the status bar, if the last command produced
    /// one. It is replaced on every command.
    pub(crate) message: Option<String>,
    /// Full repaint request.
    ///
    /// This field is raised by the redisplay command and makes the loop clear the terminal before
    /// the next frame, discarding anything that garbled the screen.
    pub(crate) redraw: bool,
}

impl App {
    /// Creates the application state for a fresh session.
    #[must_use]
    pub const fn new(game: Game) -> Self {
        Self {
            exit: false,
            game,
            message: None,
            redraw: false,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws a frame and handles user input until the exit condition is `true`,
    /// after which it returns the state the game finished in.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<GameState> {
        while !self.exit {
            if self.redraw {
                terminal.clear()?;
                self.redraw = false;
            }

            let _ = terminal.try_draw(|frame| {
                ui::draw(&self, frame).map_err(std::io::Error::other)
            })?;
            events::handle_events(&mut self)?;
        }

        Ok(self.game.state())
    }
}
