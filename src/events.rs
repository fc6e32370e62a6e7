//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{
    game::Step,
    types::{Command, GameState},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events with a timeout so the loop keeps redrawing, for
/// instance after the terminal is resized. Only key presses are acted upon; releases and repeats
/// reported by some platforms are ignored.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    Ok(())
}

/// Applies a single key press to the application state.
///
/// While the game is running, characters are decoded into commands and `Esc` acts as the quit
/// command. Once the game is won, any key dismisses the victory popup and exits.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    if app.game.state() == GameState::Won {
        app.exit = true;
        return;
    }

    let command = match code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Char(symbol) => {
            let Some(command) = Command::parse(symbol) else {
                app.message = Some(format!("Unrecognised command {symbol:?}."));
                return;
            };
            command
        }
        _ => return,
    };

    let step = app.game.step(command);
    app.message = step.message().map(str::to_owned);
    match step {
        Step::ShowMap => app.redraw = true,
        Step::Quit | Step::Finished => app.exit = true,
        Step::Move(_) | Step::Won => {}
    }
}
