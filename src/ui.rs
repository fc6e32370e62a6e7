//! User interface rendering for the full-screen interface.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::{
    game::WIN_MESSAGE,
    maze::PLAYER_SYMBOL,
    types::{Cell, GameState, Position},
    App,
};

/// Status bar text shown before the player has done anything worth reporting.
const DEFAULT_STATUS: &str = "Find your way from S to E.";

/// Updates the interface from the application state.
///
/// This function renders the maze with the player on top, the status bar with the move counter and
/// the key tooltip, plus the victory popup once the game is won.
///
/// # Errors
///
/// This function may return errors from layout lookups or from maze dimensions that do not fit in
/// terminal coordinates.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let [maze_area, status_area, tooltip_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    maze(app, frame, maze_area)?;

    let status = app.message.as_deref().unwrap_or(DEFAULT_STATUS);
    frame.render_widget(
        Line::styled(
            format!("{status}  moves: {}", app.game.moves()),
            Style::default().fg(Color::Green),
        )
        .centered(),
        status_area,
    );

    let tooltip = Block::default()
        .title("(w/a/s/d) move / (m) redraw / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    frame.render_widget(tooltip, tooltip_area);

    if app.game.state() == GameState::Won {
        victory(frame)?;
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Renders the bordered maze, centred in `area`.
///
/// Mazes larger than the terminal are clipped at the right and bottom edges.
pub(crate) fn maze(app: &App, frame: &mut Frame, area: Rect) -> Result<()> {
    let grid = app.game.maze();
    let width = u16::try_from(grid.width())?.saturating_add(2);
    let height = u16::try_from(grid.height())?.saturating_add(2);

    let space = centered(area, width, height)?;

    let block = Block::bordered()
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let player = app.game.player();
    let lines: Vec<Line> = grid
        .rows()
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, cell)| cell_span(*cell, player == Position::new(x, y)))
                .collect::<Line>()
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), space);

    Ok(())
}

/// Styles a single maze cell, drawing the player in its place when it stands there.
fn cell_span(cell: Cell, is_player: bool) -> Span<'static> {
    if is_player {
        return Span::styled(
            PLAYER_SYMBOL.to_string(),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        );
    }

    let style = match cell {
        Cell::Wall => Style::default().fg(Color::Green),
        Cell::Open => Style::default(),
        Cell::Start | Cell::End => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    };
    Span::styled(cell.symbol().to_string(), style)
}

/// Renders the victory popup over the middle of the screen.
pub(crate) fn victory(frame: &mut Frame) -> Result<()> {
    let width = u16::try_from(WIN_MESSAGE.len())?.saturating_add(4);
    let area = centered(frame.area(), width, 3)?;

    let block = Block::bordered()
        .title_bottom("(any key) exit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(Color::Green))
        .border_type(BorderType::Rounded);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(WIN_MESSAGE).centered().block(block),
        area,
    );

    Ok(())
}

/// Returns a rectangle of at most the given size centred inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Result<Rect> {
    let row = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area)
        .first()
        .copied()
        .ok_or_eyre("failed to get centred row from layout")?;

    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(row)
        .first()
        .copied()
        .ok_or_eyre("failed to get centred column from layout")
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        file_loader::load,
        game::Game,
        types::{Command, Direction},
    };

    /// Creates an application over the small sample maze.
    fn create_test_app() -> App {
        let maze = load("#####\n#S  #\n# # #\n#  E#\n#####").expect("sample maze should load");
        App::new(Game::new(maze))
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Concatenates the symbols of every buffer cell, row after row.
    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_draw_in_game() {
        let app = create_test_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });
        assert!(result.is_ok(), "drawing the in-game screen should succeed");

        let text = screen_text(&terminal);
        assert!(text.contains("#X  #"), "the player covers the start marker");
        assert!(text.contains("#  E#"), "the end marker is visible");
        assert!(text.contains(DEFAULT_STATUS), "the status bar starts with the hint");
        assert!(text.contains("moves: 0"), "the move counter starts at zero");
    }

    #[test]
    fn test_draw_status_message() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.message = Some("You can't move outside the maze.".to_owned());

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });
        assert!(result.is_ok(), "drawing with a status message should succeed");

        assert!(
            screen_text(&terminal).contains("You can't move outside the maze."),
            "the status bar shows the last message"
        );
    }

    #[test]
    fn test_draw_victory_popup() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        for direction in [Direction::Right, Direction::Right, Direction::Down, Direction::Down] {
            let _ = app.game.step(Command::Move(direction));
        }

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });
        assert!(result.is_ok(), "drawing the victory popup should succeed");

        assert!(
            screen_text(&terminal).contains(WIN_MESSAGE),
            "the victory popup is shown once the game is won"
        );
    }

    #[test]
    fn test_draw_in_small_terminal() {
        let app = create_test_app();
        let mut terminal =
            Terminal::new(TestBackend::new(4, 3)).expect("failed to create test terminal");

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in a tiny terminal");
        });

        assert!(result.is_ok(), "a terminal smaller than the maze should clip, not fail");
    }

    #[test]
    fn test_centered() {
        let area = Rect::new(0, 0, 20, 10);

        let rect = centered(area, 6, 4).expect("centring should succeed");

        assert_eq!(rect, Rect::new(7, 3, 6, 4), "the popup is centred in the area");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }
}
