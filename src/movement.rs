//! Movement rules and the win condition.

use tracing::trace;

use crate::{
    maze::Maze,
    types::{Direction, Outcome, Position},
};

/// Attempts to move one cell from `position` in `direction`.
///
/// Returns the position the player ends up on together with the outcome of the attempt. Rejected
/// attempts ([`Outcome::OutOfBounds`] and [`Outcome::Blocked`]) hand back the position unchanged,
/// so repeating a rejected move is harmless and yields the same outcome again.
#[must_use]
pub fn apply_move(maze: &Maze, position: Position, direction: Direction) -> (Position, Outcome) {
    let Some(candidate) = position.step(direction).filter(|next| maze.contains(*next)) else {
        trace!(%position, ?direction, "move leaves the grid");
        return (position, Outcome::OutOfBounds);
    };

    match maze.cell(candidate) {
        Some(cell) if cell.is_walkable() => {
            trace!(from = %position, to = %candidate, "moved");
            (candidate, Outcome::Moved)
        }
        _ => {
            trace!(%position, ?direction, "move blocked by a wall");
            (position, Outcome::Blocked)
        }
    }
}

/// Whether the player standing on `position` has reached the end marker.
#[must_use]
pub fn has_won(maze: &Maze, position: Position) -> bool {
    position == maze.end()
}
