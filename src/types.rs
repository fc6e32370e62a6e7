//! Type definitions shared by the maze loader, the movement engine and the game session.

use std::fmt;

/// Coordinates of a single cell in the maze.
///
/// The `x` component is the column index and the `y` component is the row index, both zero-based
/// with `(0, 0)` being the top-left cell of the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column index of the cell.
    pub x: usize,
    /// Row index of the cell.
    pub y: usize,
}

impl Position {
    /// Builds a position from a column and a row index.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring position one cell away in the given direction.
    ///
    /// This function yields [`None`] when the step would take either coordinate below zero. Upper
    /// bounds depend on the maze and are checked by the movement engine instead.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let Self { x, y } = self;
        match direction {
            Direction::Up => y.checked_sub(1).map(|y| Self { x, y }),
            Direction::Down => y.checked_add(1).map(|y| Self { x, y }),
            Direction::Left => x.checked_sub(1).map(|x| Self { x, y }),
            Direction::Right => x.checked_add(1).map(|x| Self { x, y }),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of a single movement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Away from row zero.
    Down,
    /// Towards column zero.
    Left,
    /// Away from column zero.
    Right,
}

/// Contents of one maze cell.
///
/// Every variant maps one-to-one onto a character of the maze file format, see
/// [`Cell::from_symbol`] and [`Cell::symbol`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Impassable cell, written as `#`.
    Wall,
    /// Walkable cell, written as a space.
    Open,
    /// Walkable cell where the player begins, written as `S`.
    Start,
    /// Walkable cell the player must reach, written as `E`.
    End,
}

impl Cell {
    /// Maps a maze file character onto its cell, if the character belongs to the alphabet.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(Self::Wall),
            ' ' => Some(Self::Open),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }

    /// Returns the character this cell is written as in a maze file.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => ' ',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Whether the player may stand on this cell.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Result of a single movement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The player now stands on the candidate cell.
    Moved,
    /// The candidate cell is a wall; the player did not move.
    Blocked,
    /// The candidate cell lies outside the grid; the player did not move.
    OutOfBounds,
}

/// Interactive command decoded from a single input character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Attempt to move one cell in the given direction.
    Move(Direction),
    /// Ask for the map to be displayed again.
    ShowMap,
    /// Leave the game.
    Quit,
}

impl Command {
    /// Decodes a command character, ignoring case.
    ///
    /// `W`, `A`, `S` and `D` move up, left, down and right respectively, `M` redisplays the map and
    /// `Q` quits. Any other character yields [`None`].
    #[must_use]
    pub const fn parse(input: char) -> Option<Self> {
        match input.to_ascii_lowercase() {
            'w' => Some(Self::Move(Direction::Up)),
            'a' => Some(Self::Move(Direction::Left)),
            's' => Some(Self::Move(Direction::Down)),
            'd' => Some(Self::Move(Direction::Right)),
            'm' => Some(Self::ShowMap),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Whole-game state.
///
/// [`GameState::Won`] and [`GameState::Quit`] are terminal: once reached, no command changes the
/// state again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// The player is still walking the maze.
    Playing,
    /// The player reached the end cell.
    Won,
    /// The player asked to leave before reaching the end cell.
    Quit,
}

impl GameState {
    /// Whether no further command can change this state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}
