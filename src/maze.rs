//! Maze grid data module.
//!
//! This module contains the validated [`Maze`] grid along with the lookups and the text rendering
//! used by both front ends. Construction happens exclusively through
//! [`load`](crate::load), so every `Maze` value in the program satisfies the format
//! rules.

use crate::types::{Cell, Position};

/// Smallest permitted width and height of a maze.
pub const MIN_DIM: usize = 5;

/// Largest permitted width and height of a maze.
pub const MAX_DIM: usize = 100;

/// Character drawn in place of the cell the player stands on.
pub const PLAYER_SYMBOL: char = 'X';

/// Validated rectangular maze.
///
/// The cells are kept in a single row-major buffer of `width * height` entries. The grid never
/// changes once built; only the player position, which lives outside this structure, moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Row-major cell storage.
    cells: Vec<Cell>,
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Location of the unique start marker.
    start: Position,
    /// Location of the unique end marker.
    end: Position,
}

impl Maze {
    /// Assembles a maze from parts the loader has already validated.
    pub(crate) const fn from_validated(
        cells: Vec<Cell>,
        width: usize,
        height: usize,
        start: Position,
        end: Position,
    ) -> Self {
        Self {
            cells,
            width,
            height,
            start,
            end,
        }
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Position of the start marker.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Position of the end marker.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Whether the position lies inside the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Returns the cell at the given position, or [`None`] when it lies outside the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Cell> {
        if !self.contains(position) {
            return None;
        }

        self.cells
            .get(position.y * self.width + position.x)
            .copied()
    }

    /// Iterates over the rows of the grid as cell slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Renders the grid as text with the player drawn on top.
    ///
    /// The result holds `height` strings of `width` characters each. Every character matches the
    /// maze file except the player's cell, which shows [`PLAYER_SYMBOL`] whatever lies beneath.
    #[must_use]
    pub fn render(&self, player: Position) -> Vec<String> {
        self.rows()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, cell)| {
                        if player == Position::new(x, y) {
                            PLAYER_SYMBOL
                        } else {
                            cell.symbol()
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
