//! File loading and validation utilities for maze files.

use std::{fs, path::Path};

use tracing::{debug, warn};

use crate::{
    error::{LoadError, MazeError},
    maze::{Maze, MAX_DIM, MIN_DIM},
    types::{Cell, Position},
};

/// Reads a maze file from disk and validates it.
///
/// The file is read as raw bytes. Bytes that are not valid UTF-8 are replaced rather than treated
/// as a read failure, so they surface as [`MazeError::InvalidCharacter`] like any other character
/// outside the maze alphabet.
///
/// # Errors
///
/// - [`LoadError::Open`] if the file cannot be opened or read.
/// - [`LoadError::Maze`] if the contents fail validation, see [`load`].
pub fn read_maze_file(path: &Path) -> Result<Maze, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;

    load(&String::from_utf8_lossy(&bytes)).map_err(|source| {
        warn!(path = %path.display(), error = %source, "rejected maze file");
        LoadError::Maze {
            path: path.to_owned(),
            source,
        }
    })
}

/// Parses and validates the text of a maze file.
///
/// The checks run in a fixed order, and the first one to fail decides the error:
/// - Blank lines, other than a single trailing one, are rejected.
/// - All rows must be as long as the first one.
/// - Both dimensions must lie within [`MIN_DIM`] and [`MAX_DIM`].
/// - Only `#`, space, `S` and `E` may appear.
/// - `S` and `E` must each appear exactly once.
///
/// Lines may end in either `\n` or `\r\n`.
///
/// # Errors
///
/// Returns the [`MazeError`] describing the first rule the input breaks.
pub fn load(input: &str) -> Result<Maze, MazeError> {
    let rows = split_rows(input)?;

    let width = rows.first().map_or(0, |row| row.chars().count());
    for (idx, row) in rows.iter().enumerate() {
        let length = row.chars().count();
        if length != width {
            return Err(MazeError::InvalidFormat {
                line: idx + 1,
                reason: format!("row is {length} characters wide, expected {width}"),
            });
        }
    }

    let height = rows.len();
    if !(MIN_DIM..=MAX_DIM).contains(&width) || !(MIN_DIM..=MAX_DIM).contains(&height) {
        return Err(MazeError::DimensionError {
            width,
            height,
            min: MIN_DIM,
            max: MAX_DIM,
        });
    }

    let mut cells = Vec::with_capacity(width * height);
    let mut starts = Vec::new();
    let mut ends = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, symbol) in row.chars().enumerate() {
            let cell = Cell::from_symbol(symbol).ok_or(MazeError::InvalidCharacter {
                found: symbol,
                line: y + 1,
                column: x + 1,
            })?;

            match cell {
                Cell::Start => starts.push(Position::new(x, y)),
                Cell::End => ends.push(Position::new(x, y)),
                Cell::Wall | Cell::Open => {}
            }
            cells.push(cell);
        }
    }

    let start = unique_marker(&starts, Cell::Start)?;
    let end = unique_marker(&ends, Cell::End)?;

    debug!(width, height, %start, %end, "validated maze");

    Ok(Maze::from_validated(cells, width, height, start, end))
}

/// Splits the input into rows, dropping line terminators and the tolerated trailing blank line.
///
/// Any other empty line is reported as [`MazeError::InvalidFormat`].
fn split_rows(input: &str) -> Result<Vec<&str>, MazeError> {
    let mut rows: Vec<&str> = input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    // The segment after the final terminator is not a line of its own.
    if input.ends_with('\n') {
        let _ = rows.pop();
    }
    if rows.last().is_some_and(|row| row.is_empty()) {
        let _ = rows.pop();
    }

    if let Some(idx) = rows.iter().position(|row| row.is_empty()) {
        return Err(MazeError::InvalidFormat {
            line: idx + 1,
            reason: "unexpected blank line".to_owned(),
        });
    }

    Ok(rows)
}

/// Returns the single position of a marker, or the [`MazeError::MarkerError`] for its count.
fn unique_marker(found: &[Position], marker: Cell) -> Result<Position, MazeError> {
    match found {
        [position] => Ok(*position),
        _ => Err(MazeError::MarkerError {
            marker: marker.symbol(),
            count: found.len(),
        }),
    }
}
