//! Error kinds reported while loading a maze, and their mapping onto process exit codes.

use std::{io, path::PathBuf, process::ExitCode};

use thiserror::Error;

/// Reasons a piece of text is rejected as a maze.
///
/// Every variant is fatal for the input it was produced from: the loader never hands back a
/// partially validated grid alongside one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// The grid is narrower, wider, shorter or taller than the permitted range.
    #[error("maze is {width}x{height}, both dimensions must be between {min} and {max}")]
    DimensionError {
        /// Number of columns found.
        width: usize,
        /// Number of rows found.
        height: usize,
        /// Smallest permitted dimension.
        min: usize,
        /// Largest permitted dimension.
        max: usize,
    },
    /// The rows do not form a rectangle, or a blank line appears where a row was expected.
    #[error("line {line}: {reason}")]
    InvalidFormat {
        /// One-based line number of the offending row.
        line: usize,
        /// Description of what is wrong with the row.
        reason: String,
    },
    /// A character outside the maze alphabet was found.
    #[error("line {line}, column {column}: invalid character {found:?}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// One-based line number of the character.
        line: usize,
        /// One-based column number of the character.
        column: usize,
    },
    /// The start or end marker is missing or duplicated.
    #[error("expected exactly one {marker:?} marker, found {count}")]
    MarkerError {
        /// The marker character that was miscounted.
        marker: char,
        /// How many times the marker occurs in the grid.
        count: usize,
    },
}

/// Failure to turn a maze file on disk into a validated maze.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read maze file {}: {source}", path.display())]
    Open {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The file was read but its contents are not a valid maze.
    #[error("invalid maze file {}: {source}", path.display())]
    Maze {
        /// Path given on the command line.
        path: PathBuf,
        /// Validation failure.
        source: MazeError,
    },
}

impl LoadError {
    /// Returns the process status this failure should terminate with.
    #[must_use]
    pub const fn exit_status(&self) -> ExitStatus {
        match self {
            Self::Open { .. } => ExitStatus::FileError,
            Self::Maze { .. } => ExitStatus::MazeError,
        }
    }
}

/// Process outcome, mapped onto the numeric exit codes expected by callers of the binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The session ended normally, whether won or quit.
    Success,
    /// The command line could not be parsed.
    ArgumentError,
    /// The maze file could not be opened or read.
    FileError,
    /// The maze file was read but failed validation.
    MazeError,
}

impl ExitStatus {
    /// Numeric exit code of this status.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::ArgumentError => 1,
            Self::FileError => 2,
            Self::MazeError => 3,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        Self::from(status.code())
    }
}
