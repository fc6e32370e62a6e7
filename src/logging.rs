//! Diagnostic logging setup.

use std::{fs::OpenOptions, path::Path, sync::Mutex};

use color_eyre::eyre::{eyre, Result};
use tracing::Level;

/// Installs a global subscriber appending events at or above `level` to the file at `path`.
///
/// Logging goes to a file rather than a standard stream because the full-screen interface owns
/// the terminal while a session runs.
///
/// # Errors
///
/// Returns an error if the file cannot be opened for appending, or if a global subscriber was
/// already installed.
pub(crate) fn init(path: &Path, level: Level) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}
